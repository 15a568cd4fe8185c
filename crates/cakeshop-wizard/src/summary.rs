//! Summary and confirmation
//!
//! The last checkout step: re-runs the summary gate, simulates the
//! payment, assigns an order number, and empties the cart. The captured
//! customer and delivery records are left in place so a follow-up order
//! starts with a pre-filled form.

use cakeshop_cart::{CartLedger, CheckoutState, OrderSummary};
use cakeshop_core::Result;
use tracing::info;
use uuid::Uuid;

/// The placed order, as shown on the confirmation screen
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    /// Human-readable order number, e.g. `ZAM-3F2A81C0D`
    pub order_number: String,
    /// The totals the shopper confirmed
    pub summary: OrderSummary,
}

/// Places the order
///
/// Fails with the first unmet checkout precondition (empty cart, missing
/// customer record, missing delivery record); on success the cart is
/// emptied and the confirmed totals come back with a fresh order number.
pub fn place_order(
    cart: &mut CartLedger,
    checkout: &CheckoutState,
) -> Result<OrderConfirmation> {
    let summary = checkout.order_summary(cart)?;
    let order_number = generate_order_number();
    info!(order_number = %order_number, total = summary.total, "order placed");
    cart.clear()?;
    Ok(OrderConfirmation {
        order_number,
        summary,
    })
}

fn generate_order_number() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("ZAM-{}", id[..9].to_uppercase())
}
