//! Checkout aggregation
//!
//! [`calculate_total`] is a pure function of the current cart contents
//! and the chosen delivery method; nothing is cached. [`CheckoutState`]
//! carries the customer and delivery records between the checkout steps
//! and persists each under its own store key.

use crate::details::{CustomerDetails, DeliveryDetails, DeliveryMethod};
use crate::item::CartItem;
use crate::ledger::CartLedger;
use cakeshop_core::{pricing, CheckoutError, Result};
use cakeshop_store::{keys, SessionStore, SharedStore, StoreExt};
use serde::{Deserialize, Serialize};

/// Derived order totals; computed on demand, never stored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Sum of unit price times quantity across the cart
    pub subtotal: f64,
    /// Flat fee for shipping, zero for pickup
    pub delivery_fee: f64,
    /// Subtotal plus delivery fee
    pub total: f64,
}

/// Computes the order totals for the given cart and delivery choice
pub fn calculate_total(items: &[CartItem], delivery: &DeliveryDetails) -> OrderSummary {
    let subtotal: f64 = items.iter().map(CartItem::line_total).sum();
    let delivery_fee = match delivery.delivery_method {
        DeliveryMethod::Shipping => pricing::DELIVERY_FEE,
        DeliveryMethod::Pickup => 0.0,
    };
    OrderSummary {
        subtotal,
        delivery_fee,
        total: subtotal + delivery_fee,
    }
}

/// Store-backed carrier of the checkout detail records
pub struct CheckoutState {
    customer: Option<CustomerDetails>,
    delivery: Option<DeliveryDetails>,
    store: SharedStore,
}

impl CheckoutState {
    /// Opens the checkout state, hydrating both records from the store
    pub fn hydrate(store: SharedStore) -> Self {
        let customer = store.get_json(keys::CUSTOMER_DETAILS);
        let delivery = store.get_json(keys::DELIVERY_DETAILS);
        Self {
            customer,
            delivery,
            store,
        }
    }

    /// The captured customer record, if any
    pub fn customer_details(&self) -> Option<&CustomerDetails> {
        self.customer.as_ref()
    }

    /// The captured delivery record, if any
    pub fn delivery_details(&self) -> Option<&DeliveryDetails> {
        self.delivery.as_ref()
    }

    /// Stores the customer record, persisting write-through
    pub fn set_customer_details(&mut self, details: CustomerDetails) -> Result<()> {
        self.store.set_json(keys::CUSTOMER_DETAILS, &details)?;
        self.customer = Some(details);
        Ok(())
    }

    /// Stores the delivery record, persisting write-through
    pub fn set_delivery_details(&mut self, details: DeliveryDetails) -> Result<()> {
        self.store.set_json(keys::DELIVERY_DETAILS, &details)?;
        self.delivery = Some(details);
        Ok(())
    }

    /// Drops both records and their persisted blobs
    pub fn clear(&mut self) {
        self.customer = None;
        self.delivery = None;
        self.store.remove(keys::CUSTOMER_DETAILS);
        self.store.remove(keys::DELIVERY_DETAILS);
    }

    /// Gate for the summary step: cart, customer, and delivery must all
    /// be present before totals are shown
    pub fn order_summary(&self, cart: &CartLedger) -> std::result::Result<OrderSummary, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if self.customer.is_none() {
            return Err(CheckoutError::MissingCustomerDetails);
        }
        let Some(delivery) = self.delivery.as_ref() else {
            return Err(CheckoutError::MissingDeliveryDetails);
        };
        Ok(calculate_total(cart.items(), delivery))
    }
}
