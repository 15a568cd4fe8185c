//! # Cakeshop Cart
//!
//! The persisted collection of finalized cake orders awaiting checkout,
//! plus the records and math the checkout steps run on:
//! - [`CartItem`] line items with frozen prices and retained previews
//! - [`CartLedger`], the write-through persisted ordered collection
//! - Customer and delivery detail records
//! - [`checkout::calculate_total`], the pure order aggregation

pub mod checkout;
pub mod details;
pub mod item;
pub mod ledger;

pub use checkout::{calculate_total, CheckoutState, OrderSummary};
pub use details::{
    Address, CustomerDetails, CustomerType, DeliveryDetails, DeliveryMethod,
};
pub use item::{CartItem, CartItemPatch, PackagingDetails, DEFAULT_ITEM_NAME};
pub use ledger::CartLedger;
