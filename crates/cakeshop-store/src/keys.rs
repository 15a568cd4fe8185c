//! Well-known session store keys
//!
//! Each persisted concern owns a distinct key and an independent blob.
//! The builder session and the cart deliberately persist separately so
//! that abandoning an in-progress build never touches carted items.

/// In-progress configuration session (the cake builder state)
pub const BUILDER_SESSION: &str = "cakeBuilderState";

/// Finalized cart line items awaiting checkout
pub const SHOPPING_CART: &str = "shopping-cart";

/// Customer identity and contact record
pub const CUSTOMER_DETAILS: &str = "customer-details";

/// Delivery method, address, and time-window record
pub const DELIVERY_DETAILS: &str = "delivery-details";
