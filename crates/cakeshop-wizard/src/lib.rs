//! # Cakeshop Wizard
//!
//! The step controllers of the storefront: three configuration steps
//! (taste, appearance, packaging) and three checkout steps (cart,
//! delivery, summary/confirmation). Each controller owns the working
//! state of its screen, performs the price math of its own step, and
//! commits into the shared [`cakeshop_builder::BuilderSession`] or the
//! [`cakeshop_cart::CartLedger`]. Rendering is out of scope; these types
//! model exactly what the screens read and write.

pub mod appearance;
pub mod cart_view;
pub mod delivery;
pub mod nav;
pub mod packaging;
pub mod summary;
pub mod taste;

pub use appearance::{AppearanceStep, ImageUpdate, TextUpdate};
pub use cart_view::CartStep;
pub use delivery::{DeliveryForm, FieldIssue};
pub use nav::{Route, Step};
pub use packaging::PackagingStep;
pub use summary::{place_order, OrderConfirmation};
pub use taste::TasteStep;
