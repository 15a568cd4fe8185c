//! # Cakeshop Core
//!
//! Core types, catalog data, and pricing rules for the Cakeshop
//! storefront. Provides the fundamental building blocks shared by the
//! builder, cart, and wizard crates:
//! - Error taxonomy for storage, builder, and checkout failures
//! - Static catalogs (layer addons, cake shapes, colors, packaging)
//! - Pricing constants and the per-step price functions

pub mod catalog;
pub mod error;
pub mod pricing;

pub use catalog::{
    Addon, BaseColor, BoxSize, CakeShape, LayerKind, PackagingOption, ShapeKind,
};
pub use error::{BuilderError, CheckoutError, Error, Result, StorageError};
