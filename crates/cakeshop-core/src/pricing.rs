//! Pricing rules for the cake builder
//!
//! This module provides:
//! - The pricing constants for decorations, shapes, and delivery
//! - The four per-step price functions (layers, text, image, packaging)
//!
//! All size-based surcharges clamp the input to the threshold before
//! scaling: an element below the threshold contributes no surcharge,
//! never a negative one. Every function here is pure.

use crate::catalog::{BoxSize, PackagingOption, ShapeKind};

/// Flat price of a text decoration
pub const TEXT_BASE_PRICE: f64 = 4.99;
/// Surcharge per font-size unit above [`TEXT_SIZE_THRESHOLD`]
pub const TEXT_SIZE_FACTOR: f64 = 0.1;
/// Font size (px) included in the base text price
pub const TEXT_SIZE_THRESHOLD: f64 = 20.0;

/// Flat price of an image decoration
pub const IMAGE_BASE_PRICE: f64 = 7.99;
/// Surcharge per width unit above [`IMAGE_WIDTH_THRESHOLD`]
pub const IMAGE_SIZE_FACTOR: f64 = 0.05;
/// Image width (px) included in the base image price
pub const IMAGE_WIDTH_THRESHOLD: f64 = 50.0;

/// Surcharge for a heart-shaped cake
pub const HEART_PREMIUM: f64 = 5.99;
/// Surcharge for a triangular cake
pub const TRIANGLE_PREMIUM: f64 = 3.99;

/// Flat delivery fee charged when the order is shipped
pub const DELIVERY_FEE: f64 = 19.99;

/// Maximum embedded image payload accepted by the appearance step, in
/// bytes. Matches the storage budget of a 150x150 JPEG data URL.
pub const MAX_IMAGE_DATA_BYTES: usize = 200_000;

/// Price of a text decoration at the given font size
pub fn text_price(font_size: f64) -> f64 {
    let size_extra = (font_size - TEXT_SIZE_THRESHOLD).max(0.0) * TEXT_SIZE_FACTOR;
    TEXT_BASE_PRICE + size_extra
}

/// Price of an image decoration at the given width
pub fn image_price(width: f64) -> f64 {
    let size_extra = (width - IMAGE_WIDTH_THRESHOLD).max(0.0) * IMAGE_SIZE_FACTOR;
    IMAGE_BASE_PRICE + size_extra
}

/// Flat surcharge for a premium cake outline, zero for basic shapes
///
/// Applied once per cake, not per decoration element.
pub fn shape_premium(kind: ShapeKind) -> f64 {
    match kind {
        ShapeKind::Heart => HEART_PREMIUM,
        ShapeKind::Triangle => TRIANGLE_PREMIUM,
        ShapeKind::Circle | ShapeKind::Square | ShapeKind::Rectangle => 0.0,
    }
}

/// Sum of the catalog prices of the given layer prices
///
/// The taste step keeps each layer's price alongside the layer, so the
/// base price is a plain sum with no quantity discount.
pub fn layer_total(layer_prices: impl IntoIterator<Item = f64>) -> f64 {
    layer_prices.into_iter().sum()
}

/// Packaging price: option price plus the box-size delta
pub fn packaging_price(option: &PackagingOption, size: &BoxSize) -> f64 {
    option.price + size.price_delta
}
