//! Product catalogs for the cake builder
//!
//! This module provides the static catalog data every wizard step draws
//! from:
//! - Layer addons (doughs, sponges, jellies, fruits, creams, toppings)
//! - Cake shapes with optional SVG outlines and premium surcharges
//! - Base frosting colors
//! - Packaging options and box-size modifiers
//!
//! Prices carried here are catalog prices at selection time; cart items
//! freeze their price when they are created and are never repriced
//! against these tables.

pub mod addons;
pub mod colors;
pub mod packaging;
pub mod shapes;

pub use addons::{find_addon, find_addon_by_name, layer_addons, Addon, LayerKind};
pub use colors::{base_colors, BaseColor};
pub use packaging::{
    box_sizes, find_box_size, find_packaging, packaging_options, BoxSize, PackagingOption,
};
pub use shapes::{cake_shapes, find_shape, CakeShape, ShapeKind};
