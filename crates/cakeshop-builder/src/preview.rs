//! Preview payloads
//!
//! A preview payload is a serializable description of one build step's
//! visual result, retained verbatim on cart items so the cart, summary,
//! and edit flows can re-render the cake without re-deriving anything.
//! Field names follow the persisted wire format (camelCase, `type` for
//! category tags), so blobs written by earlier sessions hydrate cleanly.

use cakeshop_core::catalog::{Addon, CakeShape};
use cakeshop_core::{catalog, pricing, LayerKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One slice of the cake's flavor stack
///
/// Position in [`TastePreview::layers`] is meaningful: index 0 is the
/// bottom of the cake, and the structure rules validate against that
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeLayer {
    /// Unique instance identifier
    pub id: String,
    /// Display name from the addon catalog
    pub name: String,
    /// Layer category
    #[serde(rename = "type")]
    pub kind: LayerKind,
    /// Display color (hex)
    pub color: String,
    /// Relative height in preview units
    pub height: f64,
    /// Catalog price at the time the layer was added
    pub price: f64,
}

impl CakeLayer {
    /// Creates a layer instance from a catalog addon
    pub fn from_addon(addon: &Addon) -> Self {
        Self {
            id: format!("layer_{}", Uuid::new_v4().simple()),
            name: addon.name.to_string(),
            kind: addon.kind,
            color: addon.color.to_string(),
            height: addon.height,
            price: addon.price,
        }
    }
}

/// Visual result of the taste step: the ordered flavor stack
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TastePreview {
    pub layers: Vec<CakeLayer>,
}

impl TastePreview {
    /// Sum of the retained layer prices
    pub fn price(&self) -> f64 {
        pricing::layer_total(self.layers.iter().map(|l| l.price))
    }
}

/// A text decoration placed on the cake surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    /// Unique instance identifier
    pub id: String,
    /// The decoration text
    pub text: String,
    /// Text color (hex)
    pub color: String,
    /// Font size in px; sizes above the threshold carry a surcharge
    pub font_size: f64,
    /// Font family name
    pub font_family: String,
    /// Horizontal position on the preview canvas
    pub x: f64,
    /// Vertical position on the preview canvas
    pub y: f64,
    /// Computed price at the current font size
    pub price: f64,
}

/// An uploaded image decoration placed on the cake surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    /// Unique instance identifier
    pub id: String,
    /// Embedded image data (size-capped data URL)
    pub src: String,
    /// Horizontal position on the preview canvas
    pub x: f64,
    /// Vertical position on the preview canvas
    pub y: f64,
    /// Rendered width in px; widths above the threshold carry a surcharge
    pub width: f64,
    /// Rotation in degrees
    pub rotation: f64,
    /// Computed price at the current width
    pub price: f64,
}

/// Visual result of the appearance step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearancePreview {
    /// The cake outline
    pub shape: CakeShape,
    /// Base frosting color (hex)
    pub base_color: String,
    /// Text decorations
    pub texts: Vec<TextElement>,
    /// Image decorations
    pub images: Vec<ImageElement>,
}

impl Default for AppearancePreview {
    fn default() -> Self {
        Self {
            shape: catalog::cake_shapes().swap_remove(0),
            base_color: catalog::base_colors()[0].value.to_string(),
            texts: Vec::new(),
            images: Vec::new(),
        }
    }
}

impl AppearancePreview {
    /// Appearance price: element prices plus the once-per-cake shape
    /// premium
    pub fn price(&self) -> f64 {
        let texts: f64 = self.texts.iter().map(|t| t.price).sum();
        let images: f64 = self.images.iter().map(|i| i.price).sum();
        texts + images + pricing::shape_premium(self.shape.kind)
    }
}

/// Visual result of the packaging step, shaped for read-only redisplay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingPreview {
    /// Display name of the chosen packaging option
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name of the chosen box size
    pub size: String,
    /// Optional gift message printed on a card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_message: Option<String>,
    /// Optional recipient name for the gift card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    /// Preview image reference
    pub image_url: String,
}
