//! Cart line items
//!
//! A [`CartItem`] freezes the configured cake at the moment it was added:
//! its unit price, the three preview payloads, and the three price
//! components are retained verbatim so the cart, summary, and edit flows
//! can redisplay and reconstruct the build without touching the catalog.
//! Catalog price changes never retroactively alter carted items.

use cakeshop_builder::session::EditSource;
use cakeshop_builder::{AppearancePreview, PackagingPreview, TastePreview};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fallback display name when the shopper set no custom text
pub const DEFAULT_ITEM_NAME: &str = "Custom Cake";

/// Compact packaging summary for cart and summary rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingDetails {
    /// Packaging option display name
    #[serde(rename = "type")]
    pub kind: String,
    /// Box size display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Gift message, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_message: Option<String>,
    /// Gift recipient, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    /// Preview image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One finalized cake in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Generated unique identifier
    pub id: String,
    /// Display name: the custom text or [`DEFAULT_ITEM_NAME`]
    pub name: String,
    /// Unit price, frozen at creation/edit time
    pub price: f64,
    /// Quantity, always at least 1
    pub quantity: u32,
    /// The custom text the name was derived from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<String>,
    /// Retained taste preview for redisplay and re-editing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taste_preview: Option<TastePreview>,
    /// Retained appearance preview
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance_preview: Option<AppearancePreview>,
    /// Retained packaging preview
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_preview: Option<PackagingPreview>,
    /// Retained base/layers price component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    /// Retained appearance price component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance_price: Option<f64>,
    /// Retained packaging price component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_price: Option<f64>,
    /// Compact packaging summary for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_details: Option<PackagingDetails>,
}

impl CartItem {
    /// Generates a fresh cart item identifier
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Line total: unit price times quantity
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Field-wise update applied by [`crate::CartLedger::update_in_place`]
///
/// `Some` fields replace the item's value, `None` fields are left
/// untouched. Quantity is not patchable; it only changes through the
/// ledger's quantity controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    /// Outer `Some` writes the field; `Some(None)` clears it, so an edit
    /// that deleted every text decoration drops the stale name source
    pub custom_text: Option<Option<String>>,
    pub taste_preview: Option<TastePreview>,
    pub appearance_preview: Option<AppearancePreview>,
    pub packaging_preview: Option<PackagingPreview>,
    pub base_price: Option<f64>,
    pub appearance_price: Option<f64>,
    pub packaging_price: Option<f64>,
    pub packaging_details: Option<PackagingDetails>,
}

impl CartItemPatch {
    /// Merges this patch into `item`
    pub(crate) fn apply(self, item: &mut CartItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(text) = self.custom_text {
            item.custom_text = text;
        }
        if let Some(preview) = self.taste_preview {
            item.taste_preview = Some(preview);
        }
        if let Some(preview) = self.appearance_preview {
            item.appearance_preview = Some(preview);
        }
        if let Some(preview) = self.packaging_preview {
            item.packaging_preview = Some(preview);
        }
        if let Some(price) = self.base_price {
            item.base_price = Some(price);
        }
        if let Some(price) = self.appearance_price {
            item.appearance_price = Some(price);
        }
        if let Some(price) = self.packaging_price {
            item.packaging_price = Some(price);
        }
        if let Some(details) = self.packaging_details {
            item.packaging_details = Some(details);
        }
    }
}

impl EditSource for CartItem {
    fn item_id(&self) -> &str {
        &self.id
    }
    fn custom_text(&self) -> Option<&str> {
        self.custom_text.as_deref()
    }
    fn taste_preview(&self) -> Option<&TastePreview> {
        self.taste_preview.as_ref()
    }
    fn appearance_preview(&self) -> Option<&AppearancePreview> {
        self.appearance_preview.as_ref()
    }
    fn packaging_preview(&self) -> Option<&PackagingPreview> {
        self.packaging_preview.as_ref()
    }
    fn base_price(&self) -> Option<f64> {
        self.base_price
    }
    fn appearance_price(&self) -> Option<f64> {
        self.appearance_price
    }
    fn packaging_price(&self) -> Option<f64> {
        self.packaging_price
    }
}
