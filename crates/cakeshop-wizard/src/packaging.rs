//! Packaging step controller
//!
//! The final configuration step: packaging option, box size, and the
//! optional gift card. Finalizing writes the packaging preview into the
//! session, then moves the whole configured cake into the cart, either
//! as a new line item or back onto the item being edited, and resets
//! the session.

use cakeshop_builder::{BuilderSession, PackagingPreview};
use cakeshop_cart::{CartItem, CartItemPatch, CartLedger, PackagingDetails, DEFAULT_ITEM_NAME};
use cakeshop_core::catalog::{
    box_sizes, find_box_size, find_packaging, packaging_options, BoxSize, PackagingOption,
};
use cakeshop_core::{pricing, BuilderError, Result};
use tracing::info;

/// Working state of the packaging screen
#[derive(Debug, Clone)]
pub struct PackagingStep {
    packaging_id: String,
    box_size_id: String,
    gift_message: Option<String>,
    recipient_name: Option<String>,
}

impl Default for PackagingStep {
    fn default() -> Self {
        Self {
            packaging_id: "standard".to_string(),
            box_size_id: "medium".to_string(),
            gift_message: None,
            recipient_name: None,
        }
    }
}

impl PackagingStep {
    /// Starts from the session: restores an edited packaging choice or
    /// the free standard box in a medium size
    pub fn from_session(session: &BuilderSession) -> Self {
        let Some(preview) = session.state().packaging_preview.as_ref() else {
            return Self::default();
        };
        // Previews retain display names; map them back to catalog ids.
        let packaging_id = packaging_options()
            .iter()
            .find(|p| p.name == preview.kind)
            .map(|p| p.id)
            .unwrap_or("standard");
        let box_size_id = box_sizes()
            .iter()
            .find(|s| s.name == preview.size)
            .map(|s| s.id)
            .unwrap_or("medium");
        Self {
            packaging_id: packaging_id.to_string(),
            box_size_id: box_size_id.to_string(),
            gift_message: preview.gift_message.clone(),
            recipient_name: preview.recipient_name.clone(),
        }
    }

    /// Selects a packaging option; unknown ids fall back to standard
    pub fn set_packaging(&mut self, id: &str) {
        self.packaging_id = find_packaging(id).id.to_string();
    }

    /// Selects a box size; unknown ids fall back to medium
    pub fn set_box_size(&mut self, id: &str) {
        self.box_size_id = find_box_size(id).id.to_string();
    }

    /// Sets or clears the gift card message
    pub fn set_gift_message(&mut self, message: Option<String>) {
        self.gift_message = message.filter(|m| !m.trim().is_empty());
    }

    /// Sets or clears the gift card recipient
    pub fn set_recipient_name(&mut self, name: Option<String>) {
        self.recipient_name = name.filter(|n| !n.trim().is_empty());
    }

    /// The selected packaging option
    pub fn packaging(&self) -> &'static PackagingOption {
        find_packaging(&self.packaging_id)
    }

    /// The selected box size
    pub fn box_size(&self) -> &'static BoxSize {
        find_box_size(&self.box_size_id)
    }

    /// Packaging price: option price plus the box-size delta
    pub fn price(&self) -> f64 {
        pricing::packaging_price(self.packaging(), self.box_size())
    }

    /// The preview payload this selection commits
    pub fn preview(&self) -> PackagingPreview {
        let packaging = self.packaging();
        PackagingPreview {
            kind: packaging.name.to_string(),
            size: self.box_size().name.to_string(),
            gift_message: self.gift_message.clone(),
            recipient_name: self.recipient_name.clone(),
            image_url: packaging.image_url.to_string(),
        }
    }

    /// Checks that the earlier steps were committed
    ///
    /// The packaging screen is unreachable without taste and appearance
    /// data; a session that lost either resolves to this error and a
    /// redirect to the missing step.
    pub fn ensure_prerequisites(session: &BuilderSession) -> Result<()> {
        let state = session.state();
        if state.taste_preview.is_none() {
            return Err(BuilderError::IncompleteState {
                step: "packaging".to_string(),
                missing: "taste".to_string(),
            }
            .into());
        }
        if state.appearance_preview.is_none() {
            return Err(BuilderError::IncompleteState {
                step: "packaging".to_string(),
                missing: "appearance".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Commits the packaging choice and moves the cake into the cart
    ///
    /// A fresh build appends a new item at quantity 1; an edit patches
    /// the existing item in place, leaving its quantity alone. Either
    /// way the session is reset afterwards so the next build starts
    /// clean. Returns the cart item's identifier.
    pub fn finalize(
        &self,
        session: &mut BuilderSession,
        ledger: &mut CartLedger,
    ) -> Result<String> {
        Self::ensure_prerequisites(session)?;
        session.set_packaging(self.preview(), self.price())?;

        let state = session.state().clone();
        let name = state
            .custom_text
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_ITEM_NAME.to_string());
        let details = PackagingDetails {
            kind: self.packaging().name.to_string(),
            size: Some(self.box_size().name.to_string()),
            gift_message: self.gift_message.clone(),
            recipient_name: self.recipient_name.clone(),
            image_url: Some(self.packaging().image_url.to_string()),
        };

        let item_id = match state.editing_item_id.clone() {
            Some(id) => {
                ledger.update_in_place(
                    &id,
                    CartItemPatch {
                        name: Some(name),
                        price: Some(state.total_price()),
                        custom_text: Some(state.custom_text.clone()),
                        taste_preview: state.taste_preview.clone(),
                        appearance_preview: state.appearance_preview.clone(),
                        packaging_preview: state.packaging_preview.clone(),
                        base_price: Some(state.base_price),
                        appearance_price: Some(state.appearance_price),
                        packaging_price: Some(state.packaging_price),
                        packaging_details: Some(details),
                    },
                )?;
                info!(item_id = %id, total = state.total_price(), "edited cake saved to cart");
                id
            }
            None => {
                let id = CartItem::new_id();
                ledger.append(CartItem {
                    id: id.clone(),
                    name,
                    price: state.total_price(),
                    quantity: 1,
                    custom_text: state.custom_text.clone(),
                    taste_preview: state.taste_preview.clone(),
                    appearance_preview: state.appearance_preview.clone(),
                    packaging_preview: state.packaging_preview.clone(),
                    base_price: Some(state.base_price),
                    appearance_price: Some(state.appearance_price),
                    packaging_price: Some(state.packaging_price),
                    packaging_details: Some(details),
                })?;
                info!(item_id = %id, total = state.total_price(), "new cake added to cart");
                id
            }
        };

        session.reset();
        Ok(item_id)
    }
}
