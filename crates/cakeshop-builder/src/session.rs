//! The configuration session
//!
//! [`BuilderSession`] holds the accumulated state of one cake across the
//! three build steps: the three preview payloads, their three price
//! components, the display-name candidate, and the identifier of the
//! cart item being edited, if any. Every mutation persists the full
//! state to the session store before returning (write-through), so a
//! reload mid-wizard restores exactly the last committed step.

use crate::preview::{AppearancePreview, PackagingPreview, TastePreview};
use crate::reconcile::{reconcile, EditState, Reconciliation};
use cakeshop_core::Result;
use cakeshop_store::{keys, SessionStore, SharedStore, StoreExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The persisted session state
///
/// Invariant: each price field is non-negative and reflects the computed
/// cost of the corresponding preview; the total is always their sum.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderState {
    pub taste_preview: Option<TastePreview>,
    pub appearance_preview: Option<AppearancePreview>,
    pub packaging_preview: Option<PackagingPreview>,
    pub base_price: f64,
    pub appearance_price: f64,
    pub packaging_price: f64,
    pub custom_text: Option<String>,
    pub editing_item_id: Option<String>,
}

impl BuilderState {
    /// Sum of the three price components
    pub fn total_price(&self) -> f64 {
        self.base_price + self.appearance_price + self.packaging_price
    }
}

/// A finalized cart entry viewed as input for re-editing
///
/// Implemented by the cart crate's line item; the builder only needs
/// read access to the retained previews and price components.
pub trait EditSource {
    /// The cart item identifier
    fn item_id(&self) -> &str;
    /// The custom display name, if one was set
    fn custom_text(&self) -> Option<&str>;
    /// The retained taste preview
    fn taste_preview(&self) -> Option<&TastePreview>;
    /// The retained appearance preview
    fn appearance_preview(&self) -> Option<&AppearancePreview>;
    /// The retained packaging preview
    fn packaging_preview(&self) -> Option<&PackagingPreview>;
    /// The retained base price component
    fn base_price(&self) -> Option<f64>;
    /// The retained appearance price component
    fn appearance_price(&self) -> Option<f64>;
    /// The retained packaging price component
    fn packaging_price(&self) -> Option<f64>;
}

/// Write-through persisted configuration session
pub struct BuilderSession {
    state: BuilderState,
    store: SharedStore,
}

impl BuilderSession {
    /// Opens the session, hydrating from the store
    ///
    /// An absent or malformed persisted blob yields the empty default.
    pub fn hydrate(store: SharedStore) -> Self {
        let state = store
            .get_json::<BuilderState>(keys::BUILDER_SESSION)
            .unwrap_or_default();
        Self { state, store }
    }

    /// The current session state
    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    /// Sum of the three price components
    pub fn total_price(&self) -> f64 {
        self.state.total_price()
    }

    /// The cart item currently being edited, if any
    pub fn editing_item_id(&self) -> Option<&str> {
        self.state.editing_item_id.as_deref()
    }

    /// Replaces the taste preview and base price
    pub fn set_taste(&mut self, preview: TastePreview, price: f64) -> Result<()> {
        debug!(price, layers = preview.layers.len(), "taste preview set");
        self.state.taste_preview = Some(preview);
        self.state.base_price = price;
        self.persist()
    }

    /// Replaces the appearance preview, price, and display-name candidate
    pub fn set_appearance(
        &mut self,
        preview: AppearancePreview,
        price: f64,
        custom_text: Option<String>,
    ) -> Result<()> {
        debug!(price, "appearance preview set");
        self.state.appearance_preview = Some(preview);
        self.state.appearance_price = price;
        self.state.custom_text = custom_text;
        self.persist()
    }

    /// Replaces the packaging preview and price
    pub fn set_packaging(&mut self, preview: PackagingPreview, price: f64) -> Result<()> {
        debug!(price, "packaging preview set");
        self.state.packaging_preview = Some(preview);
        self.state.packaging_price = price;
        self.persist()
    }

    /// Overwrites the whole session from an existing cart item
    ///
    /// Fields absent on the source default to empty/zero; nothing from
    /// the previous session survives. Marks the session as editing the
    /// item.
    pub fn load_from_cart_item<I: EditSource>(&mut self, item: &I) -> Result<()> {
        debug!(item_id = item.item_id(), "loading cart item into builder");
        self.state = BuilderState {
            taste_preview: item.taste_preview().cloned(),
            appearance_preview: item.appearance_preview().cloned(),
            packaging_preview: item.packaging_preview().cloned(),
            base_price: item.base_price().unwrap_or(0.0),
            appearance_price: item.appearance_price().unwrap_or(0.0),
            packaging_price: item.packaging_price().unwrap_or(0.0),
            custom_text: item.custom_text().map(str::to_string),
            editing_item_id: Some(item.item_id().to_string()),
        };
        self.persist()
    }

    /// Clears every field and removes the persisted blob
    pub fn reset(&mut self) {
        debug!("builder session reset");
        self.state = BuilderState::default();
        self.store.remove(keys::BUILDER_SESSION);
    }

    /// Whether all three previews are present
    ///
    /// Used to gate navigation into checkout; not enforced internally.
    pub fn is_complete(&self) -> bool {
        self.state.taste_preview.is_some()
            && self.state.appearance_preview.is_some()
            && self.state.packaging_preview.is_some()
    }

    /// Reconciles the session against a step page's edit marker
    ///
    /// Applies the decision of [`reconcile`]: a matching marker keeps
    /// the in-progress session, a new marker loads the referenced item,
    /// a dangling marker or a left-behind editing id resets to a fresh
    /// build.
    pub fn reconcile_edit<I, F>(&mut self, marker: Option<&str>, lookup: F) -> Result<EditState>
    where
        I: EditSource,
        F: FnOnce(&str) -> Option<I>,
    {
        match reconcile(marker, &self.state, lookup) {
            Reconciliation::KeepSession => Ok(EditState::Editing),
            Reconciliation::LoadItem(item) => {
                self.load_from_cart_item(&item)?;
                Ok(EditState::Editing)
            }
            Reconciliation::ResetMissing(id) => {
                warn!(item_id = %id, "edit marker references a missing cart item");
                self.reset();
                Ok(EditState::Fresh)
            }
            Reconciliation::ResetStale => {
                self.reset();
                Ok(EditState::Fresh)
            }
            Reconciliation::Untouched => Ok(EditState::Fresh),
        }
    }

    fn persist(&self) -> Result<()> {
        self.store.set_json(keys::BUILDER_SESSION, &self.state)
    }
}
