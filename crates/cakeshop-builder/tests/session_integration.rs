//! Integration tests for the configuration session: price invariants,
//! write-through persistence, edit loading, and corruption fallback.

use cakeshop_builder::{
    AppearancePreview, BuilderSession, CakeLayer, EditState, PackagingPreview, TastePreview,
};
use cakeshop_builder::session::EditSource;
use cakeshop_core::catalog::find_addon;
use cakeshop_store::{keys, MemoryStore, SessionStore, SharedStore};
use std::sync::Arc;

fn memory_store() -> SharedStore {
    Arc::new(MemoryStore::new())
}

fn taste_preview(ids: &[&str]) -> TastePreview {
    TastePreview {
        layers: ids
            .iter()
            .map(|id| CakeLayer::from_addon(find_addon(id).unwrap()))
            .collect(),
    }
}

fn packaging_preview() -> PackagingPreview {
    PackagingPreview {
        kind: "Premium".to_string(),
        size: "Medium (1-2kg)".to_string(),
        gift_message: None,
        recipient_name: None,
        image_url: "/packagings/premium-box.jpg".to_string(),
    }
}

/// A finalized item as the session sees one during edit loading.
struct StoredCake {
    id: String,
    custom_text: Option<String>,
    taste: Option<TastePreview>,
    appearance: Option<AppearancePreview>,
    packaging: Option<PackagingPreview>,
    base_price: Option<f64>,
    appearance_price: Option<f64>,
    packaging_price: Option<f64>,
}

impl EditSource for StoredCake {
    fn item_id(&self) -> &str {
        &self.id
    }
    fn custom_text(&self) -> Option<&str> {
        self.custom_text.as_deref()
    }
    fn taste_preview(&self) -> Option<&TastePreview> {
        self.taste.as_ref()
    }
    fn appearance_preview(&self) -> Option<&AppearancePreview> {
        self.appearance.as_ref()
    }
    fn packaging_preview(&self) -> Option<&PackagingPreview> {
        self.packaging.as_ref()
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

#[test]
fn test_total_is_sum_after_every_mutation() {
    let mut session = BuilderSession::hydrate(memory_store());
    assert_eq!(session.total_price(), 0.0);

    session.set_taste(taste_preview(&["d1", "s1", "j1"]), 28.97).unwrap();
    assert!((session.total_price() - 28.97).abs() < 1e-9);

    session
        .set_appearance(AppearancePreview::default(), 5.39, Some("Hi".to_string()))
        .unwrap();
    assert!((session.total_price() - 34.36).abs() < 1e-9);

    session.set_packaging(packaging_preview(), 15.99).unwrap();
    assert!((session.total_price() - 50.35).abs() < 1e-9);

    let state = session.state();
    assert_eq!(
        session.total_price(),
        state.base_price + state.appearance_price + state.packaging_price
    );
}

#[test]
fn test_write_through_survives_rehydration() {
    let store = memory_store();
    let mut session = BuilderSession::hydrate(store.clone());
    session.set_taste(taste_preview(&["d2", "c1", "t1"]), 22.97).unwrap();
    session
        .set_appearance(AppearancePreview::default(), 0.0, None)
        .unwrap();

    let reloaded = BuilderSession::hydrate(store);
    assert_eq!(reloaded.state(), session.state());
    assert!(!reloaded.is_complete());
}

#[test]
fn test_is_complete_requires_all_three_previews() {
    let mut session = BuilderSession::hydrate(memory_store());
    session.set_taste(taste_preview(&["d1", "c1", "t1"]), 22.97).unwrap();
    session
        .set_appearance(AppearancePreview::default(), 0.0, None)
        .unwrap();
    assert!(!session.is_complete());
    session.set_packaging(packaging_preview(), 15.99).unwrap();
    assert!(session.is_complete());
}

#[test]
fn test_reset_clears_state_and_persisted_blob() {
    let store = memory_store();
    let mut session = BuilderSession::hydrate(store.clone());
    session.set_taste(taste_preview(&["d1", "s1", "c1"]), 27.97).unwrap();
    assert!(store.get_raw(keys::BUILDER_SESSION).is_some());

    session.reset();
    assert_eq!(session.total_price(), 0.0);
    assert!(session.state().taste_preview.is_none());
    assert!(session.state().appearance_preview.is_none());
    assert!(session.state().packaging_preview.is_none());
    assert!(store.get_raw(keys::BUILDER_SESSION).is_none());
}

#[test]
fn test_load_from_cart_item_round_trip() {
    let item = StoredCake {
        id: "item-7".to_string(),
        custom_text: Some("Birthday".to_string()),
        taste: Some(taste_preview(&["d1", "s1", "j1"])),
        appearance: Some(AppearancePreview::default()),
        packaging: Some(packaging_preview()),
        base_price: Some(28.97),
        appearance_price: Some(5.39),
        packaging_price: Some(15.99),
    };

    let mut session = BuilderSession::hydrate(memory_store());
    // Leftover state from an abandoned build must not leak through.
    session.set_taste(taste_preview(&["d3"]), 16.99).unwrap();
    session.load_from_cart_item(&item).unwrap();

    let state = session.state();
    assert_eq!(state.taste_preview.as_ref(), item.taste.as_ref());
    assert_eq!(state.appearance_preview.as_ref(), item.appearance.as_ref());
    assert_eq!(state.packaging_preview.as_ref(), item.packaging.as_ref());
    assert_eq!(state.base_price, 28.97);
    assert_eq!(state.appearance_price, 5.39);
    assert_eq!(state.packaging_price, 15.99);
    assert_eq!(state.custom_text.as_deref(), Some("Birthday"));
    assert_eq!(session.editing_item_id(), Some("item-7"));
}

#[test]
fn test_load_defaults_absent_fields_to_zero() {
    let bare = StoredCake {
        id: "bare".to_string(),
        custom_text: None,
        taste: None,
        appearance: None,
        packaging: None,
        base_price: None,
        appearance_price: None,
        packaging_price: None,
    };

    let mut session = BuilderSession::hydrate(memory_store());
    session.set_packaging(packaging_preview(), 15.99).unwrap();
    session.load_from_cart_item(&bare).unwrap();

    assert_eq!(session.total_price(), 0.0);
    assert!(session.state().packaging_preview.is_none());
    assert_eq!(session.editing_item_id(), Some("bare"));
}

#[test]
fn test_corrupt_persisted_blob_hydrates_to_default() {
    let store = memory_store();
    store
        .set_raw(keys::BUILDER_SESSION, "not valid json {{{")
        .unwrap();

    let session = BuilderSession::hydrate(store);
    assert_eq!(session.total_price(), 0.0);
    assert!(!session.is_complete());
    assert!(session.editing_item_id().is_none());
}

#[test]
fn test_reconcile_edit_transitions() {
    let store = memory_store();
    let mut session = BuilderSession::hydrate(store.clone());

    let lookup = |id: &str| {
        (id == "known").then(|| StoredCake {
            id: id.to_string(),
            custom_text: None,
            taste: Some(taste_preview(&["d1", "c1", "t1"])),
            appearance: None,
            packaging: None,
            base_price: Some(22.97),
            appearance_price: None,
            packaging_price: None,
        })
    };

    // Fresh page, no marker.
    assert_eq!(
        session.reconcile_edit(None, lookup).unwrap(),
        EditState::Fresh
    );

    // Entering with a marker loads the item.
    assert_eq!(
        session.reconcile_edit(Some("known"), lookup).unwrap(),
        EditState::Editing
    );
    assert_eq!(session.editing_item_id(), Some("known"));
    let loaded = session.state().clone();

    // Re-entering with the same marker trusts the session.
    assert_eq!(
        session.reconcile_edit(Some("known"), lookup).unwrap(),
        EditState::Editing
    );
    assert_eq!(session.state(), &loaded);

    // A dangling marker resets to a fresh build.
    assert_eq!(
        session.reconcile_edit(Some("gone"), lookup).unwrap(),
        EditState::Fresh
    );
    assert!(session.editing_item_id().is_none());

    // Editing id left behind without a marker forces a reset.
    session.reconcile_edit(Some("known"), lookup).unwrap();
    assert_eq!(
        session.reconcile_edit(None, lookup).unwrap(),
        EditState::Fresh
    );
    assert!(store.get_raw(keys::BUILDER_SESSION).is_none());
}
