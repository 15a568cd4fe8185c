//! The cart ledger
//!
//! An ordered, write-through persisted collection of finalized cart
//! items. Reads are synchronous from memory; the collection is hydrated
//! from the session store once at construction and re-persisted in full
//! after every mutation, so a reload always observes the most recent
//! completed change.

use crate::item::{CartItem, CartItemPatch};
use cakeshop_core::Result;
use cakeshop_store::{keys, SharedStore, StoreExt};
use tracing::{debug, warn};

/// Write-through persisted cart collection
pub struct CartLedger {
    items: Vec<CartItem>,
    store: SharedStore,
}

impl CartLedger {
    /// Opens the ledger, hydrating from the store
    ///
    /// An absent or malformed persisted cart yields an empty ledger.
    pub fn hydrate(store: SharedStore) -> Self {
        let items = store
            .get_json::<Vec<CartItem>>(keys::SHOPPING_CART)
            .unwrap_or_default();
        Self { items, store }
    }

    /// The items in insertion order
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all items
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Finds an item by identifier
    pub fn find(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Appends a fully-formed item to the end of the collection
    pub fn append(&mut self, item: CartItem) -> Result<()> {
        debug!(item_id = %item.id, price = item.price, "cart item appended");
        self.items.push(item);
        self.persist()
    }

    /// Merges `patch` into the item matching `id`
    ///
    /// A missing id is a no-op, logged at `warn`.
    pub fn update_in_place(&mut self, id: &str, patch: CartItemPatch) -> Result<()> {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                patch.apply(item);
                debug!(item_id = %id, "cart item updated in place");
                self.persist()
            }
            None => {
                warn!(item_id = %id, "update target not in cart, ignoring");
                Ok(())
            }
        }
    }

    /// Increments the quantity of the item matching `id`
    pub fn increment(&mut self, id: &str) -> Result<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity += 1;
            return self.persist();
        }
        warn!(item_id = %id, "increment target not in cart, ignoring");
        Ok(())
    }

    /// Decrements the quantity of the item matching `id`
    ///
    /// An item at quantity 1 is removed entirely.
    pub fn decrement(&mut self, id: &str) -> Result<()> {
        let Some(pos) = self.items.iter().position(|i| i.id == id) else {
            warn!(item_id = %id, "decrement target not in cart, ignoring");
            return Ok(());
        };
        if self.items[pos].quantity > 1 {
            self.items[pos].quantity -= 1;
        } else {
            self.items.remove(pos);
        }
        self.persist()
    }

    /// Unconditionally deletes the item matching `id`
    pub fn remove(&mut self, id: &str) -> Result<()> {
        self.items.retain(|i| i.id != id);
        self.persist()
    }

    /// Empties the collection; called on order confirmation
    pub fn clear(&mut self) -> Result<()> {
        debug!("cart cleared");
        self.items.clear();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.store.set_json(keys::SHOPPING_CART, &self.items)
    }
}
