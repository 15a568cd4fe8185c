//! Cart step controller
//!
//! A thin view over the [`CartLedger`]: quantity controls, per-line and
//! cart totals, and the edit route that sends a line item back through
//! the configuration steps.

use crate::nav::Route;
use cakeshop_cart::{CartItem, CartLedger};
use cakeshop_core::Result;

/// Working state of the cart screen
pub struct CartStep<'a> {
    ledger: &'a mut CartLedger,
}

impl<'a> CartStep<'a> {
    pub fn new(ledger: &'a mut CartLedger) -> Self {
        Self { ledger }
    }

    /// The items in insertion order
    pub fn items(&self) -> &[CartItem] {
        self.ledger.items()
    }

    /// Whether the cart has nothing to check out
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Badge count: total quantity across all items
    pub fn item_count(&self) -> u32 {
        self.ledger.item_count()
    }

    /// Line total for one item, unit price times quantity
    pub fn line_total(&self, id: &str) -> Option<f64> {
        self.ledger.find(id).map(CartItem::line_total)
    }

    /// Sum of the line totals, before any delivery fee
    pub fn subtotal(&self) -> f64 {
        self.ledger.items().iter().map(CartItem::line_total).sum()
    }

    /// The "+" quantity control
    pub fn increment(&mut self, id: &str) -> Result<()> {
        self.ledger.increment(id)
    }

    /// The "-" quantity control; removes the line at quantity 1
    pub fn decrement(&mut self, id: &str) -> Result<()> {
        self.ledger.decrement(id)
    }

    /// The trash control: deletes the line regardless of quantity
    pub fn remove(&mut self, id: &str) -> Result<()> {
        self.ledger.remove(id)
    }

    /// Route the line's "edit" action navigates to
    ///
    /// Points at the taste step with the item's edit marker; `None` when
    /// the item is not in the cart.
    pub fn edit_route(&self, id: &str) -> Option<Route> {
        self.ledger.find(id).map(|item| Route::edit_item(&item.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Step;
    use cakeshop_store::MemoryStore;
    use std::sync::Arc;

    fn ledger_with(items: &[(&str, f64, u32)]) -> CartLedger {
        let mut ledger = CartLedger::hydrate(Arc::new(MemoryStore::new()));
        for (id, price, quantity) in items {
            ledger
                .append(CartItem {
                    id: id.to_string(),
                    name: "Custom Cake".to_string(),
                    price: *price,
                    quantity: *quantity,
                    custom_text: None,
                    taste_preview: None,
                    appearance_preview: None,
                    packaging_preview: None,
                    base_price: None,
                    appearance_price: None,
                    packaging_price: None,
                    packaging_details: None,
                })
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_totals() {
        let mut ledger = ledger_with(&[("a", 50.35, 2), ("b", 19.99, 1)]);
        let view = CartStep::new(&mut ledger);
        assert_eq!(view.item_count(), 3);
        assert!((view.line_total("a").unwrap() - 100.70).abs() < 1e-9);
        assert!((view.subtotal() - 120.69).abs() < 1e-9);
        assert!(view.line_total("missing").is_none());
    }

    #[test]
    fn test_quantity_controls_pass_through() {
        let mut ledger = ledger_with(&[("a", 10.0, 1)]);
        let mut view = CartStep::new(&mut ledger);
        view.increment("a").unwrap();
        assert_eq!(view.item_count(), 2);
        view.decrement("a").unwrap();
        view.decrement("a").unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_edit_route_carries_marker() {
        let mut ledger = ledger_with(&[("a", 10.0, 1)]);
        let view = CartStep::new(&mut ledger);
        let route = view.edit_route("a").unwrap();
        assert_eq!(route.step, Step::Taste);
        assert_eq!(route.marker(), Some("a"));
        assert!(view.edit_route("missing").is_none());
    }
}
