//! Taste step controller
//!
//! Owns the working layer stack: adding addons from the catalog,
//! removing and reordering layers, importing a saved layer-name list,
//! and the running base price. Committing validates the structure rules
//! and writes the taste preview into the session.

use cakeshop_builder::{validate, BuilderSession, CakeLayer, StructureIssue, TastePreview};
use cakeshop_core::catalog::{find_addon_by_name, Addon};
use cakeshop_core::{pricing, BuilderError, Result};
use tracing::debug;

/// Working state of the taste screen
#[derive(Debug, Clone, Default)]
pub struct TasteStep {
    layers: Vec<CakeLayer>,
}

impl TasteStep {
    /// Starts with an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-populates the stack from the session's taste preview
    ///
    /// Used when re-entering the step during an edit; a session without
    /// a taste preview yields an empty stack.
    pub fn from_session(session: &BuilderSession) -> Self {
        let layers = session
            .state()
            .taste_preview
            .as_ref()
            .map(|p| p.layers.clone())
            .unwrap_or_default();
        Self { layers }
    }

    /// Builds a stack from a saved layer-name list
    ///
    /// Names resolve case-insensitively against the addon catalog;
    /// unknown names are skipped.
    pub fn from_layer_names<S: AsRef<str>>(names: &[S]) -> Self {
        let layers = names
            .iter()
            .filter_map(|name| find_addon_by_name(name.as_ref()))
            .map(CakeLayer::from_addon)
            .collect();
        Self { layers }
    }

    /// The stack in bottom-to-top order
    pub fn layers(&self) -> &[CakeLayer] {
        &self.layers
    }

    /// Appends a catalog addon to the top of the stack
    pub fn add_layer(&mut self, addon: &Addon) -> &CakeLayer {
        self.layers.push(CakeLayer::from_addon(addon));
        debug!(addon = addon.id, layers = self.layers.len(), "layer added");
        self.layers.last().unwrap()
    }

    /// Removes the layer with the given instance id
    pub fn remove_layer(&mut self, id: &str) {
        self.layers.retain(|l| l.id != id);
    }

    /// Moves a layer to a new position, shifting the others
    ///
    /// Out-of-range indices are a no-op; order is meaningful because the
    /// structure rules validate bottom-to-top.
    pub fn move_layer(&mut self, from: usize, to: usize) {
        if from >= self.layers.len() || to >= self.layers.len() || from == to {
            return;
        }
        let layer = self.layers.remove(from);
        self.layers.insert(to, layer);
    }

    /// Running base price: the sum of the stacked layer prices
    pub fn base_price(&self) -> f64 {
        pricing::layer_total(self.layers.iter().map(|l| l.price))
    }

    /// Current structure rule violations, in display order
    pub fn issues(&self) -> Vec<StructureIssue> {
        validate::validate_structure(&self.layers)
    }

    /// Validates and writes the taste preview into the session
    ///
    /// Fails with the collected rule violations when the stack is
    /// invalid; the stack itself is left untouched either way.
    pub fn commit(&self, session: &mut BuilderSession) -> Result<()> {
        let issues = self.issues();
        if !issues.is_empty() {
            return Err(BuilderError::InvalidStructure {
                messages: issues.iter().map(ToString::to_string).collect(),
            }
            .into());
        }
        let preview = TastePreview {
            layers: self.layers.clone(),
        };
        session.set_taste(preview, self.base_price())
    }
}
