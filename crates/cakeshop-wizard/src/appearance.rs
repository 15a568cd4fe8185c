//! Appearance step controller
//!
//! Owns the working appearance preview: the cake outline, base color,
//! and the text/image decorations with their computed prices. Element
//! prices are recomputed whenever a size-affecting field changes, so the
//! preview always carries prices consistent with the pricing rules.
//! Committing requires at least one decoration and writes the preview,
//! the appearance price, and the display-name candidate into the
//! session.

use cakeshop_builder::{AppearancePreview, BuilderSession, ImageElement, TextElement};
use cakeshop_core::catalog::CakeShape;
use cakeshop_core::{pricing, BuilderError, Result};
use tracing::debug;
use uuid::Uuid;

/// Font size new text decorations start at
pub const DEFAULT_FONT_SIZE: f64 = 24.0;
/// Font family new text decorations start with
pub const DEFAULT_FONT_FAMILY: &str = "Arial, sans-serif";
/// Width new image decorations start at
pub const DEFAULT_IMAGE_WIDTH: f64 = 100.0;

/// Partial update for a text decoration
#[derive(Debug, Clone, Default)]
pub struct TextUpdate {
    pub text: Option<String>,
    pub color: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Partial update for an image decoration
#[derive(Debug, Clone, Default)]
pub struct ImageUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub rotation: Option<f64>,
}

/// Working state of the appearance screen
#[derive(Debug, Clone)]
pub struct AppearanceStep {
    preview: AppearancePreview,
    base_cake_price: f64,
}

impl AppearanceStep {
    /// Starts from the session: restores an edited preview or the
    /// default white circle, and picks up the taste step's base price
    /// for display
    pub fn from_session(session: &BuilderSession) -> Self {
        let preview = session
            .state()
            .appearance_preview
            .clone()
            .unwrap_or_default();
        Self {
            preview,
            base_cake_price: session.state().base_price,
        }
    }

    /// Checks that the taste step was committed
    ///
    /// The appearance screen is unreachable without a layer stack; a
    /// session that lost it resolves to this error and a redirect to
    /// the taste step.
    pub fn ensure_prerequisites(session: &BuilderSession) -> Result<()> {
        if session.state().taste_preview.is_none() {
            return Err(BuilderError::IncompleteState {
                step: "appearance".to_string(),
                missing: "taste".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// The working preview
    pub fn preview(&self) -> &AppearancePreview {
        &self.preview
    }

    /// The base price carried over from the taste step
    pub fn base_cake_price(&self) -> f64 {
        self.base_cake_price
    }

    /// Replaces the cake outline
    pub fn set_shape(&mut self, shape: CakeShape) {
        self.preview.shape = shape;
    }

    /// Replaces the base frosting color
    pub fn set_base_color(&mut self, color: impl Into<String>) {
        self.preview.base_color = color.into();
    }

    /// Adds a text decoration at the given position
    ///
    /// New texts start at the default font size and family; the price is
    /// computed from the size.
    pub fn add_text(
        &mut self,
        text: impl Into<String>,
        color: impl Into<String>,
        x: f64,
        y: f64,
    ) -> &TextElement {
        let element = TextElement {
            id: format!("text_{}", Uuid::new_v4().simple()),
            text: text.into(),
            color: color.into(),
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            x,
            y,
            price: pricing::text_price(DEFAULT_FONT_SIZE),
        };
        debug!(id = %element.id, "text decoration added");
        self.preview.texts.push(element);
        self.preview.texts.last().unwrap()
    }

    /// Merges an update into the text matching `id`
    ///
    /// The price is recomputed when the font size changes; a missing id
    /// is a no-op.
    pub fn update_text(&mut self, id: &str, update: TextUpdate) {
        let Some(element) = self.preview.texts.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if let Some(text) = update.text {
            element.text = text;
        }
        if let Some(color) = update.color {
            element.color = color;
        }
        if let Some(font_family) = update.font_family {
            element.font_family = font_family;
        }
        if let Some(x) = update.x {
            element.x = x;
        }
        if let Some(y) = update.y {
            element.y = y;
        }
        if let Some(font_size) = update.font_size {
            element.font_size = font_size;
            element.price = pricing::text_price(font_size);
        }
    }

    /// Adds an image decoration at the given position
    ///
    /// `src` is the embedded, already-downscaled image data; uploads
    /// over the size cap are rejected before any state changes. New
    /// images start at the default width with no rotation.
    pub fn add_image(
        &mut self,
        src: impl Into<String>,
        x: f64,
        y: f64,
    ) -> Result<&ImageElement> {
        let src = src.into();
        if src.len() > pricing::MAX_IMAGE_DATA_BYTES {
            return Err(BuilderError::OversizedImage {
                size: src.len(),
                max: pricing::MAX_IMAGE_DATA_BYTES,
            }
            .into());
        }
        let element = ImageElement {
            id: format!("image_{}", Uuid::new_v4().simple()),
            src,
            x,
            y,
            width: DEFAULT_IMAGE_WIDTH,
            rotation: 0.0,
            price: pricing::image_price(DEFAULT_IMAGE_WIDTH),
        };
        debug!(id = %element.id, "image decoration added");
        self.preview.images.push(element);
        Ok(self.preview.images.last().unwrap())
    }

    /// Merges an update into the image matching `id`
    ///
    /// The price is recomputed when the width changes; a missing id is a
    /// no-op.
    pub fn update_image(&mut self, id: &str, update: ImageUpdate) {
        let Some(element) = self.preview.images.iter_mut().find(|i| i.id == id) else {
            return;
        };
        if let Some(x) = update.x {
            element.x = x;
        }
        if let Some(y) = update.y {
            element.y = y;
        }
        if let Some(rotation) = update.rotation {
            element.rotation = rotation;
        }
        if let Some(width) = update.width {
            element.width = width;
            element.price = pricing::image_price(width);
        }
    }

    /// Deletes the decoration matching `id`, text or image
    pub fn delete_element(&mut self, id: &str) {
        self.preview.texts.retain(|t| t.id != id);
        self.preview.images.retain(|i| i.id != id);
    }

    /// Appearance price: element prices plus the shape premium
    pub fn price(&self) -> f64 {
        self.preview.price()
    }

    /// Whether the cake carries at least one decoration
    pub fn has_decorations(&self) -> bool {
        !self.preview.texts.is_empty() || !self.preview.images.is_empty()
    }

    /// The display-name candidate: all text decorations joined
    pub fn custom_text(&self) -> Option<String> {
        if self.preview.texts.is_empty() {
            return None;
        }
        let joined = self
            .preview
            .texts
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Some(joined)
    }

    /// Validates and writes the appearance preview into the session
    pub fn commit(&self, session: &mut BuilderSession) -> Result<()> {
        Self::ensure_prerequisites(session)?;
        if !self.has_decorations() {
            return Err(BuilderError::NoDecorations.into());
        }
        session.set_appearance(self.preview.clone(), self.price(), self.custom_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taste::TasteStep;
    use cakeshop_core::catalog::{find_addon, find_shape};
    use cakeshop_store::MemoryStore;
    use std::sync::Arc;

    fn session() -> BuilderSession {
        let mut session = BuilderSession::hydrate(Arc::new(MemoryStore::new()));
        let mut taste = TasteStep::new();
        for id in ["d1", "s1", "j1"] {
            taste.add_layer(find_addon(id).unwrap());
        }
        taste.commit(&mut session).unwrap();
        session
    }

    fn step() -> AppearanceStep {
        AppearanceStep::from_session(&session())
    }

    #[test]
    fn test_add_text_uses_defaults() {
        let mut step = step();
        let element = step.add_text("Sto lat", "#000000", 100.0, 80.0);
        assert_eq!(element.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(element.font_family, DEFAULT_FONT_FAMILY);
        assert!((element.price - 5.39).abs() < 1e-9);
        assert!((step.price() - 5.39).abs() < 1e-9);
    }

    #[test]
    fn test_font_size_change_reprices() {
        let mut step = step();
        let id = step.add_text("Hi", "#000000", 0.0, 0.0).id.clone();
        step.update_text(
            &id,
            TextUpdate {
                font_size: Some(40.0),
                ..TextUpdate::default()
            },
        );
        let element = &step.preview().texts[0];
        assert_eq!(element.font_size, 40.0);
        // 4.99 + 20 * 0.1
        assert!((element.price - 6.99).abs() < 1e-9);

        // Moving a text never touches its price.
        step.update_text(
            &id,
            TextUpdate {
                x: Some(50.0),
                y: Some(60.0),
                ..TextUpdate::default()
            },
        );
        assert!((step.preview().texts[0].price - 6.99).abs() < 1e-9);
    }

    #[test]
    fn test_image_width_change_reprices() {
        let mut step = step();
        let id = step.add_image("data:image/jpeg;base64,abc", 10.0, 10.0).unwrap().id.clone();
        assert!((step.price() - 10.49).abs() < 1e-9);

        step.update_image(
            &id,
            ImageUpdate {
                width: Some(40.0),
                ..ImageUpdate::default()
            },
        );
        // Below the threshold the surcharge clamps to zero.
        assert!((step.preview().images[0].price - 7.99).abs() < 1e-9);
    }

    #[test]
    fn test_oversized_image_rejected_without_state_change() {
        let mut step = step();
        let huge = "x".repeat(pricing::MAX_IMAGE_DATA_BYTES + 1);
        let err = step.add_image(huge, 0.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("exceeding"));
        assert!(step.preview().images.is_empty());
        assert_eq!(step.price(), 0.0);
    }

    #[test]
    fn test_shape_premium_in_price() {
        let mut step = step();
        step.add_text("A", "#000000", 0.0, 0.0);
        step.set_shape(find_shape("heart").unwrap());
        assert!((step.price() - (5.39 + 5.99)).abs() < 1e-9);
    }

    #[test]
    fn test_delete_element() {
        let mut step = step();
        let text_id = step.add_text("A", "#000000", 0.0, 0.0).id.clone();
        let image_id = step.add_image("data", 0.0, 0.0).unwrap().id.clone();
        step.delete_element(&text_id);
        assert!(step.preview().texts.is_empty());
        step.delete_element(&image_id);
        assert!(!step.has_decorations());
    }

    #[test]
    fn test_custom_text_joins_all_texts() {
        let mut step = step();
        assert!(step.custom_text().is_none());
        step.add_text("Happy", "#000000", 0.0, 0.0);
        step.add_text("Birthday", "#FF0000", 0.0, 30.0);
        assert_eq!(step.custom_text().as_deref(), Some("Happy Birthday"));
    }

    #[test]
    fn test_missing_taste_data_blocks_the_step() {
        let mut bare = BuilderSession::hydrate(Arc::new(MemoryStore::new()));
        let err = AppearanceStep::ensure_prerequisites(&bare).unwrap_err();
        assert!(err.to_string().contains("taste"));

        // Committing without the earlier step's data fails the same way.
        let mut step = AppearanceStep::from_session(&bare);
        step.add_text("Sto lat", "#000000", 0.0, 0.0);
        let err = step.commit(&mut bare).unwrap_err();
        assert!(err.to_string().contains("taste"));
        assert!(bare.state().appearance_preview.is_none());
    }

    #[test]
    fn test_commit_requires_a_decoration() {
        let mut session = session();
        let step = AppearanceStep::from_session(&session);
        let err = step.commit(&mut session).unwrap_err();
        assert!(err.to_string().contains("at least one decoration"));

        let mut step = AppearanceStep::from_session(&session);
        step.add_text("Sto lat", "#000000", 0.0, 0.0);
        step.commit(&mut session).unwrap();
        let state = session.state();
        assert!((state.appearance_price - 5.39).abs() < 1e-9);
        assert_eq!(state.custom_text.as_deref(), Some("Sto lat"));
    }

    #[test]
    fn test_edit_restores_preview_from_session() {
        let mut session = session();
        let mut step = AppearanceStep::from_session(&session);
        step.set_base_color("#FFB6C1");
        step.add_text("Sto lat", "#000000", 0.0, 0.0);
        step.commit(&mut session).unwrap();

        let restored = AppearanceStep::from_session(&session);
        assert_eq!(restored.preview(), step.preview());
        assert_eq!(restored.preview().base_color, "#FFB6C1");
    }
}
