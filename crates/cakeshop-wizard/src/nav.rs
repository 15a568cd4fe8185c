//! Step navigation
//!
//! The storefront is a fixed sequence of screens. Configuration steps
//! carry the `edit=<id>` marker forward and backward so an edit survives
//! the whole wizard; checkout steps drop it.

/// A screen in the storefront flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Flavor stack configuration
    Taste,
    /// Shape, color, and decoration configuration
    Appearance,
    /// Packaging selection and finalization
    Packaging,
    /// Cart review with quantity controls
    Cart,
    /// Customer and delivery details form
    Delivery,
    /// Order summary and simulated payment
    Summary,
    /// Order confirmation
    Confirmation,
}

impl Step {
    /// The screen a "continue" action navigates to
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Taste => Some(Step::Appearance),
            Step::Appearance => Some(Step::Packaging),
            Step::Packaging => Some(Step::Cart),
            Step::Cart => Some(Step::Delivery),
            Step::Delivery => Some(Step::Summary),
            Step::Summary => Some(Step::Confirmation),
            Step::Confirmation => None,
        }
    }

    /// The screen a "back" action navigates to
    pub fn back(self) -> Option<Step> {
        match self {
            Step::Taste => None,
            Step::Appearance => Some(Step::Taste),
            Step::Packaging => Some(Step::Appearance),
            Step::Cart => Some(Step::Packaging),
            Step::Delivery => Some(Step::Cart),
            Step::Summary => Some(Step::Delivery),
            Step::Confirmation => None,
        }
    }

    /// Whether this screen preserves the edit marker in its route
    pub fn keeps_edit_marker(self) -> bool {
        matches!(self, Step::Taste | Step::Appearance | Step::Packaging)
    }
}

/// A step plus the edit marker its route carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub step: Step,
    /// Identifier of the cart item being re-edited, if any
    pub edit: Option<String>,
}

impl Route {
    /// Route of a fresh build starting at the taste step
    pub fn fresh() -> Self {
        Self {
            step: Step::Taste,
            edit: None,
        }
    }

    /// Route the cart's "edit" action navigates to
    pub fn edit_item(item_id: impl Into<String>) -> Self {
        Self {
            step: Step::Taste,
            edit: Some(item_id.into()),
        }
    }

    /// The edit marker as the reconciliation input
    pub fn marker(&self) -> Option<&str> {
        self.edit.as_deref()
    }

    /// Route after a "continue" action
    pub fn forward(&self) -> Option<Route> {
        self.step.next().map(|step| self.to_step(step))
    }

    /// Route after a "back" action
    pub fn backward(&self) -> Option<Route> {
        self.step.back().map(|step| self.to_step(step))
    }

    fn to_step(&self, step: Step) -> Route {
        Route {
            step,
            edit: if step.keeps_edit_marker() {
                self.edit.clone()
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_forward_walk() {
        let mut route = Route::fresh();
        let expected = [
            Step::Appearance,
            Step::Packaging,
            Step::Cart,
            Step::Delivery,
            Step::Summary,
            Step::Confirmation,
        ];
        for step in expected {
            route = route.forward().unwrap();
            assert_eq!(route.step, step);
        }
        assert!(route.forward().is_none());
    }

    #[test]
    fn test_edit_marker_survives_configuration_steps() {
        let route = Route::edit_item("i1");
        let appearance = route.forward().unwrap();
        assert_eq!(appearance.marker(), Some("i1"));
        let packaging = appearance.forward().unwrap();
        assert_eq!(packaging.marker(), Some("i1"));

        // Backing up keeps the marker too.
        assert_eq!(packaging.backward().unwrap().marker(), Some("i1"));

        // Entering checkout drops it.
        let cart = packaging.forward().unwrap();
        assert_eq!(cart.step, Step::Cart);
        assert!(cart.marker().is_none());
    }
}
