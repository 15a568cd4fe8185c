//! Cake structure validation
//!
//! Stacking rules enforced by the taste step before it lets the shopper
//! continue:
//! - a cake needs at least three layers
//! - the bottom layer must be a dough, for stability
//! - at most two consecutive non-dough layers anywhere in the stack
//!
//! Violations are returned as an ordered issue list; the first issue is
//! the headline message shown to the shopper. Validation is advisory
//! and never mutates the stack.

use crate::preview::CakeLayer;

/// Minimum number of layers in a valid cake
pub const MIN_LAYERS: usize = 3;

/// Maximum run of consecutive non-dough layers
pub const MAX_SOFT_RUN: usize = 2;

/// A violation of the cake structure rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureIssue {
    /// Fewer than [`MIN_LAYERS`] layers
    TooFewLayers,
    /// The bottom layer is not a dough
    MissingDoughBase,
    /// More than [`MAX_SOFT_RUN`] consecutive non-dough layers
    TooManySoftLayers,
}

impl std::fmt::Display for StructureIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewLayers => {
                write!(f, "Your cake needs at least 3 layers to continue.")
            }
            Self::MissingDoughBase => {
                write!(f, "The bottom layer must be a dough type for stability.")
            }
            Self::TooManySoftLayers => write!(
                f,
                "You cannot stack more than 2 non-dough layers on top of each other."
            ),
        }
    }
}

/// Collects every structure violation in display order
pub fn validate_structure(layers: &[CakeLayer]) -> Vec<StructureIssue> {
    let mut issues = Vec::new();

    if layers.len() < MIN_LAYERS {
        issues.push(StructureIssue::TooFewLayers);
    }

    // An empty stack has no dough base either, so both issues apply.
    if !layers.first().is_some_and(|l| l.kind.is_structural()) {
        issues.push(StructureIssue::MissingDoughBase);
    }

    let mut soft_run = 0usize;
    for layer in layers {
        if layer.kind.is_structural() {
            soft_run = 0;
        } else {
            soft_run += 1;
            if soft_run > MAX_SOFT_RUN {
                issues.push(StructureIssue::TooManySoftLayers);
                break;
            }
        }
    }

    issues
}

/// Whether the stack satisfies every structure rule
pub fn is_valid_structure(layers: &[CakeLayer]) -> bool {
    validate_structure(layers).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cakeshop_core::catalog::find_addon;

    fn stack(ids: &[&str]) -> Vec<CakeLayer> {
        ids.iter()
            .map(|id| CakeLayer::from_addon(find_addon(id).unwrap()))
            .collect()
    }

    #[test]
    fn test_valid_cake() {
        let layers = stack(&["d1", "c1", "t1"]);
        assert!(is_valid_structure(&layers));
    }

    #[test]
    fn test_empty_stack_reports_count_and_base() {
        assert_eq!(
            validate_structure(&[]),
            vec![
                StructureIssue::TooFewLayers,
                StructureIssue::MissingDoughBase
            ]
        );
    }

    #[test]
    fn test_bottom_must_be_dough() {
        let layers = stack(&["c1", "d1", "t1"]);
        assert_eq!(
            validate_structure(&layers),
            vec![StructureIssue::MissingDoughBase]
        );
    }

    #[test]
    fn test_soft_run_limit() {
        // dough, cream, jelly, topping: three consecutive non-dough layers
        let layers = stack(&["d1", "c1", "j1", "t1"]);
        assert_eq!(
            validate_structure(&layers),
            vec![StructureIssue::TooManySoftLayers]
        );

        // A dough between them resets the run.
        let layers = stack(&["d1", "c1", "j1", "d2", "t1"]);
        assert!(is_valid_structure(&layers));
    }

    #[test]
    fn test_issue_order_is_stable() {
        // Two layers, cream on the bottom: count issue first, then base.
        let layers = stack(&["c1", "t1"]);
        assert_eq!(
            validate_structure(&layers),
            vec![
                StructureIssue::TooFewLayers,
                StructureIssue::MissingDoughBase
            ]
        );
    }
}
