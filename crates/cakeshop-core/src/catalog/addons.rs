//! Layer addon catalog
//!
//! The flavor building blocks a cake stack is assembled from. Each addon
//! carries its display color and relative height for the taste preview,
//! and a flat per-addon price. Stacking rules (bottom dough, limited
//! consecutive non-dough layers) are enforced by the builder crate, not
//! here.

use serde::{Deserialize, Serialize};

/// Category of a cake layer addon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Baked dough base, the only kind allowed at the bottom of a stack
    Dough,
    /// Light sponge layer
    Sponge,
    /// Fruit jelly layer
    Jelly,
    /// Whole-fruit layer
    Fruit,
    /// Cream filling
    Cream,
    /// Decorative topping
    Topping,
}

impl LayerKind {
    /// Whether this kind provides structural support for the stack
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Dough)
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dough => write!(f, "dough"),
            Self::Sponge => write!(f, "sponge"),
            Self::Jelly => write!(f, "jelly"),
            Self::Fruit => write!(f, "fruit"),
            Self::Cream => write!(f, "cream"),
            Self::Topping => write!(f, "topping"),
        }
    }
}

/// A selectable addon from the flavor catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Addon {
    /// Catalog identifier (e.g. "d1")
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Layer category
    pub kind: LayerKind,
    /// Display color (hex) used by the taste preview
    pub color: &'static str,
    /// Relative layer height in preview units
    pub height: f64,
    /// Flat catalog price
    pub price: f64,
}

/// The static addon catalog
const ADDONS: &[Addon] = &[
    // Doughs
    Addon {
        id: "d1",
        name: "Vanilla Dough",
        kind: LayerKind::Dough,
        color: "#F5DEB3",
        height: 20.0,
        price: 12.99,
    },
    Addon {
        id: "d2",
        name: "Chocolate Dough",
        kind: LayerKind::Dough,
        color: "#8B4513",
        height: 20.0,
        price: 14.99,
    },
    Addon {
        id: "d3",
        name: "Red Velvet Dough",
        kind: LayerKind::Dough,
        color: "#B22222",
        height: 20.0,
        price: 16.99,
    },
    // Sponges
    Addon {
        id: "s1",
        name: "Vanilla Sponge",
        kind: LayerKind::Sponge,
        color: "#FFFACD",
        height: 30.0,
        price: 9.99,
    },
    Addon {
        id: "s2",
        name: "Chocolate Sponge",
        kind: LayerKind::Sponge,
        color: "#5C4033",
        height: 30.0,
        price: 11.99,
    },
    // Jellies
    Addon {
        id: "j1",
        name: "Strawberry Jelly",
        kind: LayerKind::Jelly,
        color: "#FF69B4",
        height: 10.0,
        price: 5.99,
    },
    Addon {
        id: "j2",
        name: "Raspberry Jelly",
        kind: LayerKind::Jelly,
        color: "#C71585",
        height: 10.0,
        price: 6.99,
    },
    // Fruits
    Addon {
        id: "f1",
        name: "Fresh Strawberries",
        kind: LayerKind::Fruit,
        color: "#FF6347",
        height: 15.0,
        price: 7.99,
    },
    Addon {
        id: "f2",
        name: "Forest Fruits",
        kind: LayerKind::Fruit,
        color: "#8A2BE2",
        height: 15.0,
        price: 8.99,
    },
    // Creams
    Addon {
        id: "c1",
        name: "Vanilla Cream",
        kind: LayerKind::Cream,
        color: "#FFFDD0",
        height: 15.0,
        price: 4.99,
    },
    Addon {
        id: "c2",
        name: "Chocolate Cream",
        kind: LayerKind::Cream,
        color: "#7B3F00",
        height: 15.0,
        price: 6.99,
    },
    Addon {
        id: "c3",
        name: "Mascarpone Cream",
        kind: LayerKind::Cream,
        color: "#FFF8E7",
        height: 15.0,
        price: 7.99,
    },
    // Toppings
    Addon {
        id: "t1",
        name: "Chocolate Sprinkles",
        kind: LayerKind::Topping,
        color: "#3B2F2F",
        height: 10.0,
        price: 4.99,
    },
    Addon {
        id: "t2",
        name: "Fresh Fruit Topping",
        kind: LayerKind::Topping,
        color: "#E25822",
        height: 10.0,
        price: 8.99,
    },
    Addon {
        id: "t3",
        name: "Meringue Kisses",
        kind: LayerKind::Topping,
        color: "#FFF5EE",
        height: 10.0,
        price: 6.99,
    },
    Addon {
        id: "t4",
        name: "Coconut Flakes",
        kind: LayerKind::Topping,
        color: "#FAF0E6",
        height: 10.0,
        price: 3.99,
    },
    Addon {
        id: "t5",
        name: "Caramel Drizzle",
        kind: LayerKind::Topping,
        color: "#AF6E4D",
        height: 10.0,
        price: 5.99,
    },
];

/// Returns the full layer addon catalog
pub fn layer_addons() -> &'static [Addon] {
    ADDONS
}

/// Looks up an addon by its catalog identifier
pub fn find_addon(id: &str) -> Option<&'static Addon> {
    ADDONS.iter().find(|a| a.id == id)
}

/// Looks up an addon by name or kind, case-insensitive
///
/// Used when importing a saved layer-name list: a partial name match or
/// an exact kind match both resolve. Unknown names yield `None`.
pub fn find_addon_by_name(name: &str) -> Option<&'static Addon> {
    let needle = name.to_lowercase();
    ADDONS
        .iter()
        .find(|a| a.name.to_lowercase().contains(&needle) || a.kind.to_string() == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_all_kinds() {
        for kind in [
            LayerKind::Dough,
            LayerKind::Sponge,
            LayerKind::Jelly,
            LayerKind::Fruit,
            LayerKind::Cream,
            LayerKind::Topping,
        ] {
            assert!(
                layer_addons().iter().any(|a| a.kind == kind),
                "no addon of kind {kind}"
            );
        }
    }

    #[test]
    fn test_find_addon() {
        let addon = find_addon("d2").unwrap();
        assert_eq!(addon.name, "Chocolate Dough");
        assert_eq!(addon.price, 14.99);
        assert!(find_addon("zz9").is_none());
    }

    #[test]
    fn test_find_addon_by_name_partial_and_kind() {
        assert_eq!(find_addon_by_name("red velvet").unwrap().id, "d3");
        assert_eq!(find_addon_by_name("VANILLA").unwrap().id, "d1");
        // Exact kind names resolve to the first addon of that kind.
        assert_eq!(find_addon_by_name("sponge").unwrap().id, "s1");
        assert!(find_addon_by_name("marzipan").is_none());
    }

    #[test]
    fn test_prices_positive() {
        assert!(layer_addons().iter().all(|a| a.price > 0.0));
    }
}
