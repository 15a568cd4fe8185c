//! Base frosting color catalog

/// A selectable base color for the cake surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseColor {
    /// Catalog identifier (e.g. "cream")
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Hex color value
    pub value: &'static str,
}

const COLORS: &[BaseColor] = &[
    BaseColor {
        id: "white",
        name: "White",
        value: "#FFFFFF",
    },
    BaseColor {
        id: "cream",
        name: "Cream",
        value: "#FFF8DC",
    },
    BaseColor {
        id: "pink",
        name: "Pink",
        value: "#FFB6C1",
    },
    BaseColor {
        id: "blue",
        name: "Blue",
        value: "#87CEFA",
    },
    BaseColor {
        id: "chocolate",
        name: "Chocolate",
        value: "#D2691E",
    },
    BaseColor {
        id: "mint",
        name: "Mint",
        value: "#98FB98",
    },
];

/// Returns the base color catalog
///
/// The first entry (white) is the default selection.
pub fn base_colors() -> &'static [BaseColor] {
    COLORS
}
