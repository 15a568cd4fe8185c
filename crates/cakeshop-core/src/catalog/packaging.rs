//! Packaging catalog
//!
//! Packaging options and box-size modifiers offered by the final build
//! step. A box-size delta may be negative (smaller boxes discount the
//! packaging), so the packaging price is the one price component that
//! can fall below the option's flat price, though never below zero in
//! the default catalog.

/// A selectable packaging option
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackagingOption {
    /// Catalog identifier (e.g. "premium")
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Short marketing description
    pub description: &'static str,
    /// Flat catalog price
    pub price: f64,
    /// Preview image path
    pub image_url: &'static str,
}

/// A box-size modifier applied on top of a packaging option
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSize {
    /// Catalog identifier (e.g. "medium")
    pub id: &'static str,
    /// Display name including the weight range
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Price delta added to the packaging price; may be negative
    pub price_delta: f64,
}

const PACKAGING: &[PackagingOption] = &[
    PackagingOption {
        id: "standard",
        name: "Standard Box",
        description: "Elegant cardboard box with the bakery logo",
        price: 0.0,
        image_url: "/packagings/standard-box.jpg",
    },
    PackagingOption {
        id: "premium",
        name: "Premium",
        description: "Luxury box with ribbon and gold accents",
        price: 15.99,
        image_url: "/packagings/premium-box.jpg",
    },
    PackagingOption {
        id: "eco",
        name: "Eco",
        description: "Biodegradable, environmentally friendly packaging",
        price: 9.99,
        image_url: "/packagings/eco-box.jpg",
    },
    PackagingOption {
        id: "gift",
        name: "Gift",
        description: "Special gift wrapping with decorations",
        price: 19.99,
        image_url: "/packagings/gift-box.jpg",
    },
];

const BOX_SIZES: &[BoxSize] = &[
    BoxSize {
        id: "small",
        name: "Small (up to 1kg)",
        description: "Ideal for small cakes up to 1kg",
        price_delta: -5.0,
    },
    BoxSize {
        id: "medium",
        name: "Medium (1-2kg)",
        description: "Standard size for most cakes",
        price_delta: 0.0,
    },
    BoxSize {
        id: "large",
        name: "Large (2-3kg)",
        description: "For large celebration cakes",
        price_delta: 10.0,
    },
    BoxSize {
        id: "xl",
        name: "Extra large (over 3kg)",
        description: "For exceptionally large cakes for special occasions",
        price_delta: 20.0,
    },
];

/// Returns the packaging option catalog
///
/// The first entry (standard, free) is the default selection.
pub fn packaging_options() -> &'static [PackagingOption] {
    PACKAGING
}

/// Returns the box-size catalog
///
/// The second entry (medium, no delta) is the default selection.
pub fn box_sizes() -> &'static [BoxSize] {
    BOX_SIZES
}

/// Looks up a packaging option by identifier, falling back to standard
pub fn find_packaging(id: &str) -> &'static PackagingOption {
    PACKAGING.iter().find(|p| p.id == id).unwrap_or(&PACKAGING[0])
}

/// Looks up a box size by identifier, falling back to medium
pub fn find_box_size(id: &str) -> &'static BoxSize {
    BOX_SIZES.iter().find(|s| s.id == id).unwrap_or(&BOX_SIZES[1])
}
