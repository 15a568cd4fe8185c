//! Cake shape catalog
//!
//! Shapes the appearance step offers for the cake outline. Basic shapes
//! are free; premium outlines (heart, triangle) carry a flat surcharge
//! applied once per cake by the pricing module.

use serde::{Deserialize, Serialize};

/// Geometric category of a cake shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
    Heart,
    Triangle,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Circle => write!(f, "circle"),
            Self::Square => write!(f, "square"),
            Self::Rectangle => write!(f, "rectangle"),
            Self::Heart => write!(f, "heart"),
            Self::Triangle => write!(f, "triangle"),
        }
    }
}

/// A cake outline shape
///
/// Serialized inside appearance previews, so instances are owned values
/// rather than catalog references. Field names follow the persisted
/// wire format (`type`, `aspectRatio`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeShape {
    /// Catalog identifier (e.g. "heart")
    pub id: String,
    /// Display name
    pub name: String,
    /// Geometric category
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    /// SVG path outline for non-primitive shapes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Width-to-height ratio for non-square shapes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
}

/// SVG outline of the heart shape
const HEART_PATH: &str = "M12,21.35L10.55,20.03C5.4,15.36 2,12.27 2,8.5C2,5.41 4.42,3 7.5,3C9.24,3 10.91,3.81 12,5.08C13.09,3.81 14.76,3 16.5,3C19.58,3 22,5.41 22,8.5C22,12.27 18.6,15.36 13.45,20.03L12,21.35Z";

/// SVG outline of the triangle shape
const TRIANGLE_PATH: &str = "M12 2 L22 22 L2 22 Z";

/// Returns the cake shape catalog
///
/// The first entry (circle) is the default selection.
pub fn cake_shapes() -> Vec<CakeShape> {
    vec![
        CakeShape {
            id: "circle".to_string(),
            name: "Round".to_string(),
            kind: ShapeKind::Circle,
            path: None,
            aspect_ratio: None,
        },
        CakeShape {
            id: "square".to_string(),
            name: "Square".to_string(),
            kind: ShapeKind::Square,
            path: None,
            aspect_ratio: None,
        },
        CakeShape {
            id: "heart".to_string(),
            name: "Heart".to_string(),
            kind: ShapeKind::Heart,
            path: Some(HEART_PATH.to_string()),
            aspect_ratio: None,
        },
        CakeShape {
            id: "triangle".to_string(),
            name: "Triangle".to_string(),
            kind: ShapeKind::Triangle,
            path: Some(TRIANGLE_PATH.to_string()),
            aspect_ratio: None,
        },
    ]
}

/// Looks up a shape by its catalog identifier
pub fn find_shape(id: &str) -> Option<CakeShape> {
    cake_shapes().into_iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shape_is_circle() {
        let shapes = cake_shapes();
        assert_eq!(shapes[0].kind, ShapeKind::Circle);
    }

    #[test]
    fn test_premium_shapes_carry_paths() {
        assert!(find_shape("heart").unwrap().path.is_some());
        assert!(find_shape("triangle").unwrap().path.is_some());
        assert!(find_shape("circle").unwrap().path.is_none());
    }

    #[test]
    fn test_shape_serde_roundtrip() {
        let shape = find_shape("heart").unwrap();
        let json = serde_json::to_string(&shape).unwrap();
        let back: CakeShape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);
    }
}
