//! Canvas items - the placed elements of an infrastructure diagram.

use serde::{Deserialize, Serialize};

/// Open property bag attached to items and connections.
///
/// Values are numbers, strings, or booleans depending on the resource
/// category (size, region, engine, instance type, CIDR block, color,
/// opacity). Unknown keys are preserved opaquely through every export;
/// insertion order is stable so serialized output is reproducible.
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// Fallback width when an item carries no `w` property.
pub const DEFAULT_WIDTH: f64 = 100.0;

/// Fallback height when an item carries no `h` property.
pub const DEFAULT_HEIGHT: f64 = 80.0;

/// One placed diagram element.
///
/// An item is either a container (`is_bounding_box`, may own `children`,
/// may itself nest inside another container) or a leaf resource (at most one
/// `parent_id`, never `children`). Containment is not stored authoritatively
/// anywhere else; it is inferred from screen geometry by
/// [`crate::resolve_containment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasItem {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: String,
    /// Human-readable display text.
    #[serde(default)]
    pub label: String,
    /// Top-left X in diagram ("world") coordinates.
    pub x: f64,
    /// Top-left Y in diagram ("world") coordinates.
    pub y: f64,
    /// Composite identifier `"<category>-<id>"`; the prefix before the first
    /// hyphen is the resource category every emitter branches on.
    pub key: String,
    /// True for container-like items (network boundaries, zones).
    #[serde(default)]
    pub is_bounding_box: bool,
    /// Id of the containing item, set by containment resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Ids of items inferred to be inside this item's bounds; populated only
    /// for containers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
    /// Open bag of semantic attributes; schema varies by category.
    #[serde(default)]
    pub properties: Properties,
}

impl CanvasItem {
    /// Create a new item with a key derived from `category` and `id`.
    #[must_use]
    pub fn new(id: impl Into<String>, category: &str, label: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            key: format!("{category}-{id}"),
            id,
            label: label.into(),
            x: 0.0,
            y: 0.0,
            is_bounding_box: false,
            parent_id: None,
            children: None,
            properties: Properties::new(),
        }
    }

    /// Set the position.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Mark the item as a container.
    #[must_use]
    pub fn as_container(mut self) -> Self {
        self.is_bounding_box = true;
        self
    }

    /// Replace the property bag.
    #[must_use]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// The resource category: the `key` prefix before the first hyphen.
    #[must_use]
    pub fn category(&self) -> &str {
        self.key.split('-').next().unwrap_or(&self.key)
    }

    /// Label to display, falling back to the id when the label is empty.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }

    /// Item width from the `w` property, or [`DEFAULT_WIDTH`].
    #[must_use]
    pub fn width(&self) -> f64 {
        self.numeric_property("w").unwrap_or(DEFAULT_WIDTH)
    }

    /// Item height from the `h` property, or [`DEFAULT_HEIGHT`].
    #[must_use]
    pub fn height(&self) -> f64 {
        self.numeric_property("h").unwrap_or(DEFAULT_HEIGHT)
    }

    /// Center point in world coordinates.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width() / 2.0, self.y + self.height() / 2.0)
    }

    /// Check if a world-coordinate point lies within this item's bounds
    /// (inclusive on all edges).
    #[must_use]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width() && y >= self.y && y <= self.y + self.height()
    }

    /// Read a string-valued property.
    #[must_use]
    pub fn string_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(|v| v.as_str())
    }

    /// Read a numeric property.
    #[must_use]
    pub fn numeric_property(&self, name: &str) -> Option<f64> {
        self.properties.get(name).and_then(serde_json::Value::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: f64, h: f64) -> Properties {
        let mut props = Properties::new();
        props.insert("w".into(), w.into());
        props.insert("h".into(), h.into());
        props
    }

    #[test]
    fn test_category_from_key() {
        let item = CanvasItem::new("c1", "compute", "Web server");
        assert_eq!(item.key, "compute-c1");
        assert_eq!(item.category(), "compute");
    }

    #[test]
    fn test_category_without_hyphen() {
        let mut item = CanvasItem::new("x", "compute", "");
        item.key = "plain".to_string();
        assert_eq!(item.category(), "plain");
    }

    #[test]
    fn test_center_uses_properties() {
        let item = CanvasItem::new("c1", "compute", "")
            .at(50.0, 50.0)
            .with_properties(dims(100.0, 80.0));
        let (cx, cy) = item.center();
        assert!((cx - 100.0).abs() < f64::EPSILON);
        assert!((cy - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_center_defaults_when_dimensions_missing() {
        let item = CanvasItem::new("c1", "compute", "").at(10.0, 10.0);
        let (cx, cy) = item.center();
        assert!((cx - (10.0 + DEFAULT_WIDTH / 2.0)).abs() < f64::EPSILON);
        assert!((cy - (10.0 + DEFAULT_HEIGHT / 2.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contains_point_inclusive_edges() {
        let item = CanvasItem::new("v1", "vpc", "")
            .at(0.0, 0.0)
            .as_container()
            .with_properties(dims(400.0, 250.0));
        assert!(item.contains_point(0.0, 0.0));
        assert!(item.contains_point(400.0, 250.0));
        assert!(item.contains_point(200.0, 125.0));
        assert!(!item.contains_point(400.1, 125.0));
    }

    #[test]
    fn test_display_label_falls_back_to_id() {
        let item = CanvasItem::new("c1", "compute", "");
        assert_eq!(item.display_label(), "c1");
        let item = CanvasItem::new("c1", "compute", "Web");
        assert_eq!(item.display_label(), "Web");
    }

    #[test]
    fn test_unknown_properties_round_trip() {
        let mut props = Properties::new();
        props.insert("customFlag".into(), true.into());
        props.insert("opacity".into(), 0.5.into());
        let item = CanvasItem::new("c1", "compute", "").with_properties(props);

        let json = serde_json::to_string(&item).expect("should serialize");
        let back: CanvasItem = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back.properties["customFlag"], true);
        assert_eq!(back.properties["opacity"], 0.5);
    }
}
