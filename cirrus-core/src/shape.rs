//! Raw shape records as supplied by the drawing canvas.
//!
//! These mirror the wire format of the surrounding canvas UI: a flat array
//! of records where the `type` field is both the edge discriminator
//! (`"arrow"`) and, for everything else, the resource category that ends up
//! as the item's key prefix.

use serde::{Deserialize, Serialize};

use crate::Properties;

/// The `type` value that marks a record as an arrow/edge.
pub const ARROW_TYPE: &str = "arrow";

/// Shape types that become container (bounding-box) items.
pub const CONTAINER_TYPES: &[&str] = &["vpc", "subnet", "zone"];

/// One endpoint binding of an arrow record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowTerminal {
    /// Id of the item this terminal is bound to, if any. An unbound terminal
    /// means the arrow is still being drawn and the whole edge is dropped.
    #[serde(default)]
    pub item: Option<String>,
}

/// One raw record from the canvas: either a placed shape or an arrow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRecord {
    /// Unique record id.
    pub id: String,
    /// Type discriminator: [`ARROW_TYPE`] for edges, otherwise the resource
    /// category (`"compute"`, `"database"`, `"vpc"`, ...).
    #[serde(rename = "type")]
    pub shape_type: String,
    /// Display label; empty when the user has not named the shape.
    #[serde(default)]
    pub label: String,
    /// Top-left X in world coordinates.
    #[serde(default)]
    pub x: f64,
    /// Top-left Y in world coordinates.
    #[serde(default)]
    pub y: f64,
    /// Start terminal binding (arrows only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<ArrowTerminal>,
    /// End terminal binding (arrows only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<ArrowTerminal>,
    /// Custom properties, copied verbatim onto the resulting item.
    #[serde(default)]
    pub properties: Properties,
}

impl ShapeRecord {
    /// Create a non-arrow shape record.
    #[must_use]
    pub fn shape(id: impl Into<String>, shape_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shape_type: shape_type.into(),
            label: String::new(),
            x: 0.0,
            y: 0.0,
            start: None,
            end: None,
            properties: Properties::new(),
        }
    }

    /// Create an arrow record bound to two items.
    #[must_use]
    pub fn arrow(id: impl Into<String>, from: &str, to: &str) -> Self {
        let mut record = Self::shape(id, ARROW_TYPE);
        record.start = Some(ArrowTerminal {
            item: Some(from.to_string()),
        });
        record.end = Some(ArrowTerminal {
            item: Some(to.to_string()),
        });
        record
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the position.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the property bag.
    #[must_use]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// Whether this record is an arrow/edge.
    #[must_use]
    pub fn is_arrow(&self) -> bool {
        self.shape_type == ARROW_TYPE
    }

    /// Whether this record becomes a container item.
    #[must_use]
    pub fn is_container(&self) -> bool {
        CONTAINER_TYPES.contains(&self.shape_type.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_discriminator() {
        assert!(ShapeRecord::arrow("e1", "a", "b").is_arrow());
        assert!(!ShapeRecord::shape("c1", "compute").is_arrow());
    }

    #[test]
    fn test_container_types() {
        assert!(ShapeRecord::shape("v1", "vpc").is_container());
        assert!(ShapeRecord::shape("s1", "subnet").is_container());
        assert!(!ShapeRecord::shape("c1", "compute").is_container());
    }

    #[test]
    fn test_deserialize_canvas_record() {
        let json = r#"{
            "id": "c1",
            "type": "compute",
            "label": "Web server",
            "x": 50.0,
            "y": 50.0,
            "properties": { "w": 100, "h": 80, "instanceType": "t3.micro" }
        }"#;
        let record: ShapeRecord = serde_json::from_str(json).expect("should parse");
        assert_eq!(record.shape_type, "compute");
        assert_eq!(record.properties["instanceType"], "t3.micro");
    }

    #[test]
    fn test_deserialize_unbound_arrow() {
        let json = r#"{ "id": "e1", "type": "arrow", "start": { "item": "a" }, "end": {} }"#;
        let record: ShapeRecord = serde_json::from_str(json).expect("should parse");
        assert!(record.is_arrow());
        assert_eq!(record.start.and_then(|t| t.item).as_deref(), Some("a"));
        assert_eq!(record.end.and_then(|t| t.item), None);
    }
}
