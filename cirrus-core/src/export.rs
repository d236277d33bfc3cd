//! The normalized snapshot handed to format emitters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CanvasItem, Connection, CoreError, CoreResult};

/// Fixed schema version embedded in every snapshot.
pub const SCHEMA_VERSION: &str = "1.0";

/// Snapshot metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    /// Snapshot timestamp (RFC 3339).
    pub exported_at: DateTime<Utc>,
    /// Identifier of the format this snapshot is exported as.
    pub format: String,
    /// Schema version string.
    pub version: String,
}

impl ExportMetadata {
    /// Create metadata stamped with the current time.
    #[must_use]
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            exported_at: Utc::now(),
            format: format.into(),
            version: SCHEMA_VERSION.to_string(),
        }
    }
}

/// The normalized graph passed to emitters: typed items with inferred
/// containment, labeled directed connections, and snapshot metadata.
///
/// An `ExportData` is a read-only snapshot for a single conversion; the
/// pipeline produces no mutation, persistence, or side effects on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportData {
    /// All diagram items, in input order.
    pub items: Vec<CanvasItem>,
    /// All resolved connections, in input order.
    pub connections: Vec<Connection>,
    /// Snapshot metadata.
    pub metadata: ExportMetadata,
}

impl ExportData {
    /// Create a snapshot from resolved items and connections.
    #[must_use]
    pub fn new(items: Vec<CanvasItem>, connections: Vec<Connection>, format: &str) -> Self {
        Self {
            items,
            connections,
            metadata: ExportMetadata::new(format),
        }
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&CanvasItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Container items, in input order.
    pub fn containers(&self) -> impl Iterator<Item = &CanvasItem> {
        self.items.iter().filter(|i| i.is_bounding_box)
    }

    /// Leaf resource items, in input order.
    pub fn resources(&self) -> impl Iterator<Item = &CanvasItem> {
        self.items.iter().filter(|i| !i.is_bounding_box)
    }

    /// Connections whose both endpoints resolve to known items.
    pub fn resolved_connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections
            .iter()
            .filter(|c| self.item(&c.from).is_some() && self.item(&c.to).is_some())
    }

    /// Serialize the snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string(self).map_err(CoreError::Serialization)
    }

    /// Deserialize a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(CoreError::Serialization)
    }
}
