//! Directed labeled connections between canvas items.

use serde::{Deserialize, Serialize};

use crate::Properties;

/// One directed labeled edge between two items.
///
/// Endpoint ids are not enforced to exist: a connection whose `from` or `to`
/// has no matching item (a dangling reference) is tolerated at the type
/// level. The graph builder drops unresolvable arrows before they reach any
/// emitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Unique identifier.
    pub id: String,
    /// Source item id.
    pub from: String,
    /// Target item id.
    pub to: String,
    /// Text shown on the edge; absent means unlabeled and each emitter
    /// supplies its own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Style passthrough bag (arrow style, color, dash pattern); not
    /// semantically interpreted by emitters.
    #[serde(default)]
    pub properties: Properties,
}

impl Connection {
    /// Create a new connection.
    #[must_use]
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            label: None,
            properties: Properties::new(),
        }
    }

    /// Set the edge label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The effective label, treating an empty string the same as absent.
    #[must_use]
    pub fn effective_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_label_present() {
        let conn = Connection::new("e1", "a", "b").with_label("reads");
        assert_eq!(conn.effective_label(), Some("reads"));
    }

    #[test]
    fn test_effective_label_absent() {
        let conn = Connection::new("e1", "a", "b");
        assert_eq!(conn.effective_label(), None);
    }

    #[test]
    fn test_effective_label_empty_string_is_absent() {
        let conn = Connection::new("e1", "a", "b").with_label("");
        assert_eq!(conn.effective_label(), None);
    }
}
