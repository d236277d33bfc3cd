//! Structured dump emitter: the full snapshot as pretty-printed JSON.
//!
//! Key order is stable (struct declaration order plus insertion-ordered
//! property bags) and the indent is two spaces, so parsing the output and
//! re-serializing it reproduces the text byte for byte.

use cirrus_core::ExportData;

use crate::{ExportError, ExportResult};

/// Emit the snapshot as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails (not reachable for well-formed
/// snapshots).
pub fn emit(data: &ExportData) -> ExportResult<String> {
    serde_json::to_string_pretty(data).map_err(ExportError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::{CanvasItem, Connection, Properties};

    fn sample() -> ExportData {
        let mut props = Properties::new();
        props.insert("instanceType".into(), "t3.micro".into());
        props.insert("zebra".into(), 1.into());
        props.insert("alpha".into(), true.into());

        let items = vec![
            CanvasItem::new("vpc1", "vpc", "Main VPC").as_container(),
            CanvasItem::new("c1", "compute", "Web").with_properties(props),
        ];
        let connections = vec![Connection::new("e1", "c1", "vpc1").with_label("runs in")];
        ExportData::new(items, connections, "structured-dump")
    }

    #[test]
    fn test_round_trip_is_byte_identical() {
        let data = sample();
        let first = emit(&data).expect("should emit");

        let reparsed: ExportData = serde_json::from_str(&first).expect("should reparse");
        let second = emit(&reparsed).expect("should re-emit");
        assert_eq!(first, second);

        // Same law through an untyped parse.
        let value: serde_json::Value = serde_json::from_str(&first).expect("should parse");
        let third = serde_json::to_string_pretty(&value).expect("should serialize");
        assert_eq!(first, third);
    }

    #[test]
    fn test_two_space_indent() {
        let out = emit(&sample()).expect("should emit");
        assert!(out.contains("\n  \"items\": ["));
        assert!(out.contains("\n    {"));
    }

    #[test]
    fn test_unknown_property_keys_preserved_in_order() {
        let out = emit(&sample()).expect("should emit");
        let zebra = out.find("zebra").expect("zebra key present");
        let alpha = out.find("alpha").expect("alpha key present");
        assert!(zebra < alpha, "insertion order preserved, not sorted");
    }

    #[test]
    fn test_metadata_embedded() {
        let out = emit(&sample()).expect("should emit");
        assert!(out.contains("\"format\": \"structured-dump\""));
        assert!(out.contains("\"version\": \"1.0\""));
        assert!(out.contains("\"exportedAt\""));
    }
}
