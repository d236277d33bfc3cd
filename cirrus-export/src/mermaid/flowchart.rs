//! Mermaid flowchart emitter.
//!
//! Flat node list followed by an edge list. Containers use the subroutine
//! bracket style `[[..]]`, leaves the plain `[..]`. The label token
//! `|label|` appears only when a connection carries a non-empty label.

use std::fmt::Write;

use cirrus_core::ExportData;

use crate::sanitize::{escape_label, sanitize_id};

/// Emit a Mermaid flowchart.
#[must_use]
pub fn emit(data: &ExportData) -> String {
    let mut out = String::from("flowchart TB\n");

    for item in &data.items {
        let id = sanitize_id(&item.id);
        let label = escape_label(item.display_label());
        if item.is_bounding_box {
            let _ = writeln!(out, "    {id}[[\"{label}\"]]");
        } else {
            let _ = writeln!(out, "    {id}[\"{label}\"]");
        }
    }

    for conn in data.resolved_connections() {
        let from = sanitize_id(&conn.from);
        let to = sanitize_id(&conn.to);
        match conn.effective_label() {
            Some(label) => {
                let _ = writeln!(out, "    {from} -->|{}| {to}", escape_label(label));
            }
            None => {
                let _ = writeln!(out, "    {from} --> {to}");
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::{CanvasItem, Connection};

    fn sample() -> ExportData {
        let items = vec![
            CanvasItem::new("vpc1", "vpc", "Main VPC").as_container(),
            CanvasItem::new("c1", "compute", "Web"),
            CanvasItem::new("db1", "database", "Orders DB"),
        ];
        let connections = vec![
            Connection::new("e1", "c1", "db1").with_label("reads"),
            Connection::new("e2", "db1", "c1"),
        ];
        ExportData::new(items, connections, "diagram-flowchart")
    }

    #[test]
    fn test_bracket_styles() {
        let out = emit(&sample());
        assert!(out.contains("vpc1[[\"Main VPC\"]]\n"));
        assert!(out.contains("c1[\"Web\"]\n"));
    }

    #[test]
    fn test_labeled_edge_uses_pipe_token() {
        let out = emit(&sample());
        assert!(out.contains("c1 -->|reads| db1\n"));
    }

    #[test]
    fn test_unlabeled_edge_omits_label_token() {
        let out = emit(&sample());
        assert!(out.contains("db1 --> c1\n"));
        assert!(!out.contains("db1 -->|"));
    }

    #[test]
    fn test_empty_label_treated_as_absent() {
        let mut data = sample();
        data.connections[0].label = Some(String::new());
        let out = emit(&data);
        assert!(out.contains("c1 --> db1\n"));
        assert!(!out.contains("|reads|"));
    }
}
