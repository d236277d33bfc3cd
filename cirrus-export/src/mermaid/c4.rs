//! Mermaid C4 context emitter.
//!
//! Renders the containment forest as nested boundary blocks, then a flat
//! relationship list. Unlabeled connections get the C4 default label
//! `"Uses"`; every identifier is sanitized to `[A-Za-z0-9_]`.

use std::fmt::Write;

use cirrus_core::{build_hierarchy, CanvasItem, ExportData, HierarchyNode};

use crate::sanitize::{escape_label, sanitize_id};
use crate::DEFAULT_RELATIONSHIP_LABEL;

/// Boundary keyword for a container category.
fn boundary_keyword(category: &str) -> &'static str {
    match category {
        "vpc" => "Enterprise_Boundary",
        "subnet" => "System_Boundary",
        _ => "Boundary",
    }
}

/// Element keyword for a leaf resource category.
pub(crate) fn element_keyword(category: &str) -> &'static str {
    match category {
        "database" => "SystemDb",
        "user" => "Person",
        "internet" => "System_Ext",
        _ => "System",
    }
}

/// Emit a Mermaid C4 context diagram.
#[must_use]
pub fn emit(data: &ExportData) -> String {
    let mut out = String::from("C4Context\n");

    for node in build_hierarchy(data) {
        write_node(&mut out, &node, 1);
    }

    for conn in data.resolved_connections() {
        let label = conn.effective_label().unwrap_or(DEFAULT_RELATIONSHIP_LABEL);
        let _ = writeln!(
            out,
            "    Rel({}, {}, \"{}\")",
            sanitize_id(&conn.from),
            sanitize_id(&conn.to),
            escape_label(label)
        );
    }

    out
}

fn write_node(out: &mut String, node: &HierarchyNode<'_>, depth: usize) {
    let indent = "    ".repeat(depth);
    let item = node.item;

    if item.is_bounding_box {
        let _ = writeln!(
            out,
            "{indent}{}({}, \"{}\") {{",
            boundary_keyword(item.category()),
            sanitize_id(&item.id),
            escape_label(item.display_label())
        );
        for child in &node.children {
            write_node(out, child, depth + 1);
        }
        let _ = writeln!(out, "{indent}}}");
    } else {
        write_element(out, &indent, item);
    }
}

fn write_element(out: &mut String, indent: &str, item: &CanvasItem) {
    let _ = writeln!(
        out,
        "{indent}{}({}, \"{}\")",
        element_keyword(item.category()),
        sanitize_id(&item.id),
        escape_label(item.display_label())
    );
}
