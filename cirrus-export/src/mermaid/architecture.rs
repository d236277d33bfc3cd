//! Mermaid architecture emitter.
//!
//! Flat `group` declarations for containers, `service` declarations for
//! resources (with an `in <group>` clause when parented), then connection
//! lines using the fixed `:R --> L:` arrow token.

use std::fmt::Write;

use cirrus_core::{CanvasItem, ExportData};

use crate::sanitize::sanitize_id;

/// Icon for a leaf resource category.
fn service_icon(category: &str) -> &'static str {
    match category {
        "database" => "database",
        "storage" => "disk",
        "internet" => "cloud",
        _ => "server",
    }
}

/// Square-bracket labels cannot themselves contain brackets.
fn bracket_label(item: &CanvasItem) -> String {
    item.display_label().replace('[', "(").replace(']', ")")
}

/// Emit a Mermaid architecture diagram.
#[must_use]
pub fn emit(data: &ExportData) -> String {
    let mut out = String::from("architecture-beta\n");

    for container in data.containers() {
        let _ = write!(
            out,
            "    group {}(cloud)[{}]",
            sanitize_id(&container.id),
            bracket_label(container)
        );
        if let Some(parent) = &container.parent_id {
            let _ = write!(out, " in {}", sanitize_id(parent));
        }
        out.push('\n');
    }

    for resource in data.resources() {
        let _ = write!(
            out,
            "    service {}({})[{}]",
            sanitize_id(&resource.id),
            service_icon(resource.category()),
            bracket_label(resource)
        );
        if let Some(parent) = &resource.parent_id {
            let _ = write!(out, " in {}", sanitize_id(parent));
        }
        out.push('\n');
    }

    for conn in data.resolved_connections() {
        let _ = writeln!(
            out,
            "    {}:R --> L:{}",
            sanitize_id(&conn.from),
            sanitize_id(&conn.to)
        );
    }

    out
}
