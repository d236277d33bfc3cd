//! `PlantUML` emitters: C4 context/container/component, deployment, and
//! network variants.
//!
//! All variants render the containment forest between `@startuml` and
//! `@enduml`, then a flat relationship list. The C4 variants mirror the
//! Mermaid C4 type-mapping table with variant-specific element keywords;
//! deployment swaps in `node`/`artifact`, and network uses generic shape
//! keywords. Identifier sanitization and the `"Uses"` default-label policy
//! are shared with the Mermaid emitters.

use std::fmt::Write;

use cirrus_core::{build_hierarchy, CanvasItem, ExportData, HierarchyNode};

use crate::mermaid::c4::element_keyword as context_keyword;
use crate::sanitize::{escape_label, sanitize_id};
use crate::DEFAULT_RELATIONSHIP_LABEL;

/// `PlantUML` output variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumlVariant {
    /// C4 context: systems and persons.
    Context,
    /// C4 container: containers and container databases.
    Container,
    /// C4 component: components and component databases.
    Component,
    /// Deployment: nodes containing artifacts.
    Deployment,
    /// Network: generic node/database/storage/rectangle shapes.
    Network,
}

impl PumlVariant {
    fn is_c4(self) -> bool {
        matches!(self, Self::Context | Self::Container | Self::Component)
    }
}

fn boundary_keyword(category: &str) -> &'static str {
    match category {
        "vpc" => "Enterprise_Boundary",
        "subnet" => "System_Boundary",
        _ => "Boundary",
    }
}

fn container_keyword(category: &str) -> &'static str {
    match category {
        "database" => "ContainerDb",
        "user" => "Person",
        "internet" => "System_Ext",
        _ => "Container",
    }
}

fn component_keyword(category: &str) -> &'static str {
    match category {
        "database" => "ComponentDb",
        "user" => "Person",
        "internet" => "System_Ext",
        _ => "Component",
    }
}

fn network_keyword(category: &str) -> &'static str {
    match category {
        "compute" => "node",
        "database" => "database",
        "storage" => "storage",
        _ => "rectangle",
    }
}

/// Emit a `PlantUML` diagram in the chosen variant.
#[must_use]
pub fn emit(data: &ExportData, variant: PumlVariant) -> String {
    let mut out = String::from("@startuml\n");

    for node in build_hierarchy(data) {
        write_node(&mut out, &node, 0, variant);
    }

    for conn in data.resolved_connections() {
        let label = conn.effective_label().unwrap_or(DEFAULT_RELATIONSHIP_LABEL);
        let from = sanitize_id(&conn.from);
        let to = sanitize_id(&conn.to);
        if variant.is_c4() {
            let _ = writeln!(out, "Rel({from}, {to}, \"{}\")", escape_label(label));
        } else {
            let _ = writeln!(out, "{from} --> {to} : {}", escape_label(label));
        }
    }

    out.push_str("@enduml\n");
    out
}

fn write_node(out: &mut String, node: &HierarchyNode<'_>, depth: usize, variant: PumlVariant) {
    let indent = "    ".repeat(depth);
    let item = node.item;

    if item.is_bounding_box {
        write_container_open(out, &indent, item, variant);
        for child in &node.children {
            write_node(out, child, depth + 1, variant);
        }
        let _ = writeln!(out, "{indent}}}");
    } else {
        write_leaf(out, &indent, item, variant);
    }
}

fn write_container_open(out: &mut String, indent: &str, item: &CanvasItem, variant: PumlVariant) {
    let id = sanitize_id(&item.id);
    let label = escape_label(item.display_label());
    match variant {
        PumlVariant::Context | PumlVariant::Container | PumlVariant::Component => {
            let _ = writeln!(
                out,
                "{indent}{}({id}, \"{label}\") {{",
                boundary_keyword(item.category())
            );
        }
        PumlVariant::Deployment => {
            let _ = writeln!(out, "{indent}node \"{label}\" as {id} {{");
        }
        PumlVariant::Network => {
            let _ = writeln!(out, "{indent}rectangle \"{label}\" as {id} {{");
        }
    }
}

fn write_leaf(out: &mut String, indent: &str, item: &CanvasItem, variant: PumlVariant) {
    let id = sanitize_id(&item.id);
    let label = escape_label(item.display_label());
    match variant {
        PumlVariant::Context => {
            let _ = writeln!(out, "{indent}{}({id}, \"{label}\")", context_keyword(item.category()));
        }
        PumlVariant::Container => {
            let _ = writeln!(
                out,
                "{indent}{}({id}, \"{label}\")",
                container_keyword(item.category())
            );
        }
        PumlVariant::Component => {
            let _ = writeln!(
                out,
                "{indent}{}({id}, \"{label}\")",
                component_keyword(item.category())
            );
        }
        PumlVariant::Deployment => {
            let _ = writeln!(out, "{indent}artifact \"{label}\" as {id}");
        }
        PumlVariant::Network => {
            let _ = writeln!(
                out,
                "{indent}{} \"{label}\" as {id}",
                network_keyword(item.category())
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::{resolve_containment, CanvasItem, Connection, Properties};

    fn dims(w: f64, h: f64) -> Properties {
        let mut props = Properties::new();
        props.insert("w".into(), w.into());
        props.insert("h".into(), h.into());
        props
    }

    fn sample() -> ExportData {
        let mut items = vec![
            CanvasItem::new("vpc1", "vpc", "Main VPC")
                .at(0.0, 0.0)
                .as_container()
                .with_properties(dims(1000.0, 1000.0)),
            CanvasItem::new("c1", "compute", "Web")
                .at(50.0, 50.0)
                .with_properties(dims(100.0, 80.0)),
            CanvasItem::new("db1", "database", "Orders DB")
                .at(5000.0, 5000.0)
                .with_properties(dims(100.0, 80.0)),
        ];
        resolve_containment(&mut items);
        let connections = vec![Connection::new("e1", "c1", "db1")];
        ExportData::new(items, connections, "c4-context")
    }

    #[test]
    fn test_context_variant() {
        let out = emit(&sample(), PumlVariant::Context);
        assert!(out.starts_with("@startuml\n"));
        assert!(out.ends_with("@enduml\n"));
        assert!(out.contains("Enterprise_Boundary(vpc1, \"Main VPC\") {"));
        assert!(out.contains("    System(c1, \"Web\")"));
        assert!(out.contains("SystemDb(db1, \"Orders DB\")"));
        assert!(out.contains("Rel(c1, db1, \"Uses\")"));
    }

    #[test]
    fn test_container_variant_keywords() {
        let out = emit(&sample(), PumlVariant::Container);
        assert!(out.contains("Container(c1, \"Web\")"));
        assert!(out.contains("ContainerDb(db1, \"Orders DB\")"));
    }

    #[test]
    fn test_component_variant_keywords() {
        let out = emit(&sample(), PumlVariant::Component);
        assert!(out.contains("Component(c1, \"Web\")"));
        assert!(out.contains("ComponentDb(db1, \"Orders DB\")"));
    }

    #[test]
    fn test_deployment_variant_nodes_and_artifacts() {
        let out = emit(&sample(), PumlVariant::Deployment);
        assert!(out.contains("node \"Main VPC\" as vpc1 {"));
        assert!(out.contains("    artifact \"Web\" as c1"));
        assert!(out.contains("artifact \"Orders DB\" as db1"));
        assert!(out.contains("c1 --> db1 : Uses"));
    }

    #[test]
    fn test_network_variant_shapes() {
        let out = emit(&sample(), PumlVariant::Network);
        assert!(out.contains("rectangle \"Main VPC\" as vpc1 {"));
        assert!(out.contains("    node \"Web\" as c1"));
        assert!(out.contains("database \"Orders DB\" as db1"));
    }

    #[test]
    fn test_labeled_connection() {
        let mut data = sample();
        data.connections[0].label = Some("queries".to_string());
        let out = emit(&data, PumlVariant::Network);
        assert!(out.contains("c1 --> db1 : queries"));
    }
}
