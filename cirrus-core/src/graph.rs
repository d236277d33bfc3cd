//! Canvas graph builder: raw shape records to a normalized snapshot.

use crate::{resolve_containment, CanvasItem, Connection, ExportData, ShapeRecord};

/// Build a normalized [`ExportData`] snapshot from raw canvas records.
///
/// Records are split by the `"arrow"` type discriminator. Non-edge records
/// become items with a `"<type>-<id>"` key and verbatim property copies,
/// then containment is resolved geometrically. Arrow records become
/// connections; an arrow missing either terminal binding, or whose binding
/// names an id with no matching item, is silently dropped - a deliberate
/// tolerance for in-progress drawings. This stage never fails; missing
/// fields degrade to defaults.
#[must_use]
pub fn build_graph(records: &[ShapeRecord], format: &str) -> ExportData {
    let mut items: Vec<CanvasItem> = Vec::new();
    for record in records.iter().filter(|r| !r.is_arrow()) {
        let mut item = CanvasItem::new(record.id.clone(), &record.shape_type, record.label.clone())
            .at(record.x, record.y)
            .with_properties(record.properties.clone());
        item.is_bounding_box = record.is_container();
        items.push(item);
    }

    resolve_containment(&mut items);

    let mut connections: Vec<Connection> = Vec::new();
    for record in records.iter().filter(|r| r.is_arrow()) {
        let from = record.start.as_ref().and_then(|t| t.item.as_deref());
        let to = record.end.as_ref().and_then(|t| t.item.as_deref());
        let (Some(from), Some(to)) = (from, to) else {
            tracing::debug!(arrow = %record.id, "dropping arrow with unbound terminal");
            continue;
        };
        if !items.iter().any(|i| i.id == from) || !items.iter().any(|i| i.id == to) {
            tracing::debug!(arrow = %record.id, %from, %to, "dropping arrow with dangling endpoint");
            continue;
        }
        let mut connection = Connection::new(record.id.clone(), from, to);
        if !record.label.is_empty() {
            connection.label = Some(record.label.clone());
        }
        connection.properties = record.properties.clone();
        connections.push(connection);
    }

    ExportData::new(items, connections, format)
}
