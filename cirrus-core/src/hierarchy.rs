//! Hierarchy tree builder: containment-resolved items to a rooted forest.

use std::collections::HashSet;

use crate::{CanvasItem, ExportData};

/// One node of the containment forest.
#[derive(Debug)]
pub struct HierarchyNode<'a> {
    /// The item at this node.
    pub item: &'a CanvasItem,
    /// Nested children: containers expanded recursively, leaves terminal.
    pub children: Vec<HierarchyNode<'a>>,
}

/// Arrange containment-resolved items into a rooted forest.
///
/// Roots are containers with no parent plus orphan leaves, in input order.
/// Children are expanded by matching `parent_id`, again in input order; no
/// sorting is applied, so output text order is input-order-dependent. An id
/// already on the descent path is not expanded again (a structural cycle
/// cannot come out of the resolver, but the guard keeps hand-built
/// snapshots from recursing forever).
#[must_use]
pub fn build_hierarchy(data: &ExportData) -> Vec<HierarchyNode<'_>> {
    let mut path = HashSet::new();
    data.items
        .iter()
        .filter(|item| item.parent_id.is_none())
        .map(|item| expand(data, item, &mut path))
        .collect()
}

fn expand<'a>(
    data: &'a ExportData,
    item: &'a CanvasItem,
    path: &mut HashSet<&'a str>,
) -> HierarchyNode<'a> {
    if !item.is_bounding_box || !path.insert(&item.id) {
        return HierarchyNode {
            item,
            children: Vec::new(),
        };
    }

    let children = data
        .items
        .iter()
        .filter(|child| child.parent_id.as_deref() == Some(item.id.as_str()))
        .map(|child| expand(data, child, path))
        .collect();
    path.remove(item.id.as_str());

    HierarchyNode { item, children }
}
