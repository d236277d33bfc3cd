//! Geometric containment resolution.
//!
//! Parent/child relationships are not drawn explicitly on the canvas; they
//! are inferred from screen geometry. An item belongs to a container when
//! its center point lies within the container's bounds (inclusive). When
//! several containers qualify, the first one in input order wins - a named,
//! deliberate tie-break, not nesting-depth-aware.

use crate::CanvasItem;

/// Infer parent/child containment for a set of positioned items.
///
/// Two passes over the same center-point test:
///
/// 1. Every leaf is tested against every container; the first container in
///    input order whose bounds contain the leaf's center becomes its parent.
/// 2. Every container is tested the same way against the other containers,
///    which establishes multi-level nesting (subnet inside VPC). A candidate
///    parent whose own parent chain already passes through the item is
///    skipped, so mutually-overlapping containers cannot form a cycle.
///
/// Prior assignments are cleared first, so resolution is idempotent and
/// never mutates coordinates.
pub fn resolve_containment(items: &mut [CanvasItem]) {
    for item in items.iter_mut() {
        item.parent_id = None;
        item.children = None;
    }

    let container_indices: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_bounding_box)
        .map(|(i, _)| i)
        .collect();

    let mut assignments: Vec<(usize, usize)> = Vec::new();

    // Leaf pass: first container in input order containing the center wins.
    for (child, item) in items.iter().enumerate() {
        if item.is_bounding_box {
            continue;
        }
        let (cx, cy) = item.center();
        if let Some(&parent) = container_indices
            .iter()
            .find(|&&c| items[c].contains_point(cx, cy))
        {
            assignments.push((child, parent));
        }
    }

    // Container pass: same test against the other containers, guarding
    // against cycles through the parents assigned so far.
    for &child in &container_indices {
        let (cx, cy) = items[child].center();
        if let Some(&parent) = container_indices.iter().find(|&&c| {
            c != child
                && items[c].contains_point(cx, cy)
                && !would_cycle(&assignments, child, c)
        }) {
            assignments.push((child, parent));
        }
    }

    for (child, parent) in assignments {
        let child_id = items[child].id.clone();
        let parent_id = items[parent].id.clone();
        tracing::trace!(child = %child_id, parent = %parent_id, "containment resolved");
        items[child].parent_id = Some(parent_id);
        items[parent]
            .children
            .get_or_insert_with(Vec::new)
            .push(child_id);
    }
}

/// Whether assigning `parent` to `child` would close a containment cycle.
fn would_cycle(assignments: &[(usize, usize)], child: usize, parent: usize) -> bool {
    let mut current = parent;
    loop {
        if current == child {
            return true;
        }
        match assignments.iter().find(|(c, _)| *c == current) {
            Some(&(_, next)) => current = next,
            None => return false,
        }
    }
}
