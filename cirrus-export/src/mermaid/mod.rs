//! Mermaid diagram emitters.
//!
//! Three dialects over the same normalized graph: C4 context (nested
//! boundary blocks), architecture (flat groups/services with icons), and
//! flowchart (flat nodes + edges).

pub mod architecture;
pub mod c4;
pub mod flowchart;
