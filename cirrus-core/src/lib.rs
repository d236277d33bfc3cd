//! # Cirrus Core
//!
//! Core diagram model for the Cirrus export pipeline: canvas items and
//! connections, geometric containment resolution, and graph/hierarchy
//! construction from raw canvas snapshots.
//!
//! ## Pipeline
//!
//! ```text
//! raw shape records ──► graph builder ──► ExportData ──► hierarchy forest
//!                          │                                  │
//!                          └── containment resolver           └── emitters
//!                              (center-point geometry)            (cirrus-export)
//! ```
//!
//! Everything in this crate is a pure, synchronous transformation over an
//! in-memory snapshot. The pipeline never mutates caller state and, apart
//! from JSON (de)serialization, never fails: incomplete drawings degrade to
//! defaults instead of erroring.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod connection;
pub mod error;
pub mod export;
pub mod geometry;
pub mod graph;
pub mod hierarchy;
pub mod item;
pub mod shape;

pub use connection::Connection;
pub use error::{CoreError, CoreResult};
pub use export::{ExportData, ExportMetadata, SCHEMA_VERSION};
pub use geometry::resolve_containment;
pub use graph::build_graph;
pub use hierarchy::{build_hierarchy, HierarchyNode};
pub use item::{CanvasItem, Properties};
pub use shape::{ArrowTerminal, ShapeRecord, ARROW_TYPE, CONTAINER_TYPES};

/// Cirrus core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
