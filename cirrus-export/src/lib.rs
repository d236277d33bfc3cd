//! # Cirrus Export
//!
//! Format emitters and export orchestration for Cirrus cloud-infrastructure
//! diagrams. Every emitter is a pure function from the normalized
//! [`cirrus_core::ExportData`] snapshot to target-specific text:
//!
//! | Format id | Output | Extension |
//! |---|---|---|
//! | `diagram-c4` | Mermaid C4 context | `.mmd` |
//! | `diagram-architecture` | Mermaid architecture | `.mmd` |
//! | `diagram-flowchart` | Mermaid flowchart | `.mmd` |
//! | `structured-dump` | Pretty-printed JSON snapshot | `.json` |
//! | `iac-template` | Terraform template | `.tf` |
//! | `c4-context` / `c4-container` / `c4-component` | `PlantUML` C4 variants | `.puml` |
//! | `deployment` / `network` | `PlantUML` deployment/network | `.puml` |
//!
//! The orchestrator fails only on an unregistered format identifier;
//! emitters degrade incomplete input to defaults instead of failing.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dump;
pub mod error;
pub mod exporter;
pub mod format;
pub mod mermaid;
pub mod plantuml;
pub mod sanitize;
pub mod terraform;

pub use error::{ExportError, ExportResult};
pub use exporter::{export, export_named};
pub use format::{ExportFormat, ALL_FORMATS};
pub use plantuml::PumlVariant;

/// Default label for unlabeled connections in C4-style output.
pub const DEFAULT_RELATIONSHIP_LABEL: &str = "Uses";

/// Cirrus export version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
