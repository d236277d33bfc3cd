//! Export orchestration: format dispatch over the emitter registry.

use cirrus_core::ExportData;

use crate::plantuml::PumlVariant;
use crate::{dump, mermaid, plantuml, terraform, ExportFormat, ExportResult};

/// Export a snapshot in the given format.
///
/// A pure dispatch over the static emitter registry: no caching, no
/// retries; every call re-derives the output from the snapshot.
///
/// # Errors
///
/// Returns [`crate::ExportError::Serialization`] if the structured dump
/// cannot be serialized (not reachable for well-formed snapshots).
pub fn export(format: ExportFormat, data: &ExportData) -> ExportResult<String> {
    tracing::debug!(%format, items = data.items.len(), connections = data.connections.len(), "exporting snapshot");
    match format {
        ExportFormat::DiagramC4 => Ok(mermaid::c4::emit(data)),
        ExportFormat::DiagramArchitecture => Ok(mermaid::architecture::emit(data)),
        ExportFormat::DiagramFlowchart => Ok(mermaid::flowchart::emit(data)),
        ExportFormat::StructuredDump => dump::emit(data),
        ExportFormat::IacTemplate => Ok(terraform::emit(data)),
        ExportFormat::C4Context => Ok(plantuml::emit(data, PumlVariant::Context)),
        ExportFormat::C4Container => Ok(plantuml::emit(data, PumlVariant::Container)),
        ExportFormat::C4Component => Ok(plantuml::emit(data, PumlVariant::Component)),
        ExportFormat::Deployment => Ok(plantuml::emit(data, PumlVariant::Deployment)),
        ExportFormat::Network => Ok(plantuml::emit(data, PumlVariant::Network)),
    }
}

/// Export a snapshot by format identifier.
///
/// # Errors
///
/// Returns [`crate::ExportError::UnsupportedFormat`] naming the offending
/// identifier when no emitter is registered for it.
pub fn export_named(format_id: &str, data: &ExportData) -> ExportResult<String> {
    let format: ExportFormat = format_id.parse()?;
    export(format, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExportError, ALL_FORMATS};
    use cirrus_core::CanvasItem;

    fn sample() -> ExportData {
        ExportData::new(
            vec![CanvasItem::new("c1", "compute", "Web")],
            Vec::new(),
            "structured-dump",
        )
    }

    #[test]
    fn test_every_registered_format_exports() {
        let data = sample();
        for &format in ALL_FORMATS {
            let out = export(format, &data).expect("should export");
            assert!(!out.is_empty(), "empty output for {format}");
        }
    }

    #[test]
    fn test_unknown_format_names_offender() {
        let err = export_named("svg", &sample()).unwrap_err();
        match err {
            ExportError::UnsupportedFormat(id) => assert_eq!(id, "svg"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_export_is_deterministic() {
        let data = sample();
        let a = export(ExportFormat::DiagramC4, &data).expect("should export");
        let b = export(ExportFormat::DiagramC4, &data).expect("should export");
        assert_eq!(a, b);
    }
}
