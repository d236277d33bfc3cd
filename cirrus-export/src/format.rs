//! The fixed registry of export formats.

use std::fmt;
use std::str::FromStr;

use crate::ExportError;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Mermaid C4 context diagram (nested boundaries + relationships).
    DiagramC4,
    /// Mermaid architecture diagram (groups, services, icons).
    DiagramArchitecture,
    /// Mermaid flowchart (flat nodes + edges).
    DiagramFlowchart,
    /// Full snapshot serialized as pretty-printed JSON.
    StructuredDump,
    /// Terraform infrastructure-as-code template.
    IacTemplate,
    /// `PlantUML` C4 context variant.
    C4Context,
    /// `PlantUML` C4 container variant.
    C4Container,
    /// `PlantUML` C4 component variant.
    C4Component,
    /// `PlantUML` deployment variant (nodes and artifacts).
    Deployment,
    /// `PlantUML` network variant (generic shapes).
    Network,
}

/// All registered formats, in registry order.
pub const ALL_FORMATS: &[ExportFormat] = &[
    ExportFormat::DiagramC4,
    ExportFormat::DiagramArchitecture,
    ExportFormat::DiagramFlowchart,
    ExportFormat::StructuredDump,
    ExportFormat::IacTemplate,
    ExportFormat::C4Context,
    ExportFormat::C4Container,
    ExportFormat::C4Component,
    ExportFormat::Deployment,
    ExportFormat::Network,
];

impl ExportFormat {
    /// The stable format identifier used by callers.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::DiagramC4 => "diagram-c4",
            Self::DiagramArchitecture => "diagram-architecture",
            Self::DiagramFlowchart => "diagram-flowchart",
            Self::StructuredDump => "structured-dump",
            Self::IacTemplate => "iac-template",
            Self::C4Context => "c4-context",
            Self::C4Container => "c4-container",
            Self::C4Component => "c4-component",
            Self::Deployment => "deployment",
            Self::Network => "network",
        }
    }

    /// File extension for download convenience (not semantically
    /// load-bearing).
    #[must_use]
    pub fn file_extension(self) -> &'static str {
        match self {
            Self::DiagramC4 | Self::DiagramArchitecture | Self::DiagramFlowchart => "mmd",
            Self::StructuredDump => "json",
            Self::IacTemplate => "tf",
            Self::C4Context
            | Self::C4Container
            | Self::C4Component
            | Self::Deployment
            | Self::Network => "puml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FORMATS
            .iter()
            .copied()
            .find(|f| f.id() == s)
            .ok_or_else(|| ExportError::UnsupportedFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for &format in ALL_FORMATS {
            let parsed: ExportFormat = format.id().parse().expect("should parse own id");
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn test_unknown_id_is_unsupported() {
        let err = "diagram-unknown".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat(id) if id == "diagram-unknown"));
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(ExportFormat::DiagramFlowchart.file_extension(), "mmd");
        assert_eq!(ExportFormat::C4Container.file_extension(), "puml");
        assert_eq!(ExportFormat::StructuredDump.file_extension(), "json");
        assert_eq!(ExportFormat::IacTemplate.file_extension(), "tf");
    }
}
