//! # Cirrus CLI
//!
//! Command-line surface for the Cirrus export pipeline: read a raw canvas
//! snapshot (a JSON array of shape records), build the normalized graph,
//! and write the chosen format to disk.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use cirrus_core::{build_graph, ShapeRecord};
use cirrus_export::{export, ExportFormat, ALL_FORMATS};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cirrus", version, about = "Export cloud infrastructure diagrams")]
pub struct CliArgs {
    /// Input snapshot: a JSON array of canvas shape records.
    #[arg(required_unless_present = "list_formats")]
    pub input: Option<PathBuf>,

    /// Export format identifier.
    #[arg(short, long, default_value = "structured-dump", env = "CIRRUS_FORMAT")]
    pub format: String,

    /// Output path; defaults to the input stem plus the format's extension.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List the registered formats and exit.
    #[arg(long)]
    pub list_formats: bool,
}

/// Run the exporter with the given arguments.
///
/// # Errors
///
/// Returns an error when the input cannot be read or parsed, the format is
/// not registered, or the output cannot be written.
pub fn run(args: &CliArgs) -> anyhow::Result<()> {
    if args.list_formats {
        print_formats();
        return Ok(());
    }

    let input = args
        .input
        .as_deref()
        .context("missing input snapshot path")?;
    let json = fs::read_to_string(input)
        .with_context(|| format!("failed to read snapshot {}", input.display()))?;
    let records: Vec<ShapeRecord> =
        serde_json::from_str(&json).context("snapshot is not a JSON array of shape records")?;

    let format: ExportFormat = args.format.parse()?;
    tracing::debug!(records = records.len(), %format, "building graph");
    let data = build_graph(&records, format.id());
    let text = export(format, &data)?;

    let output = output_path(input, format, args.output.as_deref());
    fs::write(&output, &text)
        .with_context(|| format!("failed to write output {}", output.display()))?;

    tracing::info!(
        items = data.items.len(),
        connections = data.connections.len(),
        output = %output.display(),
        "export complete"
    );
    Ok(())
}

/// Resolve the output path: an explicit `--output` wins, otherwise the
/// input stem with the format's file extension.
#[must_use]
pub fn output_path(input: &Path, format: ExportFormat, explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(
        || input.with_extension(format.file_extension()),
        Path::to_path_buf,
    )
}

fn print_formats() {
    for &format in ALL_FORMATS {
        println!("{:<22} .{}", format.id(), format.file_extension());
    }
}
