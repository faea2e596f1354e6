use crate::adapters::storage::LocalStorage;
use crate::app::batch::{strip_command_word, BatchImporter};
use crate::app::export::ContactExporter;
use crate::config::{BookConfig, CliConfig};
use crate::core::add_parser::AddCommandParser;
use crate::domain::ports::{CommandParser, Storage};
use crate::utils::error::Result;
use std::io::Write;

/// Runs one CLI invocation and returns the process exit code.
///
/// Single-command mode prints the parsed person as JSON to `out`. Batch
/// mode prints a summary to `out`, one line per rejected input to `err`,
/// and writes the export bundle unless `--dry-run` is set. The exit code
/// is 1 when any batch line was rejected.
pub fn run<O: Write, E: Write>(
    cli: &CliConfig,
    config: &BookConfig,
    out: &mut O,
    err: &mut E,
) -> Result<i32> {
    let parser = AddCommandParser::new(config.animal_type_policy()?);

    let Some(input) = cli.input.as_deref() else {
        let args = cli.command_args();
        let command = parser.parse(strip_command_word(&args))?;
        writeln!(out, "{}", serde_json::to_string_pretty(command.person())?)?;
        return Ok(0);
    };

    tracing::info!("📁 Importing add commands from: {}", input);
    let raw = LocalStorage::new(".").read_file(input)?;
    let text = String::from_utf8(raw)?;

    let report = BatchImporter::new(parser).import(&text);
    writeln!(
        out,
        "✅ {} of {} contacts parsed",
        report.imported.len(),
        report.total()
    )?;
    for failure in &report.failures {
        writeln!(err, "❌ line {}: {}", failure.line, failure.message)?;
    }

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - export bundle not written");
    } else if !report.imported.is_empty() {
        let output_path = cli.resolve_output_path(config);
        let exporter =
            ContactExporter::from_names(LocalStorage::new(output_path), &config.export.formats)?;
        let bundle = exporter.export(&report.imported)?;
        tracing::info!("📁 Export saved to: {}/{}", output_path, bundle);
        writeln!(out, "📁 Export saved to: {}/{}", output_path, bundle)?;
    }

    Ok(if report.is_clean() { 0 } else { 1 })
}
