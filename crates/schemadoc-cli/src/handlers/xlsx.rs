//! Spreadsheet export command handler

use crate::cli::ExportArgs;
use crate::config::Config;
use crate::error::Result;
use crate::handlers::utils;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use schemadoc_core::render;
use tracing::{info, instrument};

/// Handle the xlsx command
#[instrument(skip(config, output), fields(manifest = %args.manifest.display()))]
pub fn handle_xlsx(args: ExportArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("xlsx_command", &format!("manifest: {}", args.manifest.display()));
    info!("Starting spreadsheet export");
    output.info(&format!("Reading model manifest: {}", args.manifest.display()))?;

    let registry = utils::load_registry(&args)?;
    let backend = utils::resolve_backend(&args, config)?;
    let filter = utils::compile_filter(&args)?;

    output.info(&format!(
        "Collecting field metadata for {} model(s) ({} column types)",
        registry.len(),
        backend
    ))?;
    let rows = utils::collect_with_progress(&registry, backend, filter.as_ref(), output)?;

    if rows.is_empty() {
        output.warning("No models matched; the sheet will contain only the header row")?;
    }

    let path = utils::resolve_output(&args, config, render::xlsx::DEFAULT_FILE_NAME);
    render::xlsx::write_workbook(&rows, &path)?;

    output.success(&format!(
        "✓ Exported {} field(s) to {}",
        rows.len(),
        path.display()
    ))?;

    Ok(())
}
