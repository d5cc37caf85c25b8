//! Shared utilities for command handlers

use crate::cli::ExportArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use regex::Regex;
use schemadoc_core::{collect_rows_filtered, Backend, FieldRow, Registry};
use std::path::PathBuf;
use tracing::debug;

/// Load the model manifest into a registry
pub fn load_registry(args: &ExportArgs) -> Result<Registry> {
    if !args.manifest.exists() {
        return Err(Error::FileNotFound {
            path: args.manifest.clone(),
        });
    }

    let registry = Registry::from_file(&args.manifest)?;
    debug!(models = registry.len(), "manifest loaded");
    Ok(registry)
}

/// Resolve the backend: the command-line flag wins, then the config
/// file's default, then mysql.
pub fn resolve_backend(args: &ExportArgs, config: &Config) -> Result<Backend> {
    match args.backend {
        Some(backend) => Ok(backend.into()),
        None => match &config.default_backend {
            Some(name) => Ok(name.parse()?),
            None => Ok(Backend::default()),
        },
    }
}

/// Compile the optional model filter expression
pub fn compile_filter(args: &ExportArgs) -> Result<Option<Regex>> {
    args.filter
        .as_deref()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| Error::InvalidFilter {
                pattern: pattern.to_string(),
                source,
            })
        })
        .transpose()
}

/// Collect field rows, advancing a progress bar as models are visited
pub fn collect_with_progress(
    registry: &Registry,
    backend: Backend,
    filter: Option<&Regex>,
    output: &OutputWriter,
) -> Result<Vec<FieldRow>> {
    let progress = output.progress_bar(registry.len() as u64, "collecting models");

    let rows = collect_rows_filtered(registry, backend, |model| {
        if let Some(pb) = &progress {
            pb.inc(1);
        }
        filter.map_or(true, |re| re.is_match(&model.name))
    });

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(rows?)
}

/// Resolve the output path: explicit flag, else the configured output
/// directory, else the fixed default name in the working directory.
pub fn resolve_output(args: &ExportArgs, config: &Config, default_name: &str) -> PathBuf {
    args.output.clone().unwrap_or_else(|| match &config.output_dir {
        Some(dir) => dir.join(default_name),
        None => PathBuf::from(default_name),
    })
}
