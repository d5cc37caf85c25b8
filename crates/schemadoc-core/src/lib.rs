//! Schemadoc Core - Schema collection and document rendering
//!
//! This crate turns a declared object-relational model schema into
//! human-readable schema documentation: a spreadsheet or a formatted
//! design document.
//!
//! # Main Components
//!
//! - **Registry**: declared models and field metadata, loaded from a
//!   JSON/YAML manifest or registered programmatically
//! - **Collector**: walks every model's fields into [`FieldRow`]s,
//!   normalizing defaults and deriving backend column-type labels
//! - **Type Maps**: per-backend internal-type to column-type templates
//! - **Renderers**: spreadsheet (`.xlsx`) and document (`.docx`) writers
//!
//! # Example
//!
//! ```no_run
//! use schemadoc_core::{generate, GenerateOptions, Registry, Result};
//!
//! fn example(registry: &Registry) -> Result<()> {
//!     let written = generate(registry, &GenerateOptions::default())?;
//!     println!("wrote {}", written.display());
//!     Ok(())
//! }
//! ```

pub mod collect;
pub mod error;
pub mod registry;
pub mod render;
pub mod typemap;

use std::path::PathBuf;

// Re-export main types for convenience
pub use collect::{collect_rows, collect_rows_filtered, FieldRow};
pub use error::{Error, Result};
pub use registry::{FieldDefault, FieldSpec, ModelSpec, Registry};
pub use typemap::Backend;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output mode for [`generate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Formatted design document (`.docx`), the default
    #[default]
    Document,
    /// Spreadsheet export (`.xlsx`)
    Spreadsheet,
}

impl OutputMode {
    /// Map a mode argument to an output mode: the literal `"doc"` selects
    /// the document, any other value selects the spreadsheet.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "doc" {
            Self::Document
        } else {
            Self::Spreadsheet
        }
    }

    /// Fixed file name written when no output path is supplied
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Document => render::docx::DEFAULT_FILE_NAME,
            Self::Spreadsheet => render::xlsx::DEFAULT_FILE_NAME,
        }
    }
}

/// Options for the one-shot [`generate`] entry point.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Backend whose column types are reported
    pub backend: Backend,
    /// Which artifact to produce
    pub mode: OutputMode,
    /// Output path override; the mode's fixed file name in the working
    /// directory when `None`
    pub output: Option<PathBuf>,
}

/// Collect every registered model and render it in the selected mode.
///
/// Returns the path of the written artifact. Failures propagate
/// unwrapped; nothing is retried and partial output is not cleaned up.
pub fn generate(registry: &Registry, options: &GenerateOptions) -> Result<PathBuf> {
    let rows = collect::collect_rows(registry, options.backend)?;
    let path = options
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(options.mode.default_file_name()));

    match options.mode {
        OutputMode::Document => render::docx::write_document(&rows, &path)?,
        OutputMode::Spreadsheet => render::xlsx::write_workbook(&rows, &path)?,
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_mode_from_arg() {
        assert_eq!(OutputMode::from_arg("doc"), OutputMode::Document);
        // anything that is not "doc" means spreadsheet export
        assert_eq!(OutputMode::from_arg("xlsx"), OutputMode::Spreadsheet);
        assert_eq!(OutputMode::from_arg("excel"), OutputMode::Spreadsheet);
        assert_eq!(OutputMode::from_arg(""), OutputMode::Spreadsheet);
    }

    #[test]
    fn test_mode_defaults() {
        assert_eq!(OutputMode::default(), OutputMode::Document);
        assert_eq!(
            OutputMode::Document.default_file_name(),
            "database-schema.docx"
        );
        assert_eq!(
            OutputMode::Spreadsheet.default_file_name(),
            "database-schema.xlsx"
        );
    }
}
