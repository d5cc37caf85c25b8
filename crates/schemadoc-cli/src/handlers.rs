//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand,
//! one handler per file.

mod completions;
mod doc;
mod utils;
mod xlsx;

pub use completions::handle_completions;
pub use doc::handle_doc;
pub use xlsx::handle_xlsx;
