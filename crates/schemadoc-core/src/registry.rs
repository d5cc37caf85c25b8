//! Model registry: declared models and their field metadata
//!
//! The registry is the collaborator the collector walks. Models are held
//! in registration order; a manifest file (JSON or YAML, chosen by file
//! extension) deserializes straight into [`Registry`], and programmatic
//! callers can [`Registry::register`] models one at a time.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Declared default for a field.
///
/// A field with no declared default is represented by `None` at the
/// [`FieldSpec::default`] level; that absence is the "unset" sentinel and
/// normalizes to a blank cell in every output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldDefault {
    /// A factory function reference. `callable` carries the function name
    /// when it is introspectable, and `None` when it is not.
    Callable { callable: Option<String> },

    /// A literal value, stored exactly as declared.
    Literal(serde_json::Value),
}

/// One column's declared metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Column name
    pub name: String,

    /// Internal type identifier, e.g. `"char"` or `"decimal"`. Looked up
    /// in the selected backend's type-mapping table.
    #[serde(rename = "type")]
    pub internal_type: String,

    /// Primary-key flag
    #[serde(default)]
    pub primary_key: bool,

    /// Whether the column accepts NULL
    #[serde(default)]
    pub null: bool,

    /// Uniqueness flag
    #[serde(default)]
    pub unique: bool,

    /// Declared default; absent means "no default"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldDefault>,

    /// Human description; falls back to the field name with underscores
    /// replaced by spaces when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Open attribute map consumed by type-template substitution
    /// (e.g. `max_length`, `max_digits`, `decimal_places`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, serde_json::Value>,
}

/// One logical table as declared in application code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Dotted model label, e.g. `"auth.user"`
    pub name: String,

    /// Explicit table-name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_table: Option<String>,

    /// Declared fields, in declaration order
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl ModelSpec {
    /// The effective table name: the explicit `db_table` when set,
    /// otherwise the lowercased label with dots replaced by underscores.
    pub fn table_name(&self) -> String {
        self.db_table
            .clone()
            .unwrap_or_else(|| self.name.to_lowercase().replace('.', "_"))
    }
}

/// Ordered collection of registered models.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    models: Vec<ModelSpec>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a model. Registration order is the order the collector
    /// walks models in.
    pub fn register(&mut self, model: ModelSpec) {
        self.models.push(model);
    }

    /// Registered models, in registration order
    pub fn models(&self) -> &[ModelSpec] {
        &self.models
    }

    /// Number of registered models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether no models are registered
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Load a registry from a manifest file.
    ///
    /// `.yaml`/`.yml` files are parsed as YAML; everything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read manifest {}", path.display()), e))?;

        let is_yaml = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s == "yaml" || s == "yml")
            .unwrap_or(false);

        if is_yaml {
            serde_yaml::from_str(&content)
                .map_err(|e| Error::manifest(format!("invalid YAML manifest {}", path.display()), e))
        } else {
            serde_json::from_str(&content)
                .map_err(|e| Error::manifest(format!("invalid JSON manifest {}", path.display()), e))
        }
    }
}
