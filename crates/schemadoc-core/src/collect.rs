//! Schema collection: walk registered models into field rows
//!
//! The collector is the first half of the pipeline. It visits every
//! registered model (optionally filtered by a predicate) in registry
//! order, and every declared field in declaration order, producing one
//! [`FieldRow`] per field. Introspection failures propagate; there is no
//! recovery.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::{FieldDefault, FieldSpec, ModelSpec, Registry};
use crate::typemap::{self, Backend};

/// Best-effort label for a callable default whose name is not introspectable.
pub const CALLABLE_LABEL: &str = "<callable>";

/// One documented column: the unit both renderers consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRow {
    /// Owning table name
    pub table: String,
    /// Column name
    pub name: String,
    /// Primary-key flag
    pub primary_key: bool,
    /// Backend column type; empty when the internal type is unmapped
    pub type_label: String,
    /// Whether the column accepts NULL
    pub nullable: bool,
    /// Normalized default value; `None` when no default is declared
    pub default: Option<String>,
    /// Uniqueness flag
    pub unique: bool,
    /// Human description
    pub description: String,
}

/// Collect one row per declared field of every registered model.
pub fn collect_rows(registry: &Registry, backend: Backend) -> Result<Vec<FieldRow>> {
    collect_rows_filtered(registry, backend, |_| true)
}

/// Collect rows for the models accepted by `filter`.
///
/// Rows come out in registry order, then field-declaration order.
/// Filtering the model set down to nothing yields an empty vector.
pub fn collect_rows_filtered<F>(
    registry: &Registry,
    backend: Backend,
    filter: F,
) -> Result<Vec<FieldRow>>
where
    F: Fn(&ModelSpec) -> bool,
{
    let mut rows = Vec::new();

    for model in registry.models().iter().filter(|m| filter(m)) {
        let table = model.table_name();
        debug!(
            model = %model.name,
            table = %table,
            fields = model.fields.len(),
            "collecting model"
        );

        for field in &model.fields {
            rows.push(field_row(&table, field, backend)?);
        }
    }

    Ok(rows)
}

fn field_row(table: &str, field: &FieldSpec, backend: Backend) -> Result<FieldRow> {
    let type_label = match backend.type_template(&field.internal_type) {
        Some(template) => typemap::expand_template(template, &field.attrs).map_err(|attribute| {
            Error::MissingTypeAttribute {
                table: table.to_string(),
                field: field.name.clone(),
                attribute,
            }
        })?,
        None => String::new(),
    };

    Ok(FieldRow {
        table: table.to_string(),
        name: field.name.clone(),
        primary_key: field.primary_key,
        type_label,
        nullable: field.null,
        default: normalize_default(field.default.as_ref()),
        unique: field.unique,
        description: field
            .description
            .clone()
            .unwrap_or_else(|| field.name.replace('_', " ")),
    })
}

/// Normalize a declared default into its documented string form.
///
/// Absent defaults and literal nulls become `None`; literal strings pass
/// through unquoted; other literals use their display form; callables
/// report their name, or [`CALLABLE_LABEL`] when no name is known.
fn normalize_default(default: Option<&FieldDefault>) -> Option<String> {
    match default {
        None => None,
        Some(FieldDefault::Callable { callable }) => Some(
            callable
                .clone()
                .unwrap_or_else(|| CALLABLE_LABEL.to_string()),
        ),
        Some(FieldDefault::Literal(value)) => match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry(value: serde_json::Value) -> Registry {
        serde_json::from_value(value).expect("registry should deserialize")
    }

    fn sample_registry() -> Registry {
        registry(json!({
            "models": [
                {
                    "name": "shop.Order",
                    "db_table": "orders",
                    "fields": [
                        {"name": "id", "type": "auto", "primary_key": true, "unique": true},
                        {"name": "status", "type": "char", "default": "draft",
                         "attrs": {"max_length": 32}},
                        {"name": "placed_at", "type": "datetime", "null": true,
                         "description": "time the order was placed"}
                    ]
                },
                {
                    "name": "shop.Customer",
                    "fields": [
                        {"name": "id", "type": "auto", "primary_key": true, "unique": true},
                        {"name": "email", "type": "char", "unique": true,
                         "attrs": {"max_length": 254}}
                    ]
                }
            ]
        }))
    }

    #[test]
    fn test_one_row_per_field() {
        let rows = collect_rows(&sample_registry(), Backend::Mysql).unwrap();
        assert_eq!(rows.len(), 5);

        let tables: Vec<&str> = rows.iter().map(|r| r.table.as_str()).collect();
        assert_eq!(
            tables,
            ["orders", "orders", "orders", "shop_customer", "shop_customer"]
        );
    }

    #[test]
    fn test_filtered_to_empty_set() {
        let rows = collect_rows_filtered(&sample_registry(), Backend::Mysql, |_| false).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_filter_by_label() {
        let rows =
            collect_rows_filtered(&sample_registry(), Backend::Mysql, |m| {
                m.name.ends_with("Customer")
            })
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.table == "shop_customer"));
    }

    #[test]
    fn test_type_labels() {
        let rows = collect_rows(&sample_registry(), Backend::Mysql).unwrap();
        assert_eq!(rows[0].type_label, "integer AUTO_INCREMENT");
        assert_eq!(rows[1].type_label, "varchar(32)");
        assert_eq!(rows[2].type_label, "datetime(6)");
    }

    #[test]
    fn test_unmapped_type_yields_empty_label() {
        let reg = registry(json!({
            "models": [
                {"name": "gis.Shape", "fields": [{"name": "outline", "type": "geometry"}]}
            ]
        }));
        let rows = collect_rows(&reg, Backend::Mysql).unwrap();
        assert_eq!(rows[0].type_label, "");
    }

    #[test]
    fn test_missing_template_attribute_is_an_error() {
        let reg = registry(json!({
            "models": [
                {"name": "shop.Order", "fields": [{"name": "status", "type": "char"}]}
            ]
        }));
        let err = collect_rows(&reg, Backend::Mysql).unwrap_err();
        match err {
            Error::MissingTypeAttribute {
                table,
                field,
                attribute,
            } => {
                assert_eq!(table, "shop_order");
                assert_eq!(field, "status");
                assert_eq!(attribute, "max_length");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_normalization() {
        let reg = registry(json!({
            "models": [
                {
                    "name": "app.Thing",
                    "fields": [
                        {"name": "plain", "type": "integer"},
                        {"name": "named", "type": "char", "default": "draft",
                         "attrs": {"max_length": 8}},
                        {"name": "count", "type": "integer", "default": 0},
                        {"name": "active", "type": "boolean", "default": true},
                        {"name": "nothing", "type": "integer", "default": null},
                        {"name": "token", "type": "uuid", "default": {"callable": "uuid4"}},
                        {"name": "blob", "type": "uuid", "default": {"callable": null}}
                    ]
                }
            ]
        }));
        let rows = collect_rows(&reg, Backend::Mysql).unwrap();
        assert_eq!(rows[0].default, None);
        assert_eq!(rows[1].default, Some("draft".to_string()));
        assert_eq!(rows[2].default, Some("0".to_string()));
        assert_eq!(rows[3].default, Some("true".to_string()));
        assert_eq!(rows[4].default, None);
        assert_eq!(rows[5].default, Some("uuid4".to_string()));
        assert_eq!(rows[6].default, Some(CALLABLE_LABEL.to_string()));
    }

    #[test]
    fn test_description_fallback() {
        let rows = collect_rows(&sample_registry(), Backend::Mysql).unwrap();
        assert_eq!(rows[2].description, "time the order was placed");
        // placed_at has an explicit description; the others fall back
        assert_eq!(rows[1].description, "status");

        let reg = registry(json!({
            "models": [
                {"name": "a.B", "fields": [{"name": "created_at", "type": "datetime"}]}
            ]
        }));
        let rows = collect_rows(&reg, Backend::Mysql).unwrap();
        assert_eq!(rows[0].description, "created at");
    }

    #[test]
    fn test_backend_changes_labels() {
        let rows = collect_rows(&sample_registry(), Backend::Postgres).unwrap();
        assert_eq!(rows[0].type_label, "serial");
        assert_eq!(rows[2].type_label, "timestamp with time zone");
    }
}
