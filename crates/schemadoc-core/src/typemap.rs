//! Backend type-mapping tables
//!
//! Each backend maps internal type identifiers to column-type templates.
//! Templates may carry `{attr}` placeholders that are substituted from a
//! field's attribute map; a placeholder with no matching attribute is an
//! introspection failure and propagates to the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Database backend whose column types are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Mysql,
    Postgres,
    Sqlite,
}

impl Backend {
    /// Lowercase backend name, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }

    /// Column-type template for an internal type identifier.
    ///
    /// Returns `None` for identifiers the backend has no mapping for;
    /// the collector turns that into an empty type label.
    pub fn type_template(&self, internal_type: &str) -> Option<&'static str> {
        match self {
            Self::Mysql => mysql_template(internal_type),
            Self::Postgres => postgres_template(internal_type),
            Self::Sqlite => sqlite_template(internal_type),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(Self::Mysql),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(Error::UnknownBackend {
                name: other.to_string(),
            }),
        }
    }
}

fn mysql_template(internal_type: &str) -> Option<&'static str> {
    Some(match internal_type {
        "auto" => "integer AUTO_INCREMENT",
        "big_auto" => "bigint AUTO_INCREMENT",
        "small_auto" => "smallint AUTO_INCREMENT",
        "binary" => "longblob",
        "boolean" => "bool",
        "char" => "varchar({max_length})",
        "date" => "date",
        "datetime" => "datetime(6)",
        "decimal" => "numeric({max_digits}, {decimal_places})",
        "duration" => "bigint",
        "file" => "varchar({max_length})",
        "float" => "double precision",
        "integer" => "integer",
        "big_integer" => "bigint",
        "generic_ip" => "char(39)",
        "json" => "json",
        "one_to_one" | "foreign_key" => "integer",
        "positive_big_integer" => "bigint UNSIGNED",
        "positive_integer" => "integer UNSIGNED",
        "positive_small_integer" => "smallint UNSIGNED",
        "slug" => "varchar({max_length})",
        "small_integer" => "smallint",
        "text" => "longtext",
        "time" => "time(6)",
        "uuid" => "char(32)",
        _ => return None,
    })
}

fn postgres_template(internal_type: &str) -> Option<&'static str> {
    Some(match internal_type {
        "auto" => "serial",
        "big_auto" => "bigserial",
        "small_auto" => "smallserial",
        "binary" => "bytea",
        "boolean" => "boolean",
        "char" => "varchar({max_length})",
        "date" => "date",
        "datetime" => "timestamp with time zone",
        "decimal" => "numeric({max_digits}, {decimal_places})",
        "duration" => "interval",
        "file" => "varchar({max_length})",
        "float" => "double precision",
        "integer" => "integer",
        "big_integer" => "bigint",
        "generic_ip" => "inet",
        "json" => "jsonb",
        "one_to_one" | "foreign_key" => "integer",
        "positive_big_integer" => "bigint",
        "positive_integer" => "integer",
        "positive_small_integer" => "smallint",
        "slug" => "varchar({max_length})",
        "small_integer" => "smallint",
        "text" => "text",
        "time" => "time",
        "uuid" => "uuid",
        _ => return None,
    })
}

fn sqlite_template(internal_type: &str) -> Option<&'static str> {
    Some(match internal_type {
        "auto" | "big_auto" | "small_auto" => "integer",
        "binary" => "BLOB",
        "boolean" => "bool",
        "char" => "varchar({max_length})",
        "date" => "date",
        "datetime" => "datetime",
        "decimal" => "decimal",
        "duration" => "bigint",
        "file" => "varchar({max_length})",
        "float" => "real",
        "integer" => "integer",
        "big_integer" => "bigint",
        "generic_ip" => "char(39)",
        "json" => "text",
        "one_to_one" | "foreign_key" => "integer",
        "positive_big_integer" => "bigint unsigned",
        "positive_integer" => "integer unsigned",
        "positive_small_integer" => "smallint unsigned",
        "slug" => "varchar({max_length})",
        "small_integer" => "smallint",
        "text" => "text",
        "time" => "time",
        "uuid" => "char(32)",
        _ => return None,
    })
}

/// Substitute `{attr}` placeholders in a template from an attribute map.
///
/// Attribute values render as bare strings (no quoting). On a missing
/// attribute the placeholder key is returned as the error value; the
/// collector wraps it with table/field context. An unterminated `{` is
/// emitted literally.
pub(crate) fn expand_template(
    template: &str,
    attrs: &BTreeMap<String, serde_json::Value>,
) -> Result<String, String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match attrs.get(key) {
                    Some(value) => out.push_str(&attr_text(value)),
                    None => return Err(key.to_string()),
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                return Ok(out);
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

fn attr_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
