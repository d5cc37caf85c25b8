//! Error types for the schemadoc core library
//!
//! This module defines the error handling system for schemadoc, using
//! thiserror for ergonomic error definitions and anyhow for heterogeneous
//! parse sources. There is no recovery or retry anywhere in the crate:
//! every failure propagates to the caller as one of these variants.

use thiserror::Error;

/// Main error type for schemadoc operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO failures while reading manifests or writing artifacts
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Model manifest could not be parsed
    #[error("Manifest error: {message}")]
    Manifest {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    /// A backend name that no type-mapping table exists for
    #[error("Unknown backend '{name}' (expected mysql, postgres or sqlite)")]
    UnknownBackend { name: String },

    /// A column-type template referenced an attribute the field does not declare
    #[error("Field '{table}.{field}': column type template references missing attribute '{attribute}'")]
    MissingTypeAttribute {
        table: String,
        field: String,
        attribute: String,
    },

    /// Spreadsheet serialization errors
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// Document serialization errors
    #[error("Document error: {message}")]
    Document { message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an IO error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a manifest error from any parse failure
    pub fn manifest(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Manifest {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Create a document serialization error
    pub fn document(message: impl Into<String>) -> Self {
        Self::Document {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownBackend {
            name: "oracle".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown backend 'oracle' (expected mysql, postgres or sqlite)"
        );

        let err = Error::MissingTypeAttribute {
            table: "users".to_string(),
            field: "email".to_string(),
            attribute: "max_length".to_string(),
        };
        assert!(err.to_string().contains("users.email"));
        assert!(err.to_string().contains("max_length"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = Error::io(
            "failed to read manifest",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.source().is_some());
    }
}
