//! Error types for sysd operations.
//!
//! This module defines the error types used throughout the sysd crates.
//! All errors implement `std::error::Error` via `thiserror`.

use std::io;
use thiserror::Error;

/// Result type alias for sysd operations.
pub type SysdResult<T> = Result<T, SysdError>;

/// Errors that can occur while reading from or writing to the row store.
#[derive(Debug, Error)]
pub enum SysdError {
    /// Row store operation failed.
    #[error("Database operation failed: {operation}: {message}")]
    Database {
        /// The operation that failed (e.g., "commit", "insert").
        operation: String,
        /// Error message.
        message: String,
    },

    /// A row required by the operation does not exist.
    #[error("No row found in table {table}")]
    RowNotFound {
        /// The table name.
        table: String,
    },

    /// Configuration validation error.
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfig {
        /// The field that failed validation.
        field: String,
        /// Error message.
        message: String,
    },

    /// A buffer could not be allocated.
    #[error("Resource exhausted: unable to allocate {what}")]
    ResourceExhausted {
        /// What was being allocated.
        what: String,
    },

    /// Filesystem access failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path being accessed.
        path: String,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// A store snapshot could not be encoded or decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Internal error (unexpected state).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl SysdError {
    /// Creates a database error.
    pub fn database(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Database {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Creates a row not found error.
    pub fn row_not_found(table: impl Into<String>) -> Self {
        Self::RowNotFound {
            table: table.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a resource exhaustion error.
    pub fn resource_exhausted(what: impl Into<String>) -> Self {
        Self::ResourceExhausted { what: what.into() }
    }

    /// Creates an I/O error bound to a path.
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
