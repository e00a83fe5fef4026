//! # Store Error Types
//!
//! Error types for registry and report file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / ParseIntError                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds path, line and field context          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in console) ← Generic message, detail logged                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed load never hands back a partially built facility: the caller
//! gets either a complete `Facility` or one of these errors.

use std::path::PathBuf;

use parkline_core::ValidationError;
use thiserror::Error;

/// Registry and report failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a file failed.
    ///
    /// ## When This Occurs
    /// - Directory can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A registry line doesn't have the expected shape.
    #[error("Malformed registry line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// A numeric registry field didn't parse.
    #[error("Invalid number in registry line {line}: {field} = '{value}'")]
    InvalidNumber {
        line: usize,
        field: String,
        value: String,
    },

    /// No registry line carries this facility name.
    #[error("Facility not found: {0}")]
    FacilityNotFound(String),

    /// The facility definition is not storable (e.g. a name containing `|`).
    #[error("Invalid facility: {0}")]
    InvalidFacility(#[from] ValidationError),
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a Malformed error.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        StoreError::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::InvalidNumber {
            line: 3,
            field: "capacity".to_string(),
            value: "ten".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid number in registry line 3: capacity = 'ten'"
        );

        let err = StoreError::io(
            "/tmp/facilities.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error on /tmp/facilities.txt: denied");
    }
}
