//! # API Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Parkline                               │
//! │                                                                         │
//! │  Menu                        Commands                                   │
//! │  ────                        ────────                                   │
//! │                                                                         │
//! │  "2. Register exit"                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  File Error? ───── StoreError::Io { .. } ───────────┐            │  │
//! │  │         │                                           │            │  │
//! │  │         ▼                                           ▼            │  │
//! │  │  Rule Broken? ──── CoreError::VehicleNotFound ──── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  Text mode:  "Error: Vehicle not found: ABC123"                         │
//! │  JSON mode:  {"code":"NOT_FOUND","message":"Vehicle not found: ABC123"} │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use parkline_core::{CoreError, ValidationError};
use parkline_store::StoreError;
use serde::Serialize;

/// Error returned from console commands.
///
/// ## Serialization
/// This is what `--json` mode prints when a command fails:
/// ```json
/// {
///   "code": "NO_SPACE_AVAILABLE",
///   "message": "No CAR spaces available"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for scripting
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Vehicle or facility not found
    NotFound,

    /// Input validation failed (plate, name, capacity)
    ValidationError,

    /// Vehicle already has an open stay
    AlreadyParked,

    /// No free space for the vehicle's class
    NoSpaceAvailable,

    /// Registry or report file operation failed
    StorageError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::FacilityNotFound(name) => ApiError::not_found("Facility", &name),
            StoreError::InvalidFacility(e) => ApiError::validation(e.to_string()),
            StoreError::Io { path, source } => {
                // Log the actual error but return a generic message
                tracing::error!(path = ?path, error = %source, "File operation failed");
                ApiError::new(ErrorCode::StorageError, "File operation failed")
            }
            err @ (StoreError::Malformed { .. } | StoreError::InvalidNumber { .. }) => {
                tracing::error!("Corrupt facility registry: {}", err);
                ApiError::new(ErrorCode::StorageError, "Facility registry is corrupt")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidIdentifier(e) => ApiError::validation(format!("Invalid plate: {}", e)),
            CoreError::DuplicateActiveVehicle { plate } => ApiError::new(
                ErrorCode::AlreadyParked,
                format!("Vehicle {} is already parked", plate),
            ),
            CoreError::NoSpaceAvailable { class } => ApiError::new(
                ErrorCode::NoSpaceAvailable,
                format!("No {} spaces available", class),
            ),
            CoreError::VehicleNotFound(plate) => ApiError::not_found("Vehicle", &plate),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
