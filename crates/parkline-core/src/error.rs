//! # Error Types
//!
//! Domain-specific error types for parkline-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  parkline-core errors (this file)                                      │
//! │  ├── CoreError        - Entry/exit rule violations                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  parkline-store errors (separate crate)                                │
//! │  └── StoreError       - Registry and report file failures              │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── ApiError         - What the operator sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Operator               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is local and recoverable. A rejected entry or exit leaves
//! the ledger and the facility exactly as they were.

use thiserror::Error;

use crate::types::VehicleClass;

// =============================================================================
// Core Error
// =============================================================================

/// Entry and exit failures reported by the [`StayLedger`](crate::StayLedger).
#[derive(Debug, Error)]
pub enum CoreError {
    /// The plate failed validation or has no supported classification.
    ///
    /// ## When This Occurs
    /// - Plate is empty or shorter than six characters after trimming
    /// - Last character is neither a letter nor a digit (e.g. `"ABC12-"`)
    #[error("Invalid plate: {0}")]
    InvalidIdentifier(#[from] ValidationError),

    /// The vehicle already has an open stay.
    ///
    /// ## User Workflow
    /// ```text
    /// register_entry("ABC123")  → Stay #1, space 1
    ///      │
    ///      ▼
    /// register_entry("abc123 ") → normalized to "ABC123"
    ///      │
    ///      ▼
    /// DuplicateActiveVehicle { plate: "ABC123" }
    /// ```
    #[error("Vehicle {plate} is already parked")]
    DuplicateActiveVehicle { plate: String },

    /// Every space for this class is taken.
    #[error("No {class} spaces available")]
    NoSpaceAvailable { class: VehicleClass },

    /// Exit requested for a plate with no open stay.
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. unsupported trailing character).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NoSpaceAvailable {
            class: VehicleClass::Motorcycle,
        };
        assert_eq!(err.to_string(), "No MOTORCYCLE spaces available");

        let err = CoreError::DuplicateActiveVehicle {
            plate: "ABC123".to_string(),
        };
        assert_eq!(err.to_string(), "Vehicle ABC123 is already parked");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "plate".to_string(),
        };
        assert_eq!(err.to_string(), "plate is required");

        let err = ValidationError::TooShort {
            field: "plate".to_string(),
            min: 6,
        };
        assert_eq!(err.to_string(), "plate must be at least 6 characters");
    }

    #[test]
    fn test_validation_converts_to_invalid_identifier() {
        let validation_err = ValidationError::Required {
            field: "plate".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidIdentifier(_)));
        assert_eq!(core_err.to_string(), "Invalid plate: plate is required");
    }
}
