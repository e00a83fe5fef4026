//! # Validation Module
//!
//! Plate validation and vehicle classification.
//!
//! ## One Gate, One Result
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  validate_plate("  abc12x ")                                            │
//! │       │                                                                 │
//! │       ├── trim + upper-case ──────────► "ABC12X"                       │
//! │       │                                                                 │
//! │       ├── empty? ─────────────────────► Required                       │
//! │       ├── fewer than 6 chars? ────────► TooShort                       │
//! │       │                                                                 │
//! │       └── last char                                                     │
//! │             ├── letter ───────────────► Motorcycle                     │
//! │             ├── digit ────────────────► Car                            │
//! │             └── anything else ────────► InvalidFormat                  │
//! │                                                                         │
//! │  Result: ClassifiedPlate { plate: "ABC12X", class: Motorcycle }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Length is counted in characters, so accented plates are not penalized for
//! their UTF-8 width.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::VehicleClass;
use crate::MIN_PLATE_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A plate that passed validation, with its class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedPlate {
    /// Normalized plate (trimmed, upper-case).
    pub plate: String,
    pub class: VehicleClass,
}

// =============================================================================
// Plates
// =============================================================================

/// Trims and upper-cases a plate.
///
/// ```rust
/// use parkline_core::validation::normalize_plate;
///
/// assert_eq!(normalize_plate("  abc123 "), "ABC123");
/// ```
pub fn normalize_plate(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Validates a plate and determines its vehicle class in a single pass.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at least six characters after trimming
/// - Last character decides the class: letter ⇒ motorcycle, digit ⇒ car
///
/// ## Example
/// ```rust
/// use parkline_core::validation::validate_plate;
/// use parkline_core::VehicleClass;
///
/// let classified = validate_plate(" xyz999").unwrap();
/// assert_eq!(classified.plate, "XYZ999");
/// assert_eq!(classified.class, VehicleClass::Car);
///
/// assert!(validate_plate("AB12").is_err());
/// assert!(validate_plate("ABC12-").is_err());
/// ```
pub fn validate_plate(raw: &str) -> ValidationResult<ClassifiedPlate> {
    let plate = normalize_plate(raw);

    let last = match plate.chars().last() {
        Some(c) => c,
        None => {
            return Err(ValidationError::Required {
                field: "plate".to_string(),
            })
        }
    };

    if plate.chars().count() < MIN_PLATE_LENGTH {
        return Err(ValidationError::TooShort {
            field: "plate".to_string(),
            min: MIN_PLATE_LENGTH,
        });
    }

    let class = if last.is_alphabetic() {
        VehicleClass::Motorcycle
    } else if last.is_ascii_digit() {
        VehicleClass::Car
    } else {
        return Err(ValidationError::InvalidFormat {
            field: "plate".to_string(),
            reason: format!("must end in a letter or a digit, found '{}'", last),
        });
    };

    Ok(ClassifiedPlate { plate, class })
}

/// Returns only the class of a plate.
///
/// ```rust
/// use parkline_core::validation::classify;
/// use parkline_core::VehicleClass;
///
/// assert_eq!(classify("MOT12A").unwrap(), VehicleClass::Motorcycle);
/// ```
pub fn classify(raw: &str) -> ValidationResult<VehicleClass> {
    validate_plate(raw).map(|classified| classified.class)
}

// =============================================================================
// Facility Definitions
// =============================================================================

/// Validates a facility name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must not contain `|`, the registry field separator
///
/// ## Returns
/// The trimmed name.
pub fn validate_facility_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "facility name".to_string(),
        });
    }

    if name.contains('|') {
        return Err(ValidationError::InvalidFormat {
            field: "facility name".to_string(),
            reason: "must not contain '|'".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates a facility capacity. Must be positive.
pub fn validate_capacity(capacity: i64) -> ValidationResult<u32> {
    if capacity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "capacity".to_string(),
        });
    }

    u32::try_from(capacity).map_err(|_| ValidationError::InvalidFormat {
        field: "capacity".to_string(),
        reason: format!("must be at most {}", u32::MAX),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_plates_rejected() {
        for plate in ["", "   ", "A", "AB1", "ABC12", "  ABC12  "] {
            assert!(validate_plate(plate).is_err(), "accepted {:?}", plate);
        }

        assert_eq!(
            validate_plate("   "),
            Err(ValidationError::Required {
                field: "plate".to_string()
            })
        );
        assert_eq!(
            validate_plate("ABC12"),
            Err(ValidationError::TooShort {
                field: "plate".to_string(),
                min: 6
            })
        );
    }

    #[test]
    fn test_digit_suffix_is_car() {
        for plate in ["ABC123", "xyz999", "  AAA000 ", "123456", "BOG-5540"] {
            assert_eq!(classify(plate).unwrap(), VehicleClass::Car, "{}", plate);
        }
    }

    #[test]
    fn test_letter_suffix_is_motorcycle() {
        for plate in ["MOT12A", "abc12d", "123456Z", "ÑANDU1Ñ"] {
            assert_eq!(classify(plate).unwrap(), VehicleClass::Motorcycle, "{}", plate);
        }
    }

    #[test]
    fn test_unsupported_suffix_rejected() {
        let err = validate_plate("ABC12-").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert!(validate_plate("ABC12.").is_err());
    }

    #[test]
    fn test_length_counts_characters() {
        // Six characters, eight bytes.
        assert!(validate_plate("ÑÑABC1").is_ok());
    }

    #[test]
    fn test_plate_is_normalized() {
        let classified = validate_plate("  abc12d ").unwrap();
        assert_eq!(classified.plate, "ABC12D");
    }

    #[test]
    fn test_validate_facility_name() {
        assert_eq!(validate_facility_name("  Centro ").unwrap(), "Centro");
        assert!(validate_facility_name("").is_err());
        assert!(validate_facility_name("North|South").is_err());
    }

    #[test]
    fn test_validate_capacity() {
        assert_eq!(validate_capacity(10).unwrap(), 10);
        assert!(validate_capacity(0).is_err());
        assert!(validate_capacity(-3).is_err());
        assert!(validate_capacity(i64::MAX).is_err());
    }
}
