//! # Facility Commands
//!
//! Creating, saving and reloading facility layouts.
//!
//! ## Startup Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  registry has facilities?                                               │
//! │        │                                                                │
//! │   yes ─┴──► list_facilities ──► pick one ──► load_facility              │
//! │        │                                                                │
//! │   no / "create"                                                         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  create_facility(name, capacity) ──► save_facility (failure = warning) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use parkline_core::validation::{validate_capacity, validate_facility_name};
use parkline_core::{Facility, VehicleClass};
use parkline_store::Store;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;

/// Facility layout as shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityResponse {
    pub name: String,
    pub capacity: u32,
    pub car_spaces: usize,
    pub motorcycle_spaces: usize,
}

impl From<&Facility> for FacilityResponse {
    fn from(facility: &Facility) -> Self {
        FacilityResponse {
            name: facility.name().to_string(),
            capacity: facility.capacity(),
            car_spaces: facility.count_spaces(VehicleClass::Car),
            motorcycle_spaces: facility.count_spaces(VehicleClass::Motorcycle),
        }
    }
}

/// Builds a new facility with the standard layout: the first half of the
/// spaces (rounded down) for cars, the rest for motorcycles.
///
/// ## Errors
/// - `VALIDATION_ERROR`: empty name, name containing `|`, capacity ≤ 0
pub fn create_facility(name: &str, capacity: i64) -> Result<Facility, ApiError> {
    debug!(name = %name, capacity, "create_facility command");

    let name = validate_facility_name(name)?;
    let capacity = validate_capacity(capacity)?;
    let facility = Facility::with_standard_layout(name, capacity);

    info!(
        facility = %facility.name(),
        capacity,
        cars = facility.count_spaces(VehicleClass::Car),
        motorcycles = facility.count_spaces(VehicleClass::Motorcycle),
        "Facility created"
    );
    Ok(facility)
}

/// Appends the facility layout to the registry.
pub fn save_facility(store: &Store, facility: &Facility) -> Result<(), ApiError> {
    debug!(facility = %facility.name(), "save_facility command");
    store.registry().save(facility)?;
    Ok(())
}

/// Rebuilds a saved facility, every space empty.
///
/// ## Errors
/// - `NOT_FOUND`: no facility saved under that name
/// - `STORAGE_ERROR`: the registry can't be read or its line is corrupt
pub fn load_facility(store: &Store, name: &str) -> Result<Facility, ApiError> {
    debug!(name = %name, "load_facility command");
    let facility = store.registry().load(name)?;
    info!(facility = %facility.name(), capacity = facility.capacity(), "Facility loaded");
    Ok(facility)
}

/// Names of saved facilities, in the order they were saved.
pub fn list_facilities(store: &Store) -> Result<Vec<String>, ApiError> {
    debug!("list_facilities command");
    Ok(store.registry().names()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use parkline_store::StoreConfig;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(StoreConfig::new(dir.path()));
        (dir, store)
    }

    #[test]
    fn test_create_standard_layout() {
        let facility = create_facility("  Centro ", 7).unwrap();
        let response = FacilityResponse::from(&facility);
        assert_eq!(
            response,
            FacilityResponse {
                name: "Centro".to_string(),
                capacity: 7,
                car_spaces: 3,
                motorcycle_spaces: 4,
            }
        );
    }

    #[test]
    fn test_create_rejects_bad_input() {
        assert_eq!(create_facility("", 10).unwrap_err().code, ErrorCode::ValidationError);
        assert_eq!(create_facility("Centro", 0).unwrap_err().code, ErrorCode::ValidationError);
        assert_eq!(create_facility("Centro", -3).unwrap_err().code, ErrorCode::ValidationError);
        assert_eq!(create_facility("A|B", 10).unwrap_err().code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_save_list_load() {
        let (_dir, store) = test_store();
        assert!(list_facilities(&store).unwrap().is_empty());

        let facility = create_facility("Centro", 10).unwrap();
        save_facility(&store, &facility).unwrap();
        save_facility(&store, &create_facility("Norte", 4).unwrap()).unwrap();

        assert_eq!(list_facilities(&store).unwrap(), vec!["Centro", "Norte"]);
        assert_eq!(load_facility(&store, "Centro").unwrap(), facility);

        let err = load_facility(&store, "Sur").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Facility not found: Sur");
    }
}
