//! # Facility Registry
//!
//! Saves and reloads facility definitions from a plain text file.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  facilities.txt                                                         │
//! │                                                                         │
//! │  Centro|10|5|5                                                         │
//! │  Norte|7|3|4                                                           │
//! │  ──┬── ─┬ ┬ ┬                                                          │
//! │    │    │ │ └── motorcycle spaces                                      │
//! │    │    │ └──── car spaces (numbered 1..=cars)                         │
//! │    │    └────── capacity                                               │
//! │    └─────────── name (first field, may not contain '|')               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the layout is stored. Occupancy and stays live in memory and start
//! empty whenever a facility is loaded.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parkline_core::validation::validate_facility_name;
use parkline_core::{Facility, VehicleClass};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

const FIELD_SEPARATOR: char = '|';

// =============================================================================
// Record
// =============================================================================

/// One registry line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityRecord {
    pub name: String,
    pub capacity: u32,
    pub car_spaces: u32,
    pub motorcycle_spaces: u32,
}

impl FacilityRecord {
    /// Captures a facility's layout.
    pub fn from_facility(facility: &Facility) -> Self {
        FacilityRecord {
            name: facility.name().to_string(),
            capacity: facility.capacity(),
            car_spaces: facility.count_spaces(VehicleClass::Car) as u32,
            motorcycle_spaces: facility.count_spaces(VehicleClass::Motorcycle) as u32,
        }
    }

    /// Parses one line. `line_no` is 1-based and only used in errors.
    ///
    /// ## Errors
    /// - [`StoreError::Malformed`] for fewer than four fields, an empty name,
    ///   or space counts that don't add up to the capacity
    /// - [`StoreError::InvalidNumber`] for a non-numeric field
    pub fn parse_line(line: &str, line_no: usize) -> StoreResult<Self> {
        let mut fields = line.splitn(4, FIELD_SEPARATOR);
        let name = fields.next().unwrap_or_default();
        let (capacity, cars, motos) = match (fields.next(), fields.next(), fields.next()) {
            (Some(capacity), Some(cars), Some(motos)) => (capacity, cars, motos),
            _ => return Err(StoreError::malformed(line_no, "expected name|capacity|cars|motos")),
        };

        if name.is_empty() {
            return Err(StoreError::malformed(line_no, "empty facility name"));
        }

        let record = FacilityRecord {
            name: name.to_string(),
            capacity: parse_count(capacity, "capacity", line_no)?,
            car_spaces: parse_count(cars, "car spaces", line_no)?,
            motorcycle_spaces: parse_count(motos, "motorcycle spaces", line_no)?,
        };

        if u64::from(record.car_spaces) + u64::from(record.motorcycle_spaces)
            != u64::from(record.capacity)
        {
            return Err(StoreError::malformed(
                line_no,
                format!(
                    "{} car + {} motorcycle spaces don't match capacity {}",
                    record.car_spaces, record.motorcycle_spaces, record.capacity
                ),
            ));
        }

        Ok(record)
    }

    /// Builds the facility, every space empty.
    pub fn into_facility(self) -> Facility {
        Facility::with_layout(self.name, self.capacity, self.car_spaces)
    }
}

impl fmt::Display for FacilityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.name,
            self.capacity,
            self.car_spaces,
            self.motorcycle_spaces,
            sep = FIELD_SEPARATOR
        )
    }
}

fn parse_count(value: &str, field: &str, line_no: usize) -> StoreResult<u32> {
    value.trim().parse().map_err(|_| StoreError::InvalidNumber {
        line: line_no,
        field: field.to_string(),
        value: value.to_string(),
    })
}

// =============================================================================
// Registry
// =============================================================================

/// Reads and appends facility definitions.
///
/// ## Usage
/// ```rust,no_run
/// use parkline_store::FacilityRegistry;
///
/// let registry = FacilityRegistry::new("./data/facilities.txt");
/// for name in registry.names()? {
///     println!("{}", name);
/// }
/// # Ok::<(), parkline_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FacilityRegistry {
    path: PathBuf,
}

impl FacilityRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FacilityRegistry { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the registry file exists and is not empty.
    pub fn has_facilities(&self) -> bool {
        fs::metadata(&self.path)
            .map(|meta| meta.len() > 0)
            .unwrap_or(false)
    }

    /// Appends a facility definition, creating the file and its directory
    /// if needed.
    pub fn save(&self, facility: &Facility) -> StoreResult<()> {
        validate_facility_name(facility.name())?;
        let record = FacilityRecord::from_facility(facility);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;
        writeln!(file, "{}", record).map_err(|e| StoreError::io(&self.path, e))?;

        info!(facility = %record.name, capacity = record.capacity, path = ?self.path, "Facility saved");
        Ok(())
    }

    /// Names of all saved facilities, in file order. A missing file means
    /// no facilities.
    pub fn names(&self) -> StoreResult<Vec<String>> {
        let contents = match self.read()? {
            Some(contents) => contents,
            None => return Ok(Vec::new()),
        };

        let names = contents
            .lines()
            .filter_map(|line| match line.find(FIELD_SEPARATOR) {
                Some(pos) if pos > 0 => Some(line[..pos].to_string()),
                _ => None,
            })
            .collect();
        Ok(names)
    }

    /// Rebuilds the first facility saved under `name`.
    ///
    /// ## Errors
    /// - [`StoreError::FacilityNotFound`] if the file or the name is missing
    /// - [`StoreError::Malformed`] / [`StoreError::InvalidNumber`] if the
    ///   matching line is corrupt
    pub fn load(&self, name: &str) -> StoreResult<Facility> {
        let contents = self
            .read()?
            .ok_or_else(|| StoreError::FacilityNotFound(name.to_string()))?;

        for (index, line) in contents.lines().enumerate() {
            let line_name = line.split(FIELD_SEPARATOR).next().unwrap_or_default();
            if line_name != name {
                continue;
            }

            let record = FacilityRecord::parse_line(line, index + 1).map_err(|err| {
                warn!(facility = name, error = %err, "Corrupt registry line");
                err
            })?;
            debug!(facility = name, line = index + 1, "Facility loaded");
            return Ok(record.into_facility());
        }

        Err(StoreError::FacilityNotFound(name.to_string()))
    }

    fn read(&self) -> StoreResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_registry() -> (TempDir, FacilityRegistry) {
        let dir = TempDir::new().unwrap();
        let registry = FacilityRegistry::new(dir.path().join("data").join("facilities.txt"));
        (dir, registry)
    }

    #[test]
    fn test_record_line_format() {
        let facility = Facility::with_standard_layout("Centro", 10);
        let record = FacilityRecord::from_facility(&facility);
        assert_eq!(record.to_string(), "Centro|10|5|5");
    }

    #[test]
    fn test_parse_line() {
        let record = FacilityRecord::parse_line("Norte|7|3|4", 1).unwrap();
        assert_eq!(
            record,
            FacilityRecord {
                name: "Norte".to_string(),
                capacity: 7,
                car_spaces: 3,
                motorcycle_spaces: 4,
            }
        );
    }

    #[test]
    fn test_parse_line_errors() {
        assert!(matches!(
            FacilityRecord::parse_line("Norte|7|3", 2),
            Err(StoreError::Malformed { line: 2, .. })
        ));
        assert!(matches!(
            FacilityRecord::parse_line("|7|3|4", 1),
            Err(StoreError::Malformed { .. })
        ));
        assert!(matches!(
            FacilityRecord::parse_line("Norte|seven|3|4", 1),
            Err(StoreError::InvalidNumber { ref field, .. }) if field == "capacity"
        ));
        // A stray fifth field ends up in the motorcycle count.
        assert!(matches!(
            FacilityRecord::parse_line("Norte|7|3|4|1", 1),
            Err(StoreError::InvalidNumber { ref field, .. }) if field == "motorcycle spaces"
        ));
        assert!(matches!(
            FacilityRecord::parse_line("Norte|7|3|3", 1),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn test_save_then_load_restores_layout() {
        let (_dir, registry) = test_registry();
        assert!(!registry.has_facilities());

        let original = Facility::with_standard_layout("Centro", 9);
        registry.save(&original).unwrap();
        assert!(registry.has_facilities());

        let loaded = registry.load("Centro").unwrap();
        assert_eq!(loaded, original);
        assert_eq!(loaded.count_spaces(VehicleClass::Car), 4);
        assert_eq!(loaded.count_available(), 9);
    }

    #[test]
    fn test_names_in_file_order() {
        let (_dir, registry) = test_registry();
        assert!(registry.names().unwrap().is_empty());

        registry.save(&Facility::with_standard_layout("Centro", 10)).unwrap();
        registry.save(&Facility::with_standard_layout("Norte", 4)).unwrap();
        assert_eq!(registry.names().unwrap(), vec!["Centro", "Norte"]);
    }

    #[test]
    fn test_names_skip_lines_without_name() {
        let (_dir, registry) = test_registry();
        fs::create_dir_all(registry.path().parent().unwrap()).unwrap();
        fs::write(registry.path(), "Centro|10|5|5\ngarbage\n|3|1|2\nNorte|4|2|2\n").unwrap();
        assert_eq!(registry.names().unwrap(), vec!["Centro", "Norte"]);
    }

    #[test]
    fn test_load_missing() {
        let (_dir, registry) = test_registry();
        assert!(matches!(
            registry.load("Centro"),
            Err(StoreError::FacilityNotFound(_))
        ));

        registry.save(&Facility::with_standard_layout("Centro", 10)).unwrap();
        assert!(matches!(
            registry.load("Sur"),
            Err(StoreError::FacilityNotFound(ref name)) if name == "Sur"
        ));
    }

    #[test]
    fn test_load_corrupt_line_is_an_error() {
        let (_dir, registry) = test_registry();
        fs::create_dir_all(registry.path().parent().unwrap()).unwrap();
        fs::write(registry.path(), "Centro|ten|5|5\n").unwrap();
        assert!(matches!(
            registry.load("Centro"),
            Err(StoreError::InvalidNumber { line: 1, .. })
        ));
    }

    #[test]
    fn test_save_rejects_pipe_in_name() {
        let (_dir, registry) = test_registry();
        let err = registry
            .save(&Facility::with_standard_layout("North|South", 4))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidFacility(_)));
        assert!(!registry.has_facilities());
    }
}
