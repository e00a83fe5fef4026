//! # Domain Types
//!
//! Core domain types used throughout Parkline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Vehicle      │   │     Space       │   │      Stay       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  plate          │   │  number         │   │  id (#n)        │       │
//! │  │  class          │   │  class          │   │  vehicle        │       │
//! │  │  entered_at     │   │  occupant?      │   │  space_number   │       │
//! │  └─────────────────┘   └─────────────────┘   │  exited_at?     │       │
//! │                                              │  hours? / fare  │       │
//! │  ┌─────────────────┐                         └─────────────────┘       │
//! │  │  VehicleClass   │                                                   │
//! │  │  Car            │   A Stay is active until exited_at is set,        │
//! │  │  Motorcycle     │   then it is frozen in the completed history.     │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

/// Timestamp layout used in receipts and listings.
pub const DISPLAY_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

// =============================================================================
// Vehicle Class
// =============================================================================

/// The kind of vehicle, which decides the space type and the hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleClass {
    /// Plates ending in a digit.
    Car,
    /// Plates ending in a letter.
    Motorcycle,
}

impl VehicleClass {
    /// Every class, in the order spaces are laid out.
    pub const ALL: [VehicleClass; 2] = [VehicleClass::Car, VehicleClass::Motorcycle];

    /// Upper-case label used in listings and the registry file.
    pub const fn label(&self) -> &'static str {
        match self {
            VehicleClass::Car => "CAR",
            VehicleClass::Motorcycle => "MOTORCYCLE",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Vehicle
// =============================================================================

/// A vehicle inside the facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Normalized plate (trimmed, upper-case).
    pub plate: String,
    pub class: VehicleClass,
    pub entered_at: DateTime<Utc>,
}

impl Vehicle {
    /// One-line description for listings, formatted per class.
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use parkline_core::{Vehicle, VehicleClass};
    ///
    /// let vehicle = Vehicle {
    ///     plate: "MOT12A".to_string(),
    ///     class: VehicleClass::Motorcycle,
    ///     entered_at: Utc.with_ymd_and_hms(2026, 10, 18, 8, 30, 0).unwrap(),
    /// };
    /// assert_eq!(vehicle.describe(), "MOTORCYCLE - Plate: MOT12A - Entry: 18/10/2026 08:30:00");
    /// ```
    pub fn describe(&self) -> String {
        let entered = self.entered_at.format(DISPLAY_TIME_FORMAT);
        match self.class {
            VehicleClass::Car => format!("CAR - Plate: {} - Entry: {}", self.plate, entered),
            VehicleClass::Motorcycle => {
                format!("MOTORCYCLE - Plate: {} - Entry: {}", self.plate, entered)
            }
        }
    }
}

// =============================================================================
// Space
// =============================================================================

/// A numbered parking space reserved for one vehicle class.
///
/// ## Invariant
/// A space is occupied exactly when it holds an occupant. There is no
/// separate flag to drift out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub number: u32,
    pub class: VehicleClass,
    occupant: Option<Vehicle>,
}

impl Space {
    /// Creates an empty space.
    pub fn new(number: u32, class: VehicleClass) -> Self {
        Space {
            number,
            class,
            occupant: None,
        }
    }

    /// Returns true while a vehicle is parked here.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Returns true if the space is free.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.occupant.is_none()
    }

    /// The vehicle parked here, if any.
    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    pub(crate) fn occupy(&mut self, vehicle: Vehicle) {
        self.occupant = Some(vehicle);
    }

    pub(crate) fn release(&mut self) -> Option<Vehicle> {
        self.occupant.take()
    }

    /// Status line, e.g. `Space #3 [CAR] - OCCUPIED - Plate: ABC123`.
    pub fn describe(&self) -> String {
        match &self.occupant {
            Some(vehicle) => format!(
                "Space #{} [{}] - OCCUPIED - Plate: {}",
                self.number, self.class, vehicle.plate
            ),
            None => format!("Space #{} [{}] - AVAILABLE", self.number, self.class),
        }
    }
}

// =============================================================================
// Stay
// =============================================================================

/// Sequential ticket number. Never reused within a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StayId(pub u64);

impl fmt::Display for StayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One vehicle's visit, from entry until exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    pub id: StayId,
    pub vehicle: Vehicle,
    /// Number of the space assigned at entry.
    pub space_number: u32,
    pub entered_at: DateTime<Utc>,
    /// Set when the stay is closed.
    pub exited_at: Option<DateTime<Utc>>,
    /// Billed whole hours, set when the stay is closed.
    pub hours: Option<i64>,
    /// Zero until the stay is closed.
    pub fare: Money,
}

impl Stay {
    /// Returns true once the vehicle has left.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.exited_at.is_some()
    }

    pub(crate) fn close(&mut self, exited_at: DateTime<Utc>, hours: i64, fare: Money) {
        self.exited_at = Some(exited_at);
        self.hours = Some(hours);
        self.fare = fare;
    }

    /// Exit receipt printed to the operator. `format_money` renders the fare.
    ///
    /// ## Layout
    /// ```text
    /// ========== PARKING RECEIPT ==========
    /// Ticket: #1
    /// Plate: ABC123
    /// Class: CAR
    /// Space: 1
    /// Entry: 18/10/2026 08:00:00
    /// Exit: 18/10/2026 09:10:00
    /// Time: 2 hour(s)
    /// Fare: $6000.00
    /// =====================================
    /// ```
    pub fn receipt(&self, format_money: impl Fn(Money) -> String) -> String {
        let mut out = String::new();
        out.push_str("========== PARKING RECEIPT ==========\n");
        out.push_str(&format!("Ticket: {}\n", self.id));
        out.push_str(&format!("Plate: {}\n", self.vehicle.plate));
        out.push_str(&format!("Class: {}\n", self.vehicle.class));
        out.push_str(&format!("Space: {}\n", self.space_number));
        out.push_str(&format!("Entry: {}\n", self.entered_at.format(DISPLAY_TIME_FORMAT)));
        match self.exited_at {
            Some(exited_at) => {
                out.push_str(&format!("Exit: {}\n", exited_at.format(DISPLAY_TIME_FORMAT)))
            }
            None => out.push_str("Exit: -\n"),
        }
        if let Some(hours) = self.hours {
            out.push_str(&format!("Time: {} hour(s)\n", hours));
        }
        out.push_str(&format!("Fare: {}\n", format_money(self.fare)));
        out.push_str("=====================================\n");
        out
    }
}

// =============================================================================
// Reports
// =============================================================================

/// Free/taken counts for one vehicle class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassOccupancy {
    pub class: VehicleClass,
    pub total: usize,
    pub occupied: usize,
    pub available: usize,
}

/// Snapshot of space usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancySummary {
    pub facility_name: String,
    pub capacity: usize,
    pub occupied: usize,
    pub available: usize,
    /// One entry per class, in [`VehicleClass::ALL`] order.
    pub by_class: Vec<ClassOccupancy>,
}

/// Aggregate report combining facility counts with stay history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyReport {
    pub facility_name: String,
    pub capacity: usize,
    pub occupied: usize,
    pub available: usize,
    /// `occupied * 100 / capacity`; 0.0 for a zero-capacity facility.
    pub percent_occupied: f64,
    pub active_count: usize,
    pub completed_count: usize,
    /// Sum of fares across completed stays.
    pub revenue: Money,
}

/// One row of the rate sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyRate {
    pub class: VehicleClass,
    pub per_hour: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_vehicle(plate: &str, class: VehicleClass) -> Vehicle {
        Vehicle {
            plate: plate.to_string(),
            class,
            entered_at: Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_vehicle_class_serializes_upper_case() {
        let json = serde_json::to_string(&VehicleClass::Motorcycle).unwrap();
        assert_eq!(json, "\"MOTORCYCLE\"");

        let parsed: VehicleClass = serde_json::from_str("\"CAR\"").unwrap();
        assert_eq!(parsed, VehicleClass::Car);
    }

    #[test]
    fn test_space_occupancy_follows_occupant() {
        let mut space = Space::new(3, VehicleClass::Car);
        assert!(space.is_available());
        assert_eq!(space.describe(), "Space #3 [CAR] - AVAILABLE");

        space.occupy(test_vehicle("ABC123", VehicleClass::Car));
        assert!(space.is_occupied());
        assert_eq!(space.occupant().map(|v| v.plate.as_str()), Some("ABC123"));
        assert_eq!(space.describe(), "Space #3 [CAR] - OCCUPIED - Plate: ABC123");

        let released = space.release();
        assert!(released.is_some());
        assert!(space.is_available());
        assert!(space.occupant().is_none());
    }

    #[test]
    fn test_vehicle_describe_per_class() {
        let car = test_vehicle("ABC123", VehicleClass::Car);
        assert_eq!(car.describe(), "CAR - Plate: ABC123 - Entry: 18/10/2026 08:00:00");
    }

    #[test]
    fn test_receipt_for_closed_stay() {
        let vehicle = test_vehicle("ABC123", VehicleClass::Car);
        let mut stay = Stay {
            id: StayId(7),
            entered_at: vehicle.entered_at,
            vehicle,
            space_number: 2,
            exited_at: None,
            hours: None,
            fare: Money::zero(),
        };
        assert!(!stay.is_closed());

        stay.close(
            Utc.with_ymd_and_hms(2026, 10, 18, 9, 10, 0).unwrap(),
            2,
            Money::from_major(6000),
        );
        assert!(stay.is_closed());

        let receipt = stay.receipt(|fare| fare.to_string());
        assert!(receipt.contains("Ticket: #7"));
        assert!(receipt.contains("Space: 2"));
        assert!(receipt.contains("Exit: 18/10/2026 09:10:00"));
        assert!(receipt.contains("Time: 2 hour(s)"));
        assert!(receipt.contains("Fare: $6000.00"));
    }
}
