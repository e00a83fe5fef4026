//! # Stay Ledger
//!
//! Orchestrates entry and exit. The ledger owns the facility, the active
//! stays and the completed history, and it is the only code that parks or
//! releases vehicles.
//!
//! ## Entry / Exit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  register_entry("abc123")                                               │
//! │       │                                                                 │
//! │       ├── validate_plate ─────────────── InvalidIdentifier             │
//! │       ├── already active? ────────────── DuplicateActiveVehicle        │
//! │       ├── first free CAR space? ──────── NoSpaceAvailable              │
//! │       └── park, issue Stay #n ────────── active.push(stay)             │
//! │                                                                         │
//! │  register_exit("ABC123")                                                │
//! │       │                                                                 │
//! │       ├── find active stay ───────────── VehicleNotFound               │
//! │       ├── exited_at = clock.now()                                      │
//! │       ├── hours = billable_hours, fare = rate × hours                  │
//! │       ├── release space                                                │
//! │       └── active → completed                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is detected before anything is mutated, so a rejected
//! request leaves the ledger unchanged.

use crate::clock::{Clock, SystemClock};
use crate::error::{CoreError, CoreResult};
use crate::facility::Facility;
use crate::fare::{billable_hours, fare, rate_sheet};
use crate::money::Money;
use crate::types::{
    HourlyRate, OccupancyReport, OccupancySummary, Stay, StayId, Vehicle, VehicleClass,
};
use crate::validation::{normalize_plate, validate_plate, ClassifiedPlate};

/// Active and completed stays for one facility.
#[derive(Debug)]
pub struct StayLedger<C = SystemClock> {
    facility: Facility,
    active: Vec<Stay>,
    completed: Vec<Stay>,
    next_stay_id: u64,
    clock: C,
}

impl StayLedger<SystemClock> {
    /// Creates a ledger that reads the system clock.
    pub fn new(facility: Facility) -> Self {
        Self::with_clock(facility, SystemClock)
    }
}

impl<C: Clock> StayLedger<C> {
    /// Creates a ledger with an injected clock. Ticket numbers start at 1.
    pub fn with_clock(facility: Facility, clock: C) -> Self {
        StayLedger {
            facility,
            active: Vec::new(),
            completed: Vec::new(),
            next_stay_id: 1,
            clock,
        }
    }

    // =========================================================================
    // Entry / Exit
    // =========================================================================

    /// Registers a vehicle entering and assigns it the lowest-numbered free
    /// space of its class.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidIdentifier`] for a plate that fails validation
    /// - [`CoreError::DuplicateActiveVehicle`] if the plate is already parked
    /// - [`CoreError::NoSpaceAvailable`] if its class is full
    pub fn register_entry(&mut self, plate: &str) -> CoreResult<Stay> {
        let ClassifiedPlate { plate, class } = validate_plate(plate)?;

        if self.find_active(&plate).is_some() {
            return Err(CoreError::DuplicateActiveVehicle { plate });
        }

        if self.facility.find_available(class).is_none() {
            return Err(CoreError::NoSpaceAvailable { class });
        }

        let vehicle = Vehicle {
            plate,
            class,
            entered_at: self.clock.now(),
        };
        let space_number = self
            .facility
            .occupy_first_available(vehicle.clone())
            .ok_or(CoreError::NoSpaceAvailable { class })?;

        let stay = Stay {
            id: self.allocate_stay_id(),
            entered_at: vehicle.entered_at,
            vehicle,
            space_number,
            exited_at: None,
            hours: None,
            fare: Money::zero(),
        };
        self.active.push(stay.clone());

        Ok(stay)
    }

    /// Registers a vehicle leaving: closes its stay, bills it and frees the
    /// space.
    ///
    /// ## Errors
    /// - [`CoreError::VehicleNotFound`] if the plate has no open stay
    pub fn register_exit(&mut self, plate: &str) -> CoreResult<Stay> {
        let plate = normalize_plate(plate);

        let position = self
            .active
            .iter()
            .position(|stay| stay.vehicle.plate == plate)
            .ok_or(CoreError::VehicleNotFound(plate))?;

        let mut stay = self.active.remove(position);
        let exited_at = self.clock.now();
        let hours = billable_hours(stay.entered_at, exited_at);
        let amount = fare(stay.vehicle.class, hours);
        stay.close(exited_at, hours, amount);

        self.facility.release(stay.space_number);
        self.completed.push(stay.clone());

        Ok(stay)
    }

    fn allocate_stay_id(&mut self) -> StayId {
        let id = StayId(self.next_stay_id);
        self.next_stay_id += 1;
        id
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The open stay for a plate, if any. The plate is normalized first.
    pub fn find_active(&self, plate: &str) -> Option<&Stay> {
        let plate = normalize_plate(plate);
        self.active.iter().find(|stay| stay.vehicle.plate == plate)
    }

    /// Open stays in registration order.
    pub fn active_vehicles(&self) -> &[Stay] {
        &self.active
    }

    /// Closed stays in exit order.
    pub fn completed_stays(&self) -> &[Stay] {
        &self.completed
    }

    pub fn facility(&self) -> &Facility {
        &self.facility
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The static hourly rate table.
    pub fn rates(&self) -> Vec<HourlyRate> {
        rate_sheet()
    }

    /// Total billed across completed stays.
    pub fn revenue(&self) -> Money {
        self.completed.iter().map(|stay| stay.fare).sum()
    }

    /// Space usage with a per-class breakdown.
    pub fn occupancy_summary(&self) -> OccupancySummary {
        OccupancySummary {
            facility_name: self.facility.name().to_string(),
            capacity: self.facility.capacity() as usize,
            occupied: self.facility.count_occupied(),
            available: self.facility.count_available(),
            by_class: VehicleClass::ALL
                .iter()
                .map(|&class| self.facility.class_occupancy(class))
                .collect(),
        }
    }

    /// Facility counts combined with stay history.
    pub fn occupancy_report(&self) -> OccupancyReport {
        let capacity = self.facility.capacity() as usize;
        let occupied = self.facility.count_occupied();
        let percent_occupied = if capacity == 0 {
            0.0
        } else {
            occupied as f64 * 100.0 / capacity as f64
        };

        OccupancyReport {
            facility_name: self.facility.name().to_string(),
            capacity,
            occupied,
            available: self.facility.count_available(),
            percent_occupied,
            active_count: self.active.len(),
            completed_count: self.completed.len(),
            revenue: self.revenue(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
