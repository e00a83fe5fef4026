//! # Facility
//!
//! The space inventory: a name, a fixed capacity and the numbered spaces.
//!
//! ## Standard Layout
//! ```text
//! capacity = 10
//!
//!   ┌───┬───┬───┬───┬───┐┌───┬───┬───┬───┬───┐
//!   │ 1 │ 2 │ 3 │ 4 │ 5 ││ 6 │ 7 │ 8 │ 9 │10 │
//!   └───┴───┴───┴───┴───┘└───┴───┴───┴───┴───┘
//!        CAR (cap / 2)      MOTORCYCLE (rest)
//!
//! find_available(Car) scans left to right and returns the first free
//! CAR space, so the lowest free number always wins.
//! ```
//!
//! Occupancy changes are crate-private: only the
//! [`StayLedger`](crate::StayLedger) parks and releases vehicles.

use serde::{Deserialize, Serialize};

use crate::types::{ClassOccupancy, Space, Vehicle, VehicleClass};

/// A parking facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    name: String,
    capacity: u32,
    spaces: Vec<Space>,
}

impl Facility {
    /// Creates a facility with no spaces yet.
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Facility {
            name: name.into(),
            capacity,
            spaces: Vec::with_capacity(capacity as usize),
        }
    }

    /// Creates a facility with half the spaces (rounded down) for cars and
    /// the rest for motorcycles.
    ///
    /// ```rust
    /// use parkline_core::{Facility, VehicleClass};
    ///
    /// let facility = Facility::with_standard_layout("Centro", 7);
    /// assert_eq!(facility.count_spaces(VehicleClass::Car), 3);
    /// assert_eq!(facility.count_spaces(VehicleClass::Motorcycle), 4);
    /// ```
    pub fn with_standard_layout(name: impl Into<String>, capacity: u32) -> Self {
        Self::with_layout(name, capacity, capacity / 2)
    }

    /// Creates a facility with `car_spaces` car spaces numbered from 1,
    /// followed by motorcycle spaces up to `capacity`. A car count above
    /// capacity is clamped.
    pub fn with_layout(name: impl Into<String>, capacity: u32, car_spaces: u32) -> Self {
        let mut facility = Facility::new(name, capacity);
        let car_spaces = car_spaces.min(capacity);
        for number in 1..=car_spaces {
            facility.add_space(Space::new(number, VehicleClass::Car));
        }
        for number in car_spaces.saturating_add(1)..=capacity {
            facility.add_space(Space::new(number, VehicleClass::Motorcycle));
        }
        facility
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured capacity. Never changes after construction.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// All spaces in insertion order.
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Appends a space. Returns false, leaving the facility untouched, once
    /// the facility is at capacity.
    pub fn add_space(&mut self, space: Space) -> bool {
        if self.spaces.len() >= self.capacity as usize {
            return false;
        }
        self.spaces.push(space);
        true
    }

    /// First free space for `class`, in insertion order.
    pub fn find_available(&self, class: VehicleClass) -> Option<&Space> {
        self.spaces
            .iter()
            .find(|space| space.class == class && space.is_available())
    }

    /// Looks up a space by its number.
    pub fn find_by_number(&self, number: u32) -> Option<&Space> {
        self.spaces.iter().find(|space| space.number == number)
    }

    pub fn count_available(&self) -> usize {
        self.spaces.iter().filter(|space| space.is_available()).count()
    }

    pub fn count_occupied(&self) -> usize {
        self.spaces.iter().filter(|space| space.is_occupied()).count()
    }

    /// Number of spaces reserved for `class`.
    pub fn count_spaces(&self, class: VehicleClass) -> usize {
        self.spaces.iter().filter(|space| space.class == class).count()
    }

    /// Free/taken breakdown for one class.
    pub fn class_occupancy(&self, class: VehicleClass) -> ClassOccupancy {
        let (occupied, available) = self
            .spaces
            .iter()
            .filter(|space| space.class == class)
            .fold((0, 0), |(occupied, available), space| {
                if space.is_occupied() {
                    (occupied + 1, available)
                } else {
                    (occupied, available + 1)
                }
            });

        ClassOccupancy {
            class,
            total: occupied + available,
            occupied,
            available,
        }
    }

    /// Parks `vehicle` in the first free space of its class and returns the
    /// space number.
    pub(crate) fn occupy_first_available(&mut self, vehicle: Vehicle) -> Option<u32> {
        let space = self
            .spaces
            .iter_mut()
            .find(|space| space.class == vehicle.class && space.is_available())?;
        space.occupy(vehicle);
        Some(space.number)
    }

    /// Frees a space. Returns the vehicle that was parked there.
    pub(crate) fn release(&mut self, number: u32) -> Option<Vehicle> {
        self.spaces
            .iter_mut()
            .find(|space| space.number == number)
            .and_then(Space::release)
    }
}
