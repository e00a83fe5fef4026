//! # parkline-core: Allocation & Billing for Parkline
//!
//! This crate is the **heart** of Parkline. It decides which space a vehicle
//! gets, keeps track of who is parked, and prices each stay.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Parkline Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Operator Console (apps/terminal)                │   │
//! │  │    Menu ──► Commands ──► LedgerState (Mutex)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ parkline-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │validation │  │ facility  │  │   fare    │  │  ledger   │  │   │
//! │  │   │ classify  │  │  Space    │  │ rates     │  │ entry     │  │   │
//! │  │   │  plates   │  │  first-fit│  │ hours     │  │ exit      │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • CLOCK IS INJECTED                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              parkline-store (Registry & Reports)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (VehicleClass, Vehicle, Space, Stay, reports)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Plate validation and classification
//! - [`facility`] - Space inventory with first-fit allocation
//! - [`fare`] - Hourly rates and billable hours
//! - [`clock`] - Injectable wall clock
//! - [`ledger`] - Entry/exit orchestration
//!
//! ## Example Usage
//!
//! ```rust
//! use parkline_core::{Facility, Money, StayLedger, VehicleClass};
//!
//! let facility = Facility::with_standard_layout("Centro", 10);
//! let mut ledger = StayLedger::new(facility);
//!
//! let stay = ledger.register_entry("xyz999").unwrap();
//! assert_eq!(stay.vehicle.class, VehicleClass::Car);
//! assert_eq!(stay.space_number, 1);
//!
//! let closed = ledger.register_exit("XYZ999").unwrap();
//! assert_eq!(closed.hours, Some(1));
//! assert_eq!(closed.fare, Money::from_major(3000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clock;
pub mod error;
pub mod facility;
pub mod fare;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CoreError, CoreResult, ValidationError};
pub use facility::Facility;
pub use ledger::StayLedger;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum plate length, counted in characters after trimming.
pub const MIN_PLATE_LENGTH: usize = 6;
