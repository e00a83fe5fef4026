//! # Stay Commands
//!
//! Vehicle entry, exit and the list of parked vehicles.
//!
//! ## Stay Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stay Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  register_entry  ┌──────────┐  register_exit  ┌────────┐ │
//! │  │ Outside  │─────────────────►│  Active  │────────────────►│ Closed │ │
//! │  └──────────┘                  └──────────┘                 └────────┘ │
//! │                                     │                           │       │
//! │                               list_active                  receipt,    │
//! │                               (space held)                 fare billed  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use parkline_core::{Clock, Stay, VehicleClass};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{ConfigState, LedgerState};

/// One stay, as shown to the operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayResponse {
    pub ticket: u64,
    pub plate: String,
    pub vehicle_class: VehicleClass,
    pub space_number: u32,
    pub entered_at: DateTime<Utc>,
    pub exited_at: Option<DateTime<Utc>>,
    pub hours: Option<i64>,
    pub fare_cents: i64,
    /// Fare formatted with the configured currency
    pub fare: String,
    /// Listing line, e.g. `CAR - Plate: ABC123 - Entry: 18/10/2026 08:00:00`
    pub description: String,
}

impl StayResponse {
    pub fn from_stay(stay: &Stay, config: &ConfigState) -> Self {
        StayResponse {
            ticket: stay.id.0,
            plate: stay.vehicle.plate.clone(),
            vehicle_class: stay.vehicle.class,
            space_number: stay.space_number,
            entered_at: stay.entered_at,
            exited_at: stay.exited_at,
            hours: stay.hours,
            fare_cents: stay.fare.cents(),
            fare: config.format_currency(stay.fare),
            description: stay.vehicle.describe(),
        }
    }
}

/// A closed stay plus the printed receipt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitResponse {
    #[serde(flatten)]
    pub stay: StayResponse,
    pub receipt: String,
}

/// Registers a vehicle entering the facility.
///
/// ## Behavior
/// - Plate is trimmed and upper-cased before anything else
/// - Class comes from the last character (digit: car, letter: motorcycle)
/// - The lowest-numbered free space of that class is assigned
///
/// ## Errors
/// - `VALIDATION_ERROR`: plate empty, too short, or unclassifiable
/// - `ALREADY_PARKED`: the plate has an open stay
/// - `NO_SPACE_AVAILABLE`: every space for the class is taken
pub fn register_entry<C: Clock>(
    ledger: &LedgerState<C>,
    config: &ConfigState,
    plate: &str,
) -> Result<StayResponse, ApiError> {
    debug!(plate = %plate, "register_entry command");

    let stay = ledger
        .with_ledger_mut(|ledger| ledger.register_entry(plate))
        .map_err(|err| {
            warn!(plate = %plate, error = %err, "Entry rejected");
            ApiError::from(err)
        })?;

    info!(
        plate = %stay.vehicle.plate,
        class = %stay.vehicle.class,
        space = stay.space_number,
        ticket = %stay.id,
        "Vehicle entered"
    );
    Ok(StayResponse::from_stay(&stay, config))
}

/// Registers a vehicle leaving, bills the stay and frees its space.
///
/// ## Billing
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  minutes = whole minutes between entry and exit                        │
/// │  hours   = max(1, ceil(minutes / 60))                                  │
/// │  fare    = hours × hourly rate (CAR 3000.00, MOTORCYCLE 2000.00)       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Errors
/// - `NOT_FOUND`: the plate has no open stay
pub fn register_exit<C: Clock>(
    ledger: &LedgerState<C>,
    config: &ConfigState,
    plate: &str,
) -> Result<ExitResponse, ApiError> {
    debug!(plate = %plate, "register_exit command");

    let stay = ledger
        .with_ledger_mut(|ledger| ledger.register_exit(plate))
        .map_err(|err| {
            warn!(plate = %plate, error = %err, "Exit rejected");
            ApiError::from(err)
        })?;

    info!(
        plate = %stay.vehicle.plate,
        space = stay.space_number,
        hours = stay.hours.unwrap_or_default(),
        fare_cents = stay.fare.cents(),
        "Vehicle exited"
    );
    Ok(ExitResponse {
        stay: StayResponse::from_stay(&stay, config),
        receipt: stay.receipt(|amount| config.format_currency(amount)),
    })
}

/// Lists parked vehicles in entry order.
pub fn list_active<C: Clock>(ledger: &LedgerState<C>, config: &ConfigState) -> Vec<StayResponse> {
    debug!("list_active command");
    ledger.with_ledger(|ledger| {
        ledger
            .active_vehicles()
            .iter()
            .map(|stay| StayResponse::from_stay(stay, config))
            .collect()
    })
}
