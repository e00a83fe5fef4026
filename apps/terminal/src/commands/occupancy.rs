//! # Occupancy Commands
//!
//! Read-only views: availability, the occupancy report and the rate sheet.

use parkline_core::{Clock, OccupancyReport, OccupancySummary, VehicleClass};
use serde::Serialize;
use tracing::debug;

use crate::state::{ConfigState, LedgerState};

/// Occupancy report with the revenue formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyReportResponse {
    #[serde(flatten)]
    pub report: OccupancyReport,
    pub revenue_display: String,
}

/// One rate sheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateResponse {
    pub vehicle_class: VehicleClass,
    pub per_hour_cents: i64,
    pub per_hour: String,
}

/// Free and occupied spaces, in total and per class.
pub fn occupancy_summary<C: Clock>(ledger: &LedgerState<C>) -> OccupancySummary {
    debug!("occupancy_summary command");
    ledger.with_ledger(|ledger| ledger.occupancy_summary())
}

/// Facility counts, percentage occupied, stay counts and revenue.
pub fn occupancy_report<C: Clock>(
    ledger: &LedgerState<C>,
    config: &ConfigState,
) -> OccupancyReportResponse {
    debug!("occupancy_report command");
    let report = ledger.with_ledger(|ledger| ledger.occupancy_report());
    OccupancyReportResponse {
        revenue_display: config.format_currency(report.revenue),
        report,
    }
}

/// Hourly rates per vehicle class.
pub fn get_rates<C: Clock>(ledger: &LedgerState<C>, config: &ConfigState) -> Vec<RateResponse> {
    debug!("get_rates command");
    ledger
        .with_ledger(|ledger| ledger.rates())
        .into_iter()
        .map(|rate| RateResponse {
            vehicle_class: rate.class,
            per_hour_cents: rate.per_hour.cents(),
            per_hour: config.format_currency(rate.per_hour),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use parkline_core::{Facility, ManualClock, StayLedger};

    fn test_state() -> LedgerState<ManualClock> {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap());
        LedgerState::from_ledger(StayLedger::with_clock(
            Facility::with_standard_layout("Centro", 10),
            clock,
        ))
    }

    #[test]
    fn test_summary_by_class() {
        let state = test_state();
        state
            .with_ledger_mut(|ledger| ledger.register_entry("MOT12A"))
            .unwrap();

        let summary = occupancy_summary(&state);
        assert_eq!(summary.capacity, 10);
        assert_eq!(summary.occupied, 1);
        assert_eq!(summary.available, 9);
        assert_eq!(summary.by_class[0].class, VehicleClass::Car);
        assert_eq!(summary.by_class[0].available, 5);
        assert_eq!(summary.by_class[1].occupied, 1);
    }

    #[test]
    fn test_report_formats_revenue() {
        let state = test_state();
        state
            .with_ledger_mut(|ledger| {
                ledger.register_entry("ABC123")?;
                ledger.register_entry("DEF456")?;
                ledger.register_exit("ABC123")
            })
            .unwrap();

        let response = occupancy_report(&state, &ConfigState::default());
        assert_eq!(response.report.occupied, 1);
        assert_eq!(response.report.percent_occupied, 10.0);
        assert_eq!(response.report.completed_count, 1);
        assert_eq!(response.revenue_display, "$3000.00");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["facilityName"], "Centro");
        assert_eq!(json["revenueDisplay"], "$3000.00");
    }

    #[test]
    fn test_rates() {
        let rates = get_rates(&test_state(), &ConfigState::default());
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].vehicle_class, VehicleClass::Car);
        assert_eq!(rates[0].per_hour, "$3000.00");
        assert_eq!(rates[1].vehicle_class, VehicleClass::Motorcycle);
        assert_eq!(rates[1].per_hour_cents, 200_000);
    }
}
