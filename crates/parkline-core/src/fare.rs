//! # Fare Calculator
//!
//! Hourly rates per vehicle class and the billable-hours rule.
//!
//! ## Billing Rule
//! ```text
//! minutes parked   billable hours
//! ──────────────   ──────────────
//!        0..=60          1        (minimum one hour)
//!       61..=120         2        (every started hour is charged)
//!      121..=180         3
//!      negative          1        (clock skew)
//!
//! fare = hourly_rate(class) × billable hours
//! ```

use chrono::{DateTime, Utc};

use crate::money::Money;
use crate::types::{HourlyRate, VehicleClass};

/// Hourly rate for cars.
pub const CAR_HOURLY_RATE: Money = Money::from_major(3000);

/// Hourly rate for motorcycles.
pub const MOTORCYCLE_HOURLY_RATE: Money = Money::from_major(2000);

/// Price of one hour for `class`.
pub const fn hourly_rate(class: VehicleClass) -> Money {
    match class {
        VehicleClass::Car => CAR_HOURLY_RATE,
        VehicleClass::Motorcycle => MOTORCYCLE_HOURLY_RATE,
    }
}

/// Fare for `hours` whole hours.
///
/// ```rust
/// use parkline_core::fare::fare;
/// use parkline_core::{Money, VehicleClass};
///
/// assert_eq!(fare(VehicleClass::Motorcycle, 3), Money::from_major(6000));
/// ```
pub const fn fare(class: VehicleClass, hours: i64) -> Money {
    hourly_rate(class).multiply_hours(hours)
}

/// Whole hours to bill between entry and exit: elapsed whole minutes rounded
/// up to the hour, never less than one.
///
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use parkline_core::fare::billable_hours;
///
/// let entry = Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap();
/// assert_eq!(billable_hours(entry, entry), 1);
/// assert_eq!(billable_hours(entry, entry + Duration::minutes(61)), 2);
/// ```
pub fn billable_hours(entered_at: DateTime<Utc>, exited_at: DateTime<Utc>) -> i64 {
    let minutes = (exited_at - entered_at).num_minutes();
    let hours = (minutes + 59).div_euclid(60);
    hours.max(1)
}

/// The static rate table, one row per class.
pub fn rate_sheet() -> Vec<HourlyRate> {
    VehicleClass::ALL
        .iter()
        .map(|&class| HourlyRate {
            class,
            per_hour: hourly_rate(class),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn entry() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_hourly_rates() {
        assert_eq!(hourly_rate(VehicleClass::Car).as_major_f64(), 3000.0);
        assert_eq!(hourly_rate(VehicleClass::Motorcycle).as_major_f64(), 2000.0);
    }

    #[test]
    fn test_fare_is_rate_times_hours() {
        assert_eq!(fare(VehicleClass::Car, 1), Money::from_major(3000));
        assert_eq!(fare(VehicleClass::Motorcycle, 3).as_major_f64(), 6000.0);
        assert_eq!(fare(VehicleClass::Car, 0), Money::zero());
    }

    #[test]
    fn test_billable_hours_rounds_up() {
        let start = entry();
        assert_eq!(billable_hours(start, start + Duration::minutes(1)), 1);
        assert_eq!(billable_hours(start, start + Duration::minutes(60)), 1);
        assert_eq!(billable_hours(start, start + Duration::minutes(61)), 2);
        assert_eq!(billable_hours(start, start + Duration::minutes(180)), 3);
    }

    #[test]
    fn test_billable_hours_ignores_partial_minutes() {
        let start = entry();
        assert_eq!(billable_hours(start, start + Duration::seconds(60 * 60 + 59)), 1);
    }

    #[test]
    fn test_billable_hours_minimum_one() {
        let start = entry();
        assert_eq!(billable_hours(start, start), 1);
        assert_eq!(billable_hours(start, start - Duration::hours(3)), 1);
    }

    #[test]
    fn test_rate_sheet_order() {
        let sheet = rate_sheet();
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet[0].class, VehicleClass::Car);
        assert_eq!(sheet[0].per_hour, CAR_HOURLY_RATE);
        assert_eq!(sheet[1].class, VehicleClass::Motorcycle);
        assert_eq!(sheet[1].per_hour, MOTORCYCLE_HOURLY_RATE);
    }
}
