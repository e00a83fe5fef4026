//! # Vehicle Reports
//!
//! Human-readable dumps of the facility state and the vehicles currently
//! parked. Rendering is pure; writing adds a timestamped file name.
//!
//! ## Report Layout
//! ```text
//! ========================================
//!     PARKED VEHICLES REPORT
//! ========================================
//! Facility: Centro
//! Generated: 18/10/2026 08:00:00
//!
//! FACILITY STATUS:
//! Capacity: 10
//! Occupied: 1
//! Available: 9
//!
//! PARKED VEHICLES (1):
//! ----------------------------------------
//! Ticket #1
//!   Plate: ABC123
//!   ...
//! ----------------------------------------
//!
//! ========================================
//! End of report
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parkline_core::{Clock, StayLedger, DISPLAY_TIME_FORMAT};
use tracing::info;

use crate::error::{StoreError, StoreResult};

const RULE: &str = "========================================";
const DIVIDER: &str = "----------------------------------------";

/// Writes vehicle reports into one directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ReportWriter { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for a report generated at `generated_at`.
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use parkline_store::ReportWriter;
    ///
    /// let at = Utc.with_ymd_and_hms(2026, 10, 18, 8, 5, 9).unwrap();
    /// assert_eq!(ReportWriter::file_name(at), "vehicles_2026-10-18_08-05-09.txt");
    /// ```
    pub fn file_name(generated_at: DateTime<Utc>) -> String {
        format!("vehicles_{}.txt", generated_at.format("%Y-%m-%d_%H-%M-%S"))
    }

    /// Renders the report text.
    pub fn render<C: Clock>(ledger: &StayLedger<C>, generated_at: DateTime<Utc>) -> String {
        let facility = ledger.facility();
        let active = ledger.active_vehicles();
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "    PARKED VEHICLES REPORT");
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "Facility: {}", facility.name());
        let _ = writeln!(out, "Generated: {}", generated_at.format(DISPLAY_TIME_FORMAT));
        let _ = writeln!(out);

        let _ = writeln!(out, "FACILITY STATUS:");
        let _ = writeln!(out, "Capacity: {}", facility.capacity());
        let _ = writeln!(out, "Occupied: {}", facility.count_occupied());
        let _ = writeln!(out, "Available: {}", facility.count_available());
        let _ = writeln!(out);

        if active.is_empty() {
            let _ = writeln!(out, "No vehicles currently parked.");
        } else {
            let _ = writeln!(out, "PARKED VEHICLES ({}):", active.len());
            let _ = writeln!(out, "{}", DIVIDER);
            for stay in active {
                let _ = writeln!(out, "Ticket {}", stay.id);
                let _ = writeln!(out, "  Plate: {}", stay.vehicle.plate);
                let _ = writeln!(out, "  Class: {}", stay.vehicle.class);
                let _ = writeln!(out, "  Space: {}", stay.space_number);
                let _ = writeln!(out, "  Entry: {}", stay.entered_at.format(DISPLAY_TIME_FORMAT));
                let _ = writeln!(out, "{}", DIVIDER);
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "End of report");
        out
    }

    /// Renders and writes the report, creating the directory if needed.
    /// Returns the path of the new file.
    pub fn write<C: Clock>(
        &self,
        ledger: &StayLedger<C>,
        generated_at: DateTime<Utc>,
    ) -> StoreResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;

        let path = self.dir.join(Self::file_name(generated_at));
        fs::write(&path, Self::render(ledger, generated_at))
            .map_err(|e| StoreError::io(&path, e))?;

        info!(
            path = ?path,
            parked = ledger.active_vehicles().len(),
            "Vehicle report written"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use parkline_core::{Facility, ManualClock};
    use tempfile::TempDir;

    fn test_ledger() -> StayLedger<ManualClock> {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap());
        StayLedger::with_clock(Facility::with_standard_layout("Centro", 10), clock)
    }

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_render_empty_facility() {
        let ledger = test_ledger();
        let text = ReportWriter::render(&ledger, generated_at());
        assert!(text.contains("Facility: Centro"));
        assert!(text.contains("Generated: 18/10/2026 12:30:00"));
        assert!(text.contains("Capacity: 10"));
        assert!(text.contains("No vehicles currently parked."));
        assert!(text.ends_with("End of report\n"));
    }

    #[test]
    fn test_render_lists_every_active_stay() {
        let mut ledger = test_ledger();
        ledger.register_entry("ABC123").unwrap();
        ledger.register_entry("MOT12A").unwrap();
        ledger.register_entry("DEF456").unwrap();
        ledger.register_exit("DEF456").unwrap();

        let text = ReportWriter::render(&ledger, generated_at());
        assert!(text.contains("PARKED VEHICLES (2):"));
        assert!(text.contains("Ticket #1\n  Plate: ABC123\n  Class: CAR\n  Space: 1\n"));
        assert!(text.contains("Ticket #2\n  Plate: MOT12A\n  Class: MOTORCYCLE\n  Space: 6\n"));
        assert!(!text.contains("DEF456"));
        assert!(text.contains("Occupied: 2"));
        assert!(text.contains("Available: 8"));
    }

    #[test]
    fn test_write_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let writer = ReportWriter::new(dir.path().join("reports"));
        let mut ledger = test_ledger();
        ledger.register_entry("ABC123").unwrap();

        let path = writer.write(&ledger, generated_at()).unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("vehicles_2026-10-18_12-30-00.txt")
        );

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, ReportWriter::render(&ledger, generated_at()));
    }
}
