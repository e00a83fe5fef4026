//! # Operator Menu
//!
//! The interactive loop. It reads operator input line by line and prints
//! either formatted text or, with `--json`, the command DTOs as JSON.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Console Session                                      │
//! │                                                                         │
//! │  start ──► saved facilities? ──yes──► 1. load  / 2. create              │
//! │                  │ no                                                   │
//! │                  ▼                                                      │
//! │            create facility ──► save (failure only warns)                │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │  ┌──────────────────────────────────────────┐                          │
//! │  │ 1 entry   2 exit   3 availability        │◄──┐                      │
//! │  │ 4 list    5 report 6 rates               │   │ invalid option,      │
//! │  │ 7 write report file        8 quit        │───┘ any command          │
//! │  └──────────────────────────────────────────┘                          │
//! │                  │ 8 or end of input                                    │
//! │                  ▼                                                      │
//! │                 exit                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input and output are generic so tests can script a whole session.

use std::io::{self, BufRead, Write};

use parkline_core::{Clock, Facility, OccupancySummary, StayLedger, DISPLAY_TIME_FORMAT};
use parkline_store::Store;
use serde::Serialize;
use tracing::{info, warn};

use crate::commands::facility::{self, FacilityResponse};
use crate::commands::occupancy::{self, OccupancyReportResponse, RateResponse};
use crate::commands::report::{self, ReportWritten};
use crate::commands::stay::{self, ExitResponse, StayResponse};
use crate::error::ApiError;
use crate::state::{ConfigState, LedgerState};

const RULE: &str = "========================================";

/// One operator session over a reader and a writer.
pub struct Console<'a, R, W> {
    input: R,
    output: W,
    store: &'a Store,
    config: &'a ConfigState,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(input: R, output: W, store: &'a Store, config: &'a ConfigState) -> Self {
        Console {
            input,
            output,
            store,
            config,
        }
    }

    /// Sets up a facility, then runs the main menu until the operator quits
    /// or the input ends.
    pub fn run<C: Clock>(&mut self, clock: C) -> io::Result<()> {
        let facility = match self.choose_facility()? {
            Some(facility) => facility,
            None => {
                writeln!(self.output, "Could not set up a facility. Exiting.")?;
                return Ok(());
            }
        };

        let ledger = LedgerState::from_ledger(StayLedger::with_clock(facility, clock));
        self.main_loop(&ledger)
    }

    // =========================================================================
    // Facility setup
    // =========================================================================

    fn choose_facility(&mut self) -> io::Result<Option<Facility>> {
        if !self.store.registry().has_facilities() {
            writeln!(self.output, "No saved facilities. Let's create one.")?;
            return self.create_new();
        }

        writeln!(self.output, "Saved facilities found.")?;
        writeln!(self.output, "1. Load a saved facility")?;
        writeln!(self.output, "2. Create a new facility")?;

        loop {
            let choice = match self.prompt("Select an option: ")? {
                Some(choice) => choice,
                None => return Ok(None),
            };
            match choice.as_str() {
                "1" => return self.load_saved(),
                "2" => return self.create_new(),
                _ => writeln!(self.output, "Invalid option. Try again.")?,
            }
        }
    }

    fn load_saved(&mut self) -> io::Result<Option<Facility>> {
        let names = match facility::list_facilities(self.store) {
            Ok(names) => names,
            Err(err) => {
                self.show_error(&err)?;
                return Ok(None);
            }
        };

        if names.is_empty() {
            writeln!(self.output, "No saved facility could be read. Let's create one.")?;
            return self.create_new();
        }

        writeln!(self.output, "Saved facilities:")?;
        for (index, name) in names.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, name)?;
        }

        let choice = match self.prompt("Facility number: ")? {
            Some(choice) => choice,
            None => return Ok(None),
        };
        let name = match choice.parse::<usize>() {
            Ok(n) if (1..=names.len()).contains(&n) => &names[n - 1],
            _ => {
                writeln!(self.output, "Invalid selection.")?;
                return Ok(None);
            }
        };

        match facility::load_facility(self.store, name) {
            Ok(loaded) => {
                self.show(&FacilityResponse::from(&loaded), |f| {
                    render_facility("Facility loaded", f)
                })?;
                Ok(Some(loaded))
            }
            Err(err) => {
                self.show_error(&err)?;
                Ok(None)
            }
        }
    }

    fn create_new(&mut self) -> io::Result<Option<Facility>> {
        let name = match self.prompt("Facility name: ")? {
            Some(name) => name,
            None => return Ok(None),
        };
        let capacity = match self.prompt("Capacity (total spaces): ")? {
            Some(capacity) => capacity,
            None => return Ok(None),
        };
        let capacity = match capacity.parse::<i64>() {
            Ok(capacity) => capacity,
            Err(_) => {
                self.show_error(&ApiError::validation("Capacity must be a whole number"))?;
                return Ok(None);
            }
        };

        let created = match facility::create_facility(&name, capacity) {
            Ok(created) => created,
            Err(err) => {
                self.show_error(&err)?;
                return Ok(None);
            }
        };

        if let Err(err) = facility::save_facility(self.store, &created) {
            warn!(facility = %created.name(), error = %err, "Facility not saved");
            writeln!(
                self.output,
                "Warning: the facility could not be saved: {}",
                err.message
            )?;
        }

        self.show(&FacilityResponse::from(&created), |f| {
            render_facility("Facility created", f)
        })?;
        Ok(Some(created))
    }

    // =========================================================================
    // Main menu
    // =========================================================================

    fn main_loop<C: Clock>(&mut self, ledger: &LedgerState<C>) -> io::Result<()> {
        let facility_name = ledger.with_ledger(|l| l.facility().name().to_string());
        info!(facility = %facility_name, "Session started");

        loop {
            self.print_menu(&facility_name)?;
            let choice = match self.prompt("Select an option: ")? {
                Some(choice) => choice,
                None => break,
            };

            match choice.as_str() {
                "1" => self.entry(ledger)?,
                "2" => self.exit(ledger)?,
                "3" => {
                    let summary = occupancy::occupancy_summary(ledger);
                    self.show(&summary, render_summary)?;
                }
                "4" => {
                    let active = stay::list_active(ledger, self.config);
                    self.show(&active, |stays| render_active(stays))?;
                }
                "5" => {
                    let report = occupancy::occupancy_report(ledger, self.config);
                    self.show(&report, render_report)?;
                }
                "6" => {
                    let rates = occupancy::get_rates(ledger, self.config);
                    self.show(&rates, |rates| render_rates(rates))?;
                }
                "7" => match report::write_report(self.store, ledger) {
                    Ok(written) => self.show(&written, render_written)?,
                    Err(err) => self.show_error(&err)?,
                },
                "8" => break,
                _ => writeln!(self.output, "Invalid option. Try again.")?,
            }
        }

        writeln!(self.output, "Goodbye.")?;
        info!(facility = %facility_name, "Session ended");
        Ok(())
    }

    fn print_menu(&mut self, facility_name: &str) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "  PARKLINE - {}", facility_name)?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "1. Register vehicle entry")?;
        writeln!(self.output, "2. Register vehicle exit")?;
        writeln!(self.output, "3. Show availability")?;
        writeln!(self.output, "4. List parked vehicles")?;
        writeln!(self.output, "5. Occupancy report")?;
        writeln!(self.output, "6. Hourly rates")?;
        writeln!(self.output, "7. Write vehicle report file")?;
        writeln!(self.output, "8. Exit")
    }

    fn entry<C: Clock>(&mut self, ledger: &LedgerState<C>) -> io::Result<()> {
        let plate = match self.prompt("Vehicle plate: ")? {
            Some(plate) => plate,
            None => return Ok(()),
        };
        match stay::register_entry(ledger, self.config, &plate) {
            Ok(entered) => self.show(&entered, render_entry),
            Err(err) => self.show_error(&err),
        }
    }

    fn exit<C: Clock>(&mut self, ledger: &LedgerState<C>) -> io::Result<()> {
        let plate = match self.prompt("Vehicle plate: ")? {
            Some(plate) => plate,
            None => return Ok(()),
        };
        match stay::register_exit(ledger, self.config, &plate) {
            Ok(exited) => self.show(&exited, render_exit),
            Err(err) => self.show_error(&err),
        }
    }

    // =========================================================================
    // Input / output
    // =========================================================================

    /// Prints `label` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn show<T: Serialize>(
        &mut self,
        value: &T,
        render: impl FnOnce(&T) -> String,
    ) -> io::Result<()> {
        if self.config.json_output {
            let json = serde_json::to_string_pretty(value)?;
            writeln!(self.output, "{}", json)
        } else {
            write!(self.output, "{}", render(value))
        }
    }

    fn show_error(&mut self, err: &ApiError) -> io::Result<()> {
        if self.config.json_output {
            let json = serde_json::to_string_pretty(err)?;
            writeln!(self.output, "{}", json)
        } else {
            writeln!(self.output, "Error: {}", err.message)
        }
    }
}

// =============================================================================
// Text rendering
// =============================================================================

fn render_facility(title: &str, facility: &FacilityResponse) -> String {
    format!(
        "{}: {}\n  Capacity: {}\n  Car spaces: {}\n  Motorcycle spaces: {}\n",
        title, facility.name, facility.capacity, facility.car_spaces, facility.motorcycle_spaces
    )
}

fn render_entry(stay: &StayResponse) -> String {
    format!(
        "=== ENTRY REGISTERED ===\nTicket: #{}\nPlate: {}\nClass: {}\nSpace: {}\nEntry: {}\n",
        stay.ticket,
        stay.plate,
        stay.vehicle_class,
        stay.space_number,
        stay.entered_at.format(DISPLAY_TIME_FORMAT)
    )
}

fn render_exit(exit: &ExitResponse) -> String {
    format!("=== EXIT REGISTERED ===\n{}", exit.receipt)
}

fn render_summary(summary: &OccupancySummary) -> String {
    let mut out = format!(
        "=== AVAILABILITY: {} ===\nCapacity: {}\nOccupied: {}\nAvailable: {}\n",
        summary.facility_name, summary.capacity, summary.occupied, summary.available
    );
    for class in &summary.by_class {
        out.push_str(&format!(
            "{}: {} of {} available\n",
            class.class, class.available, class.total
        ));
    }
    out
}

fn render_active(stays: &[StayResponse]) -> String {
    if stays.is_empty() {
        return "No vehicles currently parked.\n".to_string();
    }

    let mut out = format!("=== PARKED VEHICLES ({}) ===\n", stays.len());
    for stay in stays {
        out.push_str(&format!(
            "Ticket #{} | Space {} | {}\n",
            stay.ticket, stay.space_number, stay.description
        ));
    }
    out
}

fn render_report(response: &OccupancyReportResponse) -> String {
    let report = &response.report;
    format!(
        "=== OCCUPANCY REPORT: {} ===\nCapacity: {}\nOccupied: {} ({:.1}%)\nAvailable: {}\n\
         Parked vehicles: {}\nCompleted stays: {}\nRevenue: {}\n",
        report.facility_name,
        report.capacity,
        report.occupied,
        report.percent_occupied,
        report.available,
        report.active_count,
        report.completed_count,
        response.revenue_display
    )
}

fn render_rates(rates: &[RateResponse]) -> String {
    let mut out = String::from("=== HOURLY RATES ===\n");
    for rate in rates {
        out.push_str(&format!("{}: {} per hour\n", rate.vehicle_class, rate.per_hour));
    }
    out.push_str("Every started hour is billed; the minimum is one hour.\n");
    out
}

fn render_written(written: &ReportWritten) -> String {
    format!(
        "Report written to {} ({} vehicle(s))\n",
        written.path.display(),
        written.parked
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use parkline_core::ManualClock;
    use parkline_store::StoreConfig;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(StoreConfig::new(dir.path()));
        (dir, store)
    }

    fn test_clock() -> ManualClock {
        ManualClock::new(Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap())
    }

    fn run_session(store: &Store, config: &ConfigState, clock: ManualClock, script: &str) -> String {
        let mut output = Vec::new();
        Console::new(script.as_bytes(), &mut output, store, config)
            .run(clock)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_create_facility_then_entry_and_exit() {
        let (_dir, store) = test_store();
        let config = ConfigState::default();

        let out = run_session(
            &store,
            &config,
            test_clock(),
            "Centro\n10\n1\nxyz999\n2\nXYZ999\n8\n",
        );

        assert!(out.contains("No saved facilities"));
        assert!(out.contains("Facility created: Centro"));
        assert!(out.contains("Car spaces: 5"));
        assert!(out.contains("=== ENTRY REGISTERED ===\nTicket: #1\nPlate: XYZ999\nClass: CAR\nSpace: 1\n"));
        assert!(out.contains("=== EXIT REGISTERED ==="));
        assert!(out.contains("Time: 1 hour(s)"));
        assert!(out.contains("Fare: $3000.00"));
        assert!(out.ends_with("Goodbye.\n"));

        assert_eq!(store.registry().names().unwrap(), vec!["Centro"]);
    }

    #[test]
    fn test_exit_bills_elapsed_hours() {
        let (_dir, store) = test_store();
        let config = ConfigState::default();
        let clock = test_clock();
        let handle = clock.clone();

        // Park before the session starts so the clock can move first.
        let ledger = LedgerState::from_ledger(StayLedger::with_clock(
            Facility::with_standard_layout("Centro", 10),
            clock,
        ));
        stay::register_entry(&ledger, &config, "MOT12A").unwrap();
        handle.advance(Duration::minutes(150));

        let mut output = Vec::new();
        let mut console = Console::new("2\nMOT12A\n8\n".as_bytes(), &mut output, &store, &config);
        console.main_loop(&ledger).unwrap();

        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Class: MOTORCYCLE"));
        assert!(out.contains("Time: 3 hour(s)"));
        assert!(out.contains("Fare: $6000.00"));
    }

    #[test]
    fn test_load_saved_facility() {
        let (_dir, store) = test_store();
        store
            .registry()
            .save(&Facility::with_standard_layout("Norte", 4))
            .unwrap();
        let config = ConfigState::default();

        let out = run_session(&store, &config, test_clock(), "1\n1\n3\n8\n");

        assert!(out.contains("Saved facilities found."));
        assert!(out.contains("1. Norte"));
        assert!(out.contains("Facility loaded: Norte"));
        assert!(out.contains("=== AVAILABILITY: Norte ===\nCapacity: 4\nOccupied: 0\nAvailable: 4\n"));
        assert!(out.contains("CAR: 2 of 2 available"));
    }

    #[test]
    fn test_invalid_load_selection_exits() {
        let (_dir, store) = test_store();
        store
            .registry()
            .save(&Facility::with_standard_layout("Norte", 4))
            .unwrap();
        let config = ConfigState::default();

        let out = run_session(&store, &config, test_clock(), "1\n5\n");
        assert!(out.contains("Invalid selection."));
        assert!(out.contains("Could not set up a facility. Exiting."));
    }

    #[test]
    fn test_invalid_options_reprompt() {
        let (_dir, store) = test_store();
        let config = ConfigState::default();

        let out = run_session(&store, &config, test_clock(), "Centro\n10\n9\nabc\n4\n8\n");
        assert_eq!(out.matches("Invalid option. Try again.").count(), 2);
        assert!(out.contains("No vehicles currently parked."));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (_dir, store) = test_store();
        let config = ConfigState::default();

        let out = run_session(&store, &config, test_clock(), "Centro\n10\n1\n");
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_bad_capacity_exits() {
        let (_dir, store) = test_store();
        let config = ConfigState::default();

        let out = run_session(&store, &config, test_clock(), "Centro\nten\n");
        assert!(out.contains("Error: Capacity must be a whole number"));
        assert!(out.contains("Could not set up a facility. Exiting."));
        assert!(!store.registry().has_facilities());
    }

    #[test]
    fn test_command_errors_are_printed() {
        let (_dir, store) = test_store();
        let config = ConfigState::default();

        let out = run_session(
            &store,
            &config,
            test_clock(),
            "Centro\n2\n1\nAB\n1\nABC123\n1\nDEF456\n2\nZZZ999\n8\n",
        );
        assert!(out.contains("Error: Invalid plate: plate must be at least 6 characters"));
        assert!(out.contains("Error: No CAR spaces available"));
        assert!(out.contains("Error: Vehicle not found: ZZZ999"));
    }

    #[test]
    fn test_report_and_rates() {
        let (dir, store) = test_store();
        let config = ConfigState::default();

        let out = run_session(&store, &config, test_clock(), "Centro\n10\n1\nABC123\n5\n6\n7\n8\n");
        assert!(out.contains("Occupied: 1 (10.0%)"));
        assert!(out.contains("Revenue: $0.00"));
        assert!(out.contains("CAR: $3000.00 per hour"));
        assert!(out.contains("MOTORCYCLE: $2000.00 per hour"));
        assert!(out.contains("Report written to"));

        let report = dir.path().join("reports").join("vehicles_2026-10-18_08-00-00.txt");
        assert!(report.exists());
    }

    #[test]
    fn test_json_output() {
        let (_dir, store) = test_store();
        let config = ConfigState {
            json_output: true,
            ..ConfigState::default()
        };

        let out = run_session(&store, &config, test_clock(), "Centro\n10\n1\nABC123\n1\nABC123\n8\n");
        assert!(out.contains("\"carSpaces\": 5"));
        assert!(out.contains("\"plate\": \"ABC123\""));
        assert!(out.contains("\"spaceNumber\": 1"));
        assert!(out.contains("\"code\": \"ALREADY_PARKED\""));
    }
}
