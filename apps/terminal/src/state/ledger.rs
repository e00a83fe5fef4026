//! # Ledger State
//!
//! Holds the stay ledger for the facility the operator is working on.
//!
//! ## Thread Safety
//! The ledger is wrapped in `Arc<Mutex<T>>` so that each command runs as one
//! critical section: the duplicate check, the space lookup and the
//! occupation in `register_entry` can never interleave with another entry.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger State Operations                              │
//! │                                                                         │
//! │  Menu Option              Command                 Ledger Change         │
//! │  ───────────              ───────                 ─────────────         │
//! │                                                                         │
//! │  1. Register entry ──────► register_entry() ────► active.push(stay)    │
//! │                                                                         │
//! │  2. Register exit ───────► register_exit() ─────► active → completed   │
//! │                                                                         │
//! │  3-6. Views ─────────────► occupancy_*() ───────► (read only)          │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! │        Read operations also acquire the lock but release it quickly.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use parkline_core::{Clock, StayLedger, SystemClock};

/// Shared handle to the ledger.
#[derive(Debug)]
pub struct LedgerState<C = SystemClock> {
    ledger: Arc<Mutex<StayLedger<C>>>,
}

impl<C: Clock> LedgerState<C> {
    /// Wraps an existing ledger.
    pub fn from_ledger(ledger: StayLedger<C>) -> Self {
        LedgerState {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Executes a function with read access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let report = ledger_state.with_ledger(|ledger| ledger.occupancy_report());
    /// ```
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StayLedger<C>) -> R,
    {
        let ledger = self.ledger.lock().expect("Ledger mutex poisoned");
        f(&ledger)
    }

    /// Executes a function with write access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// ledger_state.with_ledger_mut(|ledger| ledger.register_entry("ABC123"))?;
    /// ```
    pub fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut StayLedger<C>) -> R,
    {
        let mut ledger = self.ledger.lock().expect("Ledger mutex poisoned");
        f(&mut ledger)
    }
}

impl<C> Clone for LedgerState<C> {
    fn clone(&self) -> Self {
        LedgerState {
            ledger: Arc::clone(&self.ledger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use parkline_core::{Facility, ManualClock};

    fn test_state() -> LedgerState<ManualClock> {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap());
        LedgerState::from_ledger(StayLedger::with_clock(
            Facility::with_standard_layout("Centro", 4),
            clock,
        ))
    }

    #[test]
    fn test_mutation_visible_through_clones() {
        let state = test_state();
        let other = state.clone();

        let stay = state
            .with_ledger_mut(|ledger| ledger.register_entry("ABC123"))
            .unwrap();
        assert_eq!(stay.space_number, 1);

        let active = other.with_ledger(|ledger| ledger.active_vehicles().len());
        assert_eq!(active, 1);
    }

    #[test]
    fn test_failed_entry_leaves_ledger_unchanged() {
        let state = test_state();
        state
            .with_ledger_mut(|ledger| ledger.register_entry("ABC123"))
            .unwrap();

        let result = state.with_ledger_mut(|ledger| ledger.register_entry("abc123"));
        assert!(result.is_err());

        let (occupied, active) = state.with_ledger(|ledger| {
            (ledger.facility().count_occupied(), ledger.active_vehicles().len())
        });
        assert_eq!(occupied, 1);
        assert_eq!(active, 1);
    }
}
