//! # Parkline Console Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Parkline Console                                 │
//! │                                                                         │
//! │  main.rs ────► calls parkline_terminal::run()                          │
//! │                                                                         │
//! │  lib.rs ─────► flags, logging, config, store                           │
//! │                                                                         │
//! │  menu.rs ────► 1 entry  2 exit  3 availability  4 list ...             │
//! │                                                                         │
//! │  commands/ ──► register_entry, register_exit, occupancy_report         │
//! │                                                                         │
//! │  state/ ─────► LedgerState, ConfigState                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    parkline_terminal::run()
}
