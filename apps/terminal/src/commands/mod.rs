//! # Console Commands Module
//!
//! Every operation the menu can trigger. Each command takes the state it
//! needs, calls into `parkline-core` / `parkline-store`, and returns a
//! serializable DTO or an [`ApiError`](crate::error::ApiError).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── stay.rs       ◄─── Entry, exit, parked vehicles
//! ├── occupancy.rs  ◄─── Availability, occupancy report, rates
//! ├── facility.rs   ◄─── Create, save, load, list facilities
//! └── report.rs     ◄─── Vehicle report files
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Menu                                                                   │
//! │  ────                                                                   │
//! │  option "1", plate "abc123"                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn register_entry(                                                     │
//! │      ledger: &LedgerState<C>,  ◄── Only the state it needs             │
//! │      config: &ConfigState,                                              │
//! │      plate: &str,              ◄── Raw operator input                  │
//! │  ) -> Result<StayResponse, ApiError>                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Text mode: formatted block    JSON mode: serde_json::to_string_pretty │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod facility;
pub mod occupancy;
pub mod report;
pub mod stay;
