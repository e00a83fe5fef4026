//! # parkline-store: Flat-File Persistence for Parkline
//!
//! This crate provides file access for the Parkline console: the facility
//! registry and the vehicle report files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Parkline Data Flow                               │
//! │                                                                         │
//! │  Console command (load_facility, write_report)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  parkline-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐   ┌─────────────┐  │   │
//! │  │   │    Store      │    │ FacilityRegistry │   │ReportWriter │  │   │
//! │  │   │  (config.rs)  │───►│  (registry.rs)   │   │ (report.rs) │  │   │
//! │  │   │  StoreConfig  │───►│  save/load/names │   │ render/write│  │   │
//! │  │   └───────────────┘    └──────────────────┘   └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/parkline/facilities.txt                                │
//! │  ~/.local/share/parkline/reports/vehicles_2026-10-18_08-00-00.txt      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use parkline_core::Facility;
//! use parkline_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new("./data"));
//! store.registry().save(&Facility::with_standard_layout("Centro", 10))?;
//! let facility = store.registry().load("Centro")?;
//! # Ok::<(), parkline_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod registry;
pub mod report;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Store, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use registry::{FacilityRecord, FacilityRegistry};
pub use report::ReportWriter;
