//! # State Module
//!
//! State shared by the console commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │    Store     │  │ LedgerState  │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  registry    │  │  Arc<Mutex<  │  │  data_dir        │              │
//! │  │  reports     │  │  StayLedger  │  │  currency        │              │
//! │  │  (paths)     │  │  >>          │  │  json_output     │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Store: holds paths only, every call opens its own file              │
//! │  • LedgerState: Protected by Arc<Mutex<T>> for exclusive access        │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod ledger;

pub use config::ConfigState;
pub use ledger::LedgerState;
