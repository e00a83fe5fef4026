//! # Parkline Terminal Library
//!
//! Core library for the Parkline operator console.
//! `run()` wires configuration, logging, the store and the menu together.
//!
//! ## Module Organization
//! ```text
//! parkline_terminal/
//! ├── lib.rs            ◄─── You are here (startup & run)
//! ├── cli.rs            ◄─── Command-line flags
//! ├── menu.rs           ◄─── Interactive menu loop
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── ledger.rs     ◄─── Shared stay ledger
//! │   └── config.rs     ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── stay.rs       ◄─── Entry / exit / parked vehicles
//! │   ├── occupancy.rs  ◄─── Availability, report, rates
//! │   ├── facility.rs   ◄─── Facility create / save / load / list
//! │   └── report.rs     ◄─── Vehicle report files
//! └── error.rs          ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod menu;
pub mod state;

use std::io;

use clap::Parser;
use parkline_core::SystemClock;
use parkline_store::Store;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use menu::Console;
use state::ConfigState;

/// Runs the operator console.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Console Startup                                   │
/// │                                                                         │
/// │  1. Parse Flags ──────────────────────────────────────────────────────► │
/// │     • clap derive, -v / --data-dir / --registry / --json                │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, raised by -v, overridden by RUST_LOG               │
/// │                                                                         │
/// │  3. Build Configuration ──────────────────────────────────────────────► │
/// │     • defaults → PARKLINE_* environment → flags                         │
/// │                                                                         │
/// │  4. Open Store ───────────────────────────────────────────────────────► │
/// │     • Linux: ~/.local/share/parkline/facilities.txt                     │
/// │     • Reports under <data dir>/reports                                  │
/// │                                                                         │
/// │  5. Run Menu ─────────────────────────────────────────────────────────► │
/// │     • stdin / stdout, system clock                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.apply(ConfigState::from_env());
    let store = Store::new(config.store_config());
    info!(
        registry = ?store.config().registry_path,
        reports = ?store.config().reports_dir,
        json = config.json_output,
        "Starting Parkline console"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock(), &store, &config).run(SystemClock)?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages from every crate
/// - `RUST_LOG=parkline_store=trace` - Show trace for one crate only
/// - Default: WARN, `-v` INFO, `-vv` DEBUG, `-vvv` TRACE for parkline crates
///
/// Logs go to stderr so they never interleave with menu output.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,parkline_terminal={level},parkline_store={level}",
            level = level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
