//! # Command-Line Flags
//!
//! Flags win over `PARKLINE_*` environment variables, which win over the
//! defaults in [`ConfigState`].

use std::path::PathBuf;

use clap::ArgAction;

use crate::state::ConfigState;

#[derive(Debug, clap::Parser)]
#[command(name = "parkline", version, about = "Parking facility operator console")]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding the facility registry and the reports
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Facility registry file (default: <data-dir>/facilities.txt)
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Directory for vehicle report files (default: <data-dir>/reports)
    #[arg(long)]
    pub reports_dir: Option<PathBuf>,

    /// Print command results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Applies the flags that were given on top of `config`.
    pub fn apply(&self, mut config: ConfigState) -> ConfigState {
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(path) = &self.registry {
            config.registry_path = Some(path.clone());
        }
        if let Some(dir) = &self.reports_dir {
            config.reports_dir = Some(dir.clone());
        }
        if self.json {
            config.json_output = true;
        }
        config
    }
}
