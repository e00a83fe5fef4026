//! # Configuration State
//!
//! Stores console configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--data-dir`, `--json`, ...)
//! 2. Environment variables (`PARKLINE_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use parkline_core::Money;
use parkline_store::StoreConfig;
use serde::{Deserialize, Serialize};

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Holds the registry file and the reports directory unless they are
    /// set individually.
    pub data_dir: PathBuf,

    /// Overrides `<data_dir>/facilities.txt`
    pub registry_path: Option<PathBuf>,

    /// Overrides `<data_dir>/reports`
    pub reports_dir: Option<PathBuf>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Decimal places shown for amounts: 2 shows cents, 0 hides them
    pub currency_decimals: u8,

    /// Print command results as JSON instead of text
    pub json_output: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Data dir: platform data directory (`~/.local/share/parkline` on
    ///   Linux), or `./parkline-data` if none can be determined
    /// - Currency: `$` with cents
    /// - Output: text
    fn default() -> Self {
        ConfigState {
            data_dir: default_data_dir(),
            registry_path: None,
            reports_dir: None,
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            json_output: false,
        }
    }
}

/// Platform-specific app data directory.
///
/// - **macOS**: `~/Library/Application Support/com.parkline.parkline`
/// - **Windows**: `%APPDATA%\parkline\parkline\data`
/// - **Linux**: `~/.local/share/parkline`
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "parkline", "parkline")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("parkline-data"))
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PARKLINE_DATA_DIR`: Override the data directory
    /// - `PARKLINE_REGISTRY_PATH`: Override the facility registry file
    /// - `PARKLINE_REPORTS_DIR`: Override the reports directory
    /// - `PARKLINE_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `PARKLINE_CURRENCY_DECIMALS`: `0` or `2`
    /// - `PARKLINE_JSON`: `1`/`true` for JSON output
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(dir) = lookup("PARKLINE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(path) = lookup("PARKLINE_REGISTRY_PATH") {
            config.registry_path = Some(PathBuf::from(path));
        }

        if let Some(dir) = lookup("PARKLINE_REPORTS_DIR") {
            config.reports_dir = Some(PathBuf::from(dir));
        }

        if let Some(symbol) = lookup("PARKLINE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("PARKLINE_CURRENCY_DECIMALS") {
            match decimals.trim() {
                "0" => config.currency_decimals = 0,
                "2" => config.currency_decimals = 2,
                _ => {}
            }
        }

        if let Some(json) = lookup("PARKLINE_JSON") {
            config.json_output = matches!(json.trim(), "1" | "true" | "yes");
        }

        config
    }

    /// Store paths derived from this configuration.
    pub fn store_config(&self) -> StoreConfig {
        let mut store = StoreConfig::new(&self.data_dir);
        if let Some(path) = &self.registry_path {
            store = store.registry_path(path);
        }
        if let Some(dir) = &self.reports_dir {
            store = store.reports_dir(dir);
        }
        store
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use parkline_core::Money;
    /// use parkline_terminal::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let whole = (cents / 100).abs();
        let frac = (cents % 100).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!("{}.{:02}", whole, frac)
            } else {
                whole.to_string()
            }
        )
    }
}
