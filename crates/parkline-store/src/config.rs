//! # Store Configuration
//!
//! File locations for the registry and reports. Paths are always passed in;
//! nothing in this crate reads process-wide state to find them.

use std::path::{Path, PathBuf};

use crate::registry::FacilityRegistry;
use crate::report::ReportWriter;

/// Registry file name inside the data directory.
pub const REGISTRY_FILE_NAME: &str = "facilities.txt";

/// Reports directory name inside the data directory.
pub const REPORTS_DIR_NAME: &str = "reports";

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use parkline_store::StoreConfig;
///
/// let config = StoreConfig::new("/var/lib/parkline").reports_dir("/tmp/reports");
/// assert!(config.registry_path.ends_with("facilities.txt"));
/// assert_eq!(config.reports_dir.to_str(), Some("/tmp/reports"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Pipe-delimited facility definitions, one per line.
    pub registry_path: PathBuf,

    /// Directory that receives generated vehicle reports.
    pub reports_dir: PathBuf,
}

impl StoreConfig {
    /// Places the registry and the reports directory under `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        StoreConfig {
            registry_path: data_dir.join(REGISTRY_FILE_NAME),
            reports_dir: data_dir.join(REPORTS_DIR_NAME),
        }
    }

    /// Overrides the registry file path.
    pub fn registry_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.registry_path = path.into();
        self
    }

    /// Overrides the reports directory.
    pub fn reports_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.reports_dir = dir.into();
        self
    }
}

// =============================================================================
// Store
// =============================================================================

/// Entry point handing out the registry and the report writer.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Store { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Facility definitions file.
    pub fn registry(&self) -> FacilityRegistry {
        FacilityRegistry::new(&self.config.registry_path)
    }

    /// Vehicle report files.
    pub fn reports(&self) -> ReportWriter {
        ReportWriter::new(&self.config.reports_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_data_dir() {
        let config = StoreConfig::new("/data");
        assert_eq!(config.registry_path, PathBuf::from("/data/facilities.txt"));
        assert_eq!(config.reports_dir, PathBuf::from("/data/reports"));
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::new("/data").registry_path("/etc/parkline/lots.txt");
        assert_eq!(config.registry_path, PathBuf::from("/etc/parkline/lots.txt"));
        assert_eq!(config.reports_dir, PathBuf::from("/data/reports"));

        let store = Store::new(config.clone());
        assert_eq!(store.registry().path(), config.registry_path.as_path());
        assert_eq!(store.reports().dir(), config.reports_dir.as_path());
    }
}
