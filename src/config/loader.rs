//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, PayrollMetadata, RateSchedule};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── payroll.yaml   # Metadata
/// └── schedule.yaml  # Rate schedule (thresholds, multipliers, brackets)
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("Loaded schedule: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or describes a structurally invalid schedule.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PayrollMetadata>(&path.join("payroll.yaml"))?;
        let schedule = Self::load_yaml::<RateSchedule>(&path.join("schedule.yaml"))?;
        schedule.validate()?;

        debug!(
            code = %metadata.code,
            version = %metadata.version,
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(metadata, schedule),
        })
    }

    /// Creates a loader around the built-in standard schedule.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        self.config.metadata()
    }

    /// Returns the rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        self.config.schedule()
    }
}
