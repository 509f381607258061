//! Application state for the payroll API.

use std::sync::Arc;

use crate::config::{ConfigLoader, RateSchedule};

/// Shared application state.
///
/// Holds the configuration loaded at startup. It is read-only for the
/// lifetime of the server, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the rate schedule requests are computed with.
    pub fn schedule(&self) -> &RateSchedule {
        self.config.schedule()
    }
}
