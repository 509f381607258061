//! Configuration loading and management for the payroll engine.
//!
//! This module provides the rate schedule consumed by every calculator and
//! the functionality to load it, together with its metadata, from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{Band, PayrollConfig, PayrollMetadata, PenaltyRule, ProgressiveSchedule, RateSchedule};
