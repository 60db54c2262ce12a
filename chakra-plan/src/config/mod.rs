//! Planner configuration loading.
//!
//! Loads planner tuning from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```
//! use chakra_plan::config::PlannerConfig;
//!
//! // Built-in defaults (no file needed)
//! let config = PlannerConfig::default();
//! assert_eq!(config.grid.resolution, 100);
//!
//! // Or parse YAML directly
//! let config = PlannerConfig::from_yaml("grid:\n  resolution: 36\n").unwrap();
//! let build_config = config.to_build_config();
//! assert_eq!(build_config.resolution, 36);
//! ```
//!
//! [`PlannerConfig::load_default`] reads `configs/planner.yaml` when it
//! exists and falls back to the defaults otherwise.
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   resolution: 100   # cells per joint (3.6° each)
//!   parallel: true    # classify cells on all cores
//! ```

pub(crate) mod defaults;
mod error;
mod grid;
mod planner;

pub use error::ConfigLoadError;
pub use grid::GridSection;
pub use planner::{DEFAULT_CONFIG_PATH, PlannerConfig};
