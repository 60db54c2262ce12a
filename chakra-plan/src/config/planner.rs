//! Main PlannerConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::GridBuildConfig;

use super::error::ConfigLoadError;
use super::grid::GridSection;

/// Default config file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/planner.yaml";

/// Full planner configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlannerConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSection,
}

impl PlannerConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/planner.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values a planner cannot run with
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.grid.resolution == 0 {
            return Err(ConfigLoadError::Invalid(
                "grid.resolution must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Convert to GridBuildConfig for OccupancyGridBuilder
    pub fn to_build_config(&self) -> GridBuildConfig {
        self.grid.to_build_config()
    }

    /// Same config with a different grid resolution
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.grid.resolution = resolution;
        self
    }
}
