//! Grid configuration section.

use serde::{Deserialize, Serialize};

use crate::grid::GridBuildConfig;

use super::defaults;

/// Grid configuration section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSection {
    /// Cells per joint axis (360° / resolution per cell)
    #[serde(default = "defaults::resolution")]
    pub resolution: usize,

    /// Classify cells on the rayon thread pool
    #[serde(default = "defaults::enabled")]
    pub parallel: bool,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            resolution: defaults::resolution(),
            parallel: defaults::enabled(),
        }
    }
}

impl GridSection {
    /// Convert to GridBuildConfig
    pub fn to_build_config(&self) -> GridBuildConfig {
        GridBuildConfig {
            resolution: self.resolution,
            parallel: self.parallel,
        }
    }

    /// Angular size of one cell in degrees
    pub fn cell_size_degrees(&self) -> f64 {
        360.0 / self.resolution as f64
    }
}
