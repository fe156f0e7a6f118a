// src/io/scenario.rs

use crate::error::{ConfigError, Result};
use crate::simulation::config::{CostConfig, SimulationConfig};
use crate::strategy::optimization::QLearningConfig;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything one run of the binary needs, loaded from a TOML file.
///
/// Every field has a default, so a file only has to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Reorder point of the naive policy, also the optimizer's seed.
    pub reorder_point: u32,
    /// Fixes the random stream; a fresh one is used when absent.
    pub seed: Option<u64>,
    /// Directory the CSV files are written to.
    pub output_dir: PathBuf,
    pub simulation: SimulationConfig,
    pub costs: CostConfig,
    pub learning: QLearningConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            reorder_point: 10,
            seed: None,
            output_dir: PathBuf::from("."),
            simulation: SimulationConfig::default(),
            costs: CostConfig::default(),
            learning: QLearningConfig::default(),
        }
    }
}

impl ScenarioConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let scenario = Self::from_toml(&text)?;
        info!("Loaded scenario from {}", path.display());
        Ok(scenario)
    }

    /// Like [`ScenarioConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("{} not found, using default scenario", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.simulation.validate()?;
        self.costs.validate()?;
        self.learning.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let scenario = ScenarioConfig::from_toml(
            r#"
            reorder_point = 2
            seed = 42

            [simulation]
            horizon = 10

            [learning]
            num_episodes = 500
            "#,
        )
        .unwrap();

        assert_eq!(scenario.reorder_point, 2);
        assert_eq!(scenario.seed, Some(42));
        assert_eq!(scenario.simulation.horizon, 10);
        assert_eq!(scenario.simulation.initial_inventory, 5);
        assert_eq!(scenario.learning.num_episodes, 500);
        assert_eq!(scenario.learning.num_states, 20);
        assert_eq!(scenario.costs, CostConfig::default());
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let err = ScenarioConfig::from_toml("reorder_point = \"ten\"").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let scenario =
            ScenarioConfig::load_or_default(Path::new("./does-not-exist.toml")).unwrap();
        assert_eq!(scenario, ScenarioConfig::default());
    }

    #[test]
    fn test_read_shipped_scenario() {
        let scenario = ScenarioConfig::load(Path::new("./inventory.toml")).unwrap();
        assert!(scenario.validate().is_ok());
    }
}
