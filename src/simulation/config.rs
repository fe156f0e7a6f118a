// src/simulation/config.rs

use crate::error::ConfigError;
use crate::model::failure::FailureModel;
use crate::model::lead_time::LeadTimeRange;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub initial_inventory: u32,
    pub order_amount: u32,
    pub failure: FailureModel,
    pub lead_time: LeadTimeRange,
    pub horizon: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_inventory: 5,
            order_amount: 5,
            failure: FailureModel::default(),
            lead_time: LeadTimeRange::default(),
            horizon: 52, // One year of weeks
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.failure.validate()?;
        self.lead_time.validate()?;
        if self.horizon == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        Ok(())
    }

    /// Same parameters, run for a single step.
    pub fn single_step(&self) -> Self {
        Self {
            horizon: 1,
            ..self.clone()
        }
    }
}

/// Per-step cost rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostConfig {
    /// Cost of holding one unit for one step.
    pub storage_cost_per_step: f64,
    /// Penalty for every step spent with an empty stock.
    pub downtime_cost_per_step: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            storage_cost_per_step: 100.0,
            downtime_cost_per_step: 50_000.0,
        }
    }
}

impl CostConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.storage_cost_per_step >= 0.0) {
            return Err(ConfigError::NegativeCost {
                name: "storage_cost_per_step",
                value: self.storage_cost_per_step,
            });
        }
        if !(self.downtime_cost_per_step >= 0.0) {
            return Err(ConfigError::NegativeCost {
                name: "downtime_cost_per_step",
                value: self.downtime_cost_per_step,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
        assert!(CostConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_problem() {
        let config = SimulationConfig {
            horizon: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroHorizon));

        let config = SimulationConfig {
            failure: FailureModel::new(-1.0, 2.0),
            horizon: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveShape(-1.0)));

        let config = SimulationConfig {
            lead_time: LeadTimeRange::new(12.0, 6.0),
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedLeadTimeRange { .. })
        ));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let costs = CostConfig {
            downtime_cost_per_step: -5.0,
            ..CostConfig::default()
        };
        assert_eq!(
            costs.validate(),
            Err(ConfigError::NegativeCost {
                name: "downtime_cost_per_step",
                value: -5.0
            })
        );
    }

    #[test]
    fn test_single_step_keeps_parameters() {
        let config = SimulationConfig::default().single_step();
        assert_eq!(config.horizon, 1);
        assert_eq!(config.initial_inventory, 5);
    }

    #[test]
    fn test_config_serialization_toml() {
        let config: SimulationConfig = toml::from_str(
            r#"
            initial_inventory = 8
            horizon = 10

            [lead_time]
            min = 1.0
            max = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_inventory, 8);
        assert_eq!(config.horizon, 10);
        assert_eq!(config.lead_time, LeadTimeRange::new(1.0, 2.0));
        // missing fields keep their defaults
        assert_eq!(config.order_amount, 5);
        assert_eq!(config.failure, FailureModel::default());
    }
}
