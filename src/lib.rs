pub mod error;
pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use crate::error::{ConfigError, Error, Result};
pub use crate::model::failure::FailureModel;
pub use crate::model::lead_time::LeadTimeRange;
pub use crate::simulation::config::{CostConfig, SimulationConfig};
pub use crate::simulation::costs::CostTotals;
pub use crate::simulation::engine::{
    simulate_inventory, simulate_single_step, SimulationTrace, TracePoint,
};
pub use crate::strategy::implementations::{ReorderPolicy, ReorderTable};
pub use crate::strategy::optimization::{optimize_policy, OptimizationResult, QLearningConfig};
pub use crate::strategy::traits::ReorderRule;
