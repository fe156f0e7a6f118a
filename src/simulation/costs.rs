// src/simulation/costs.rs

use crate::simulation::config::CostConfig;
use crate::simulation::engine::SimulationTrace;
use serde::Serialize;

/// Accumulated costs of one trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostTotals {
    pub storage_cost: f64,
    pub downtime_cost: f64,
    pub overall_cost: f64,
}

impl CostTotals {
    /// Storage is charged per unit held per step, downtime per step with an
    /// empty stock.
    pub fn from_trace(trace: &SimulationTrace, costs: &CostConfig) -> Self {
        Self::from_levels(trace.points.iter().map(|p| p.inventory), costs)
    }

    pub fn from_levels<I>(levels: I, costs: &CostConfig) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut stock_units = 0u64;
        let mut empty_steps = 0u64;
        for level in levels {
            stock_units += u64::from(level);
            if level == 0 {
                empty_steps += 1;
            }
        }

        let storage_cost = stock_units as f64 * costs.storage_cost_per_step;
        let downtime_cost = empty_steps as f64 * costs.downtime_cost_per_step;
        Self {
            storage_cost,
            downtime_cost,
            overall_cost: storage_cost + downtime_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs() -> CostConfig {
        CostConfig {
            storage_cost_per_step: 100.0,
            downtime_cost_per_step: 50_000.0,
        }
    }

    #[test]
    fn test_all_zero_levels_have_no_storage_cost() {
        let totals = CostTotals::from_levels(vec![0; 12], &costs());
        assert_eq!(totals.storage_cost, 0.0);
        assert_eq!(totals.downtime_cost, 12.0 * 50_000.0);
        assert_eq!(totals.overall_cost, totals.downtime_cost);
    }

    #[test]
    fn test_mixed_levels() {
        let totals = CostTotals::from_levels(vec![4, 3, 0, 6], &costs());
        assert_eq!(totals.storage_cost, 1_300.0);
        assert_eq!(totals.downtime_cost, 50_000.0);
        assert_eq!(totals.overall_cost, 51_300.0);
    }

    #[test]
    fn test_empty_trace_costs_nothing() {
        let totals = CostTotals::from_trace(&SimulationTrace::default(), &costs());
        assert_eq!(totals, CostTotals::default());
    }
}
