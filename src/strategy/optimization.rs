// src/strategy/optimization.rs

//! Reorder-point optimization by tabular Q-learning.
//!
//! The state is the stock level, the action is the reorder point, both
//! discretised into `[0, n)`. The environment is the stock simulator run for
//! a single step, so each episode is one transition.

use crate::error::{ConfigError, Result};
use crate::simulation::config::{CostConfig, SimulationConfig};
use crate::simulation::costs::CostTotals;
use crate::simulation::engine::simulate_single_step;
use crate::strategy::implementations::ReorderPolicy;
use crate::strategy::q_table::QTable;
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QLearningConfig {
    pub num_states: usize,
    pub num_actions: usize,
    pub learning_rate: f64,
    pub discount_factor: f64,
    pub epsilon: f64,
    pub num_episodes: usize,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            num_states: 20,
            num_actions: 20,
            learning_rate: 0.01,
            discount_factor: 0.8,
            epsilon: 0.1,
            num_episodes: 100_000,
        }
    }
}

impl QLearningConfig {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.num_states == 0 {
            return Err(ConfigError::EmptyStateSpace);
        }
        if self.num_actions == 0 {
            return Err(ConfigError::EmptyActionSpace);
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ConfigError::ExplorationRateOutOfRange(self.epsilon));
        }
        if !(0.0..=1.0).contains(&self.learning_rate) {
            return Err(ConfigError::LearningRateOutOfRange(self.learning_rate));
        }
        if !(0.0..=1.0).contains(&self.discount_factor) {
            return Err(ConfigError::DiscountFactorOutOfRange(self.discount_factor));
        }
        Ok(())
    }
}

/// A learned reorder point per stock level, plus the estimated cost of
/// following it from the initial stock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    pub policy: Vec<u32>,
    pub estimated_cost: f64,
}

impl OptimizationResult {
    /// Turns the learned table into a simulation policy. Levels beyond the
    /// table use `fallback`.
    pub fn into_policy(self, fallback: u32) -> ReorderPolicy {
        ReorderPolicy::from_table(self.policy, fallback)
    }
}

pub struct PolicyOptimizer<'a> {
    costs: &'a CostConfig,
    sim: &'a SimulationConfig,
    learning: &'a QLearningConfig,
    seed_reorder_point: u32,
    pub q_table: QTable,
}

impl<'a> PolicyOptimizer<'a> {
    /// Validates all inputs and draws the initial Q-table. The table is the
    /// first thing taken from `rng`.
    pub fn new<R: Rng + ?Sized>(
        costs: &'a CostConfig,
        seed_reorder_point: u32,
        sim: &'a SimulationConfig,
        learning: &'a QLearningConfig,
        rng: &mut R,
    ) -> Result<Self> {
        costs.validate()?;
        sim.validate()?;
        learning.validate()?;

        let q_table = QTable::random(learning.num_states, learning.num_actions, rng);
        Ok(Self {
            costs,
            sim,
            learning,
            seed_reorder_point,
            q_table,
        })
    }

    /// Stock level after one step with `reorder_point`, as a table row.
    fn observe<R: Rng + ?Sized>(&self, reorder_point: u32, rng: &mut R) -> Result<usize> {
        let trace = simulate_single_step(self.sim, reorder_point, rng)?;
        Ok(self.q_table.clamp_state(trace.last_level().unwrap_or(0)))
    }

    /// One-step storage and downtime cost for every reorder point in
    /// `[0, num_states)`.
    fn one_step_costs<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(Vec<f64>, Vec<f64>)> {
        let n = self.learning.num_states;
        let mut storage_costs = vec![0.0; n];
        let mut downtime_costs = vec![0.0; n];
        for s in 0..n {
            let trace = simulate_single_step(self.sim, s as u32, rng)?;
            let totals = CostTotals::from_trace(&trace, self.costs);
            storage_costs[s] = totals.storage_cost;
            downtime_costs[s] = totals.downtime_cost;
        }
        Ok((storage_costs, downtime_costs))
    }

    /// Runs one episode and returns the reward it observed.
    pub fn run_episode<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<f64> {
        // Price every state
        let (storage_costs, downtime_costs) = self.one_step_costs(rng)?;

        // Reset: state reached from the initial stock under the seed reorder point
        let state = self.observe(self.seed_reorder_point, rng)?;

        // Single transition
        let action = self
            .q_table
            .sample_action(state, self.learning.epsilon, rng);
        let next_state = self.observe(action as u32, rng)?;
        let reward = -(storage_costs[next_state] + downtime_costs[next_state]);

        self.q_table.update(
            state,
            action,
            reward,
            next_state,
            self.learning.learning_rate,
            self.learning.discount_factor,
        );
        Ok(reward)
    }

    /// Extracts the greedy policy and prices it with one final step.
    pub fn finish<R: Rng + ?Sized>(self, rng: &mut R) -> Result<OptimizationResult> {
        let policy: Vec<u32> = self
            .q_table
            .greedy_policy()
            .into_iter()
            .map(|a| a as u32)
            .collect();

        let seed_state = self.q_table.clamp_state(self.seed_reorder_point);
        let reorder_point = policy[seed_state];
        let trace = simulate_single_step(self.sim, reorder_point, rng)?;
        let estimated_cost = CostTotals::from_trace(&trace, self.costs).overall_cost;

        debug!("Learned reorder points by stock level: {:?}", policy);
        Ok(OptimizationResult {
            policy,
            estimated_cost,
        })
    }
}

/// Learns a reorder point per stock level.
///
/// # Arguments
/// * `costs` - Storage and downtime cost rates.
/// * `seed_reorder_point` - Reorder point of the naive policy; picks the
///   start state and the row priced at the end.
/// * `sim` - Stock parameters. Only `horizon` is ignored, every simulation
///   here is a single step.
/// * `learning` - Q-learning hyperparameters.
///
/// # Returns
/// The greedy reorder point for each level in `[0, num_states)` and the
/// one-step cost of the one chosen for the seed level.
pub fn optimize_policy<R: Rng + ?Sized>(
    costs: &CostConfig,
    seed_reorder_point: u32,
    sim: &SimulationConfig,
    learning: &QLearningConfig,
    rng: &mut R,
) -> Result<OptimizationResult> {
    let mut optimizer = PolicyOptimizer::new(costs, seed_reorder_point, sim, learning, rng)?;

    let report_every = (learning.num_episodes / 10).max(1);
    let mut reward_sum = 0.0;
    for episode in 0..learning.num_episodes {
        reward_sum += optimizer.run_episode(rng)?;
        if (episode + 1) % report_every == 0 {
            info!(
                "Episode {}/{}: avg. reward {:.1}",
                episode + 1,
                learning.num_episodes,
                reward_sum / report_every as f64
            );
            reward_sum = 0.0;
        }
    }

    optimizer.finish(rng)
}
