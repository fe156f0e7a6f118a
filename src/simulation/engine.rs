// src/simulation/engine.rs

use crate::error::Result;
use crate::model::lead_time::LeadTimeSchedule;
use crate::model::stock::StockState;
use crate::simulation::config::SimulationConfig;
use crate::strategy::implementations::ReorderPolicy;
use crate::strategy::traits::ReorderRule;
use log::{debug, trace};
use rand::Rng;
use rand_distr::{Distribution, Weibull};
use serde::Serialize;

// We make this Serialize so we can write it to CSV later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TracePoint {
    pub step: usize,
    pub inventory: u32,
    pub reorder_flag: bool,
}

/// Stock level and order state per step, in time order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulationTrace {
    pub points: Vec<TracePoint>,
}

impl SimulationTrace {
    pub fn inventory_levels(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.inventory).collect()
    }

    pub fn reorder_flags(&self) -> Vec<bool> {
        self.points.iter().map(|p| p.reorder_flag).collect()
    }

    pub fn last_level(&self) -> Option<u32> {
        self.points.last().map(|p| p.inventory)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub struct StockSimulation<'p, P: ReorderRule + ?Sized> {
    config: SimulationConfig,
    policy: &'p P,

    // Random inputs
    lifetimes: Weibull<f64>,
    lead_times: LeadTimeSchedule,

    pub state: StockState,
    pub current_step: usize,
    pub history: SimulationTrace,
}

impl<'p, P: ReorderRule + ?Sized> StockSimulation<'p, P> {
    /// Validates the config and draws the lead-time schedule and the first
    /// part lifetime, in that order.
    pub fn new<R: Rng + ?Sized>(
        config: SimulationConfig,
        policy: &'p P,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        let lead_times = LeadTimeSchedule::draw(&config.lead_time, config.horizon, rng)?;
        let lifetimes = config.failure.distribution()?;
        let state = StockState::new(config.initial_inventory, lifetimes.sample(rng));

        Ok(Self {
            history: SimulationTrace {
                points: Vec::with_capacity(config.horizon),
            },
            config,
            policy,
            lifetimes,
            lead_times,
            state,
            current_step: 0,
        })
    }

    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        while self.current_step < self.config.horizon {
            self.step(rng);
        }
        debug!(
            "Simulated {} steps with {:?}: final stock {}, {} steps with an open order",
            self.config.horizon,
            self.policy,
            self.state.inventory,
            self.history.points.iter().filter(|p| p.reorder_flag).count()
        );
    }

    fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let step = self.current_step;
        let Some(lead_time) = self.lead_times.get(step) else {
            return;
        };

        // 1. Part wear (may consume a spare)
        if self.state.wear(&self.lifetimes, rng) {
            trace!("Step {}: part failed, stock now {}", step, self.state.inventory);
        }

        // 2. Reorder decision
        let reorder_point = self.policy.reorder_point(self.state.inventory);
        if self.state.place_order_if_needed(reorder_point) {
            trace!(
                "Step {}: stock {} <= reorder point {}, order placed",
                step,
                self.state.inventory,
                reorder_point
            );
        }

        // 3. Arrival
        if self
            .state
            .receive_order_if_arrived(lead_time, self.config.order_amount)
        {
            trace!(
                "Step {}: order of {} arrived after {} steps",
                step,
                self.config.order_amount,
                self.state.ordered_weeks_ago
            );
        }

        // 4. Record & advance
        let inventory = self.state.settle();
        self.history.points.push(TracePoint {
            step,
            inventory,
            reorder_flag: self.state.reorder_flag,
        });
        self.state.advance_order_clock();
        self.current_step += 1;
    }

    pub fn into_trace(self) -> SimulationTrace {
        self.history
    }
}

/// Runs one stock timeline of `config.horizon` steps under `policy`.
pub fn simulate_inventory<P, R>(
    config: &SimulationConfig,
    policy: &P,
    rng: &mut R,
) -> Result<SimulationTrace>
where
    P: ReorderRule + ?Sized,
    R: Rng + ?Sized,
{
    let mut sim = StockSimulation::new(config.clone(), policy, rng)?;
    sim.run(rng);
    Ok(sim.into_trace())
}

/// Runs a single step from the configured initial stock with a fixed
/// reorder point. The optimizer uses this as its environment.
pub fn simulate_single_step<R: Rng + ?Sized>(
    config: &SimulationConfig,
    reorder_point: u32,
    rng: &mut R,
) -> Result<SimulationTrace> {
    simulate_inventory(
        &config.single_step(),
        &ReorderPolicy::Scalar(reorder_point),
        rng,
    )
}
