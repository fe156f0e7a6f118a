// src/model/lead_time.rs

use crate::error::ConfigError;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

/// Bounds of the supplier lead time, in steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadTimeRange {
    pub min: f64,
    pub max: f64,
}

impl Default for LeadTimeRange {
    fn default() -> Self {
        Self {
            min: 6.0,
            max: 12.0,
        }
    }
}

impl LeadTimeRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min <= self.max) {
            return Err(ConfigError::InvertedLeadTimeRange {
                min: self.min,
                max: self.max,
            });
        }
        // Uniform sampling needs finite bounds and a width with headroom
        // below f64::MAX.
        let width = self.max - self.min;
        if !self.min.is_finite() || !self.max.is_finite() || !(2.0 * width).is_finite() {
            return Err(ConfigError::NonFiniteLeadTimeRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Lead times drawn once per run, one independent sample per step.
///
/// A sample only matters on a step where an outstanding order is eligible to
/// arrive; the others are drawn and never read.
#[derive(Debug, Clone)]
pub struct LeadTimeSchedule {
    lead_times: Vec<f64>,
}

impl LeadTimeSchedule {
    pub fn draw<R: Rng + ?Sized>(
        range: &LeadTimeRange,
        horizon: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        range.validate()?;
        let uniform = Uniform::new_inclusive(range.min, range.max);
        let lead_times = (0..horizon).map(|_| uniform.sample(rng)).collect();
        Ok(Self { lead_times })
    }

    /// Lead time for `step`; `None` past the end of the horizon.
    pub fn get(&self, step: usize) -> Option<f64> {
        self.lead_times.get(step).copied()
    }

    pub fn len(&self) -> usize {
        self.lead_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lead_times.is_empty()
    }
}
