// src/model/failure.rs

use crate::error::ConfigError;
use rand_distr::Weibull;
use serde::{Deserialize, Serialize};

/// Time-to-failure model of the installed part.
///
/// Each failure consumes one spare from stock. The time until the next failure
/// is drawn from a Weibull distribution with shape `beta` and scale `lambda`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FailureModel {
    pub shape: f64,
    pub scale: f64,
}

impl Default for FailureModel {
    fn default() -> Self {
        Self {
            shape: 4.0,
            scale: 2.0,
        }
    }
}

impl FailureModel {
    pub fn new(shape: f64, scale: f64) -> Self {
        Self { shape, scale }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Written as negations so NaN is rejected too.
        if !(self.shape > 0.0) {
            return Err(ConfigError::NonPositiveShape(self.shape));
        }
        if !(self.scale > 0.0) {
            return Err(ConfigError::NonPositiveScale(self.scale));
        }
        Ok(())
    }

    /// Builds the sampling distribution for remaining lifetimes.
    pub fn distribution(&self) -> Result<Weibull<f64>, ConfigError> {
        self.validate()?;
        // rand_distr takes (scale, shape), the opposite order of the usual notation.
        Weibull::new(self.scale, self.shape).map_err(|_| ConfigError::NonPositiveScale(self.scale))
    }

    /// Probability density of a failure after `x` time units.
    pub fn density(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let z = x / self.scale;
        (self.shape / self.scale) * z.powf(self.shape - 1.0) * (-z.powf(self.shape)).exp()
    }

    /// Samples the density on `points` evenly spaced values in `[0, x_max]`.
    ///
    /// Used to plot the failure curve next to the stock chart.
    pub fn density_curve(&self, x_max: f64, points: usize) -> Vec<(f64, f64)> {
        match points {
            0 => Vec::new(),
            1 => vec![(0.0, self.density(0.0))],
            _ => {
                let step = x_max / (points - 1) as f64;
                (0..points)
                    .map(|i| {
                        let x = i as f64 * step;
                        (x, self.density(x))
                    })
                    .collect()
            }
        }
    }
}
