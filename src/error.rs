// src/error.rs

use thiserror::Error;

/// Configuration problems detected before a simulation or optimization starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Weibull shape must be positive, got {0}")]
    NonPositiveShape(f64),

    #[error("Weibull scale must be positive, got {0}")]
    NonPositiveScale(f64),

    #[error("Horizon must be at least one step")]
    ZeroHorizon,

    #[error("Lead time range is inverted: min {min} > max {max}")]
    InvertedLeadTimeRange { min: f64, max: f64 },

    #[error("Lead time range must be finite, got [{min}, {max}]")]
    NonFiniteLeadTimeRange { min: f64, max: f64 },

    #[error("Cost '{name}' must be non-negative, got {value}")]
    NegativeCost { name: &'static str, value: f64 },

    #[error("Q-learning needs at least one state")]
    EmptyStateSpace,

    #[error("Q-learning needs at least one action")]
    EmptyActionSpace,

    #[error("Exploration rate must lie in [0, 1], got {0}")]
    ExplorationRateOutOfRange(f64),

    #[error("Learning rate must lie in [0, 1], got {0}")]
    LearningRateOutOfRange(f64),

    #[error("Discount factor must lie in [0, 1], got {0}")]
    DiscountFactorOutOfRange(f64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse scenario file: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
