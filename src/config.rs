// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Commission Forecast Engine - Simulation Configuration

//! Run configuration and its validation.
//!
//! A [`SimulationConfig`] is immutable for the duration of a run. Every
//! constraint is checked by [`SimulationConfig::validate`] before the first
//! draw is taken, so a bad config never produces a partial simulation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tolerance on the sum of `target_probabilities`.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("target_values is empty")]
    EmptyTargets,

    #[error("target_values has {values} entries but target_probabilities has {probabilities}")]
    LengthMismatch { values: usize, probabilities: usize },

    #[error("target_values[{index}] must be positive and finite, got {value}")]
    NonPositiveTarget { index: usize, value: f64 },

    #[error("target_probabilities[{index}] must be non-negative and finite, got {value}")]
    InvalidProbability { index: usize, value: f64 },

    #[error("target_probabilities sum to {sum}, expected 1.0 (±1e-6)")]
    ProbabilitySum { sum: f64 },

    #[error("unit_count must be positive")]
    ZeroUnits,

    #[error("trial_count must be positive")]
    ZeroTrials,

    #[error("performance_mean must be finite, got {0}")]
    NonFiniteMean(f64),

    #[error("performance_stddev must be non-negative and finite, got {0}")]
    InvalidStdDev(f64),

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// ─── Simulation Configuration ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Mean of the percent-to-target distribution (1.0 = on target).
    pub performance_mean: f64,
    /// Standard deviation of the percent-to-target distribution. Zero is legal.
    pub performance_stddev: f64,
    /// Reps sampled per trial.
    pub unit_count: usize,
    /// Independent trials (simulated years).
    pub trial_count: usize,
    /// Discrete menu of sales targets.
    pub target_values: Vec<f64>,
    /// Weight of each entry in `target_values`; must sum to 1.
    pub target_probabilities: Vec<f64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            performance_mean: 1.0,
            performance_stddev: 0.1,
            unit_count: 500,
            trial_count: 1000,
            target_values: vec![75_000.0, 100_000.0, 200_000.0, 300_000.0, 400_000.0, 500_000.0],
            target_probabilities: vec![0.3, 0.3, 0.2, 0.1, 0.05, 0.05],
        }
    }
}

impl SimulationConfig {
    /// Load a config from a JSON file. The result is not yet validated.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })
    }

    /// Check every field. Stops at the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unit_count == 0 {
            return Err(ConfigError::ZeroUnits);
        }
        if self.trial_count == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if !self.performance_mean.is_finite() {
            return Err(ConfigError::NonFiniteMean(self.performance_mean));
        }
        if !self.performance_stddev.is_finite() || self.performance_stddev < 0.0 {
            return Err(ConfigError::InvalidStdDev(self.performance_stddev));
        }

        if self.target_values.is_empty() {
            return Err(ConfigError::EmptyTargets);
        }
        if self.target_values.len() != self.target_probabilities.len() {
            return Err(ConfigError::LengthMismatch {
                values: self.target_values.len(),
                probabilities: self.target_probabilities.len(),
            });
        }
        if let Some((index, &value)) = self.target_values.iter().enumerate()
            .find(|(_, v)| !v.is_finite() || **v <= 0.0)
        {
            return Err(ConfigError::NonPositiveTarget { index, value });
        }
        if let Some((index, &value)) = self.target_probabilities.iter().enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0)
        {
            return Err(ConfigError::InvalidProbability { index, value });
        }

        let sum: f64 = self.target_probabilities.iter().sum();
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(ConfigError::ProbabilitySum { sum });
        }

        Ok(())
    }
}
