// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Commission Forecast Engine - Random Input Generator

//! Per-trial random inputs: a normally distributed percent-to-target and a
//! weighted choice from the target menu for every rep.
//!
//! The generator never owns a random source. Callers pass one in, which keeps
//! runs reproducible and lets every trial use its own stream.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_distr::Normal;

use crate::config::{ConfigError, SimulationConfig};
use crate::types::UnitDraw;

/// Round to 2 decimals, ties to even.
///
/// Applied to every ratio before the payout tier lookup. 0.125 becomes 0.12
/// and 0.995 becomes 1.00.
pub fn round_ratio(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

// ─── Input Generator ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct InputGenerator {
    performance: Normal<f64>,
    targets: WeightedIndex<f64>,
    target_values: Vec<f64>,
    unit_count: usize,
}

impl InputGenerator {
    /// Validate `config` and build both sampling distributions.
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let performance = Normal::new(config.performance_mean, config.performance_stddev)
            .map_err(|_| ConfigError::InvalidStdDev(config.performance_stddev))?;
        let targets = WeightedIndex::new(&config.target_probabilities)
            .map_err(|_| ConfigError::ProbabilitySum {
                sum: config.target_probabilities.iter().sum(),
            })?;

        Ok(Self {
            performance,
            targets,
            target_values: config.target_values.clone(),
            unit_count: config.unit_count,
        })
    }

    pub fn unit_count(&self) -> usize {
        self.unit_count
    }

    /// Draw `unit_count` reps for one trial.
    ///
    /// All targets are drawn first, then all ratios. The two sequences are
    /// independent; pairing is by position only.
    pub fn draw_trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<UnitDraw> {
        let targets: Vec<f64> = (0..self.unit_count)
            .map(|_| self.target_values[self.targets.sample(rng)])
            .collect();

        targets
            .into_iter()
            .map(|assigned_target| UnitDraw {
                performance_ratio: round_ratio(self.performance.sample(rng)),
                assigned_target,
            })
            .collect()
    }
}
