// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Commission Forecast Engine - Simulation Driver

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};
use wasm_bindgen::prelude::*;

use crate::config::{ConfigError, SimulationConfig};
use crate::sampler::InputGenerator;
use crate::trial;
use crate::types::*;

/// Trials between progress log lines.
const PROGRESS_INTERVAL: usize = 100;

// ─── CommissionSimulation struct ────────────────────────────────────────────

#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct CommissionSimulation {
    pub(crate) config: SimulationConfig,
    pub(crate) generator: InputGenerator,
}

/// Independent random stream for one trial of a seeded run.
///
/// Every trial shares the ChaCha key derived from `seed` and gets its own
/// stream id, so trials never overlap and can be evaluated in any order.
pub fn trial_rng(seed: u64, trial_index: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(trial_index as u64);
    rng
}

// ─── Internal Logic (Testable, pure Rust) ───────────────────────────────────

impl CommissionSimulation {
    /// Validate `config` up front. No sampling happens on error.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let generator = InputGenerator::new(&config)?;
        Ok(Self { config, generator })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// One trial drawn from the caller's random source.
    pub fn run_trial<R: Rng + ?Sized>(&self, rng: &mut R) -> TrialResult {
        trial::evaluate_trial(&self.generator.draw_trial(rng))
    }

    /// One trial with its per-rep breakdown kept for inspection.
    pub fn inspect_trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<UnitSample> {
        trial::sample_units(&self.generator.draw_trial(rng))
    }

    /// Map each trial index to a result on its own stream, collect in order.
    ///
    /// Identical `(seed, config)` pairs yield bit-identical results.
    pub fn run_seeded(&self, seed: u64) -> SimulationResults {
        let trial_count = self.config.trial_count;
        info!(
            trials = trial_count,
            units = self.config.unit_count,
            seed,
            "Running commission simulation"
        );

        let trials: Vec<TrialResult> = (0..trial_count)
            .map(|i| {
                let result = self.run_trial(&mut trial_rng(seed, i));
                if (i + 1) % PROGRESS_INTERVAL == 0 {
                    debug!(trial = i + 1, of = trial_count, "Simulation progress");
                }
                result
            })
            .collect();

        info!(trials = trials.len(), "Simulation complete");
        SimulationResults { seed: Some(seed), trials }
    }

    /// Run every trial sequentially off a single caller-supplied source.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> SimulationResults {
        let trial_count = self.config.trial_count;
        info!(trials = trial_count, units = self.config.unit_count, "Running commission simulation");

        let trials: Vec<TrialResult> = (0..trial_count).map(|_| self.run_trial(rng)).collect();

        info!(trials = trials.len(), "Simulation complete");
        SimulationResults { seed: None, trials }
    }

    /// Seeded run with a fresh seed from OS entropy. The seed is logged and
    /// kept on the results so the run can be replayed.
    pub fn run(&self) -> SimulationResults {
        let seed: u64 = rand::random();
        info!(seed, "Drew simulation seed from entropy");
        self.run_seeded(seed)
    }
}
