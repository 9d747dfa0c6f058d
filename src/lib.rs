// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Commission Forecast Engine

//! Monte Carlo forecast of annual sales-commission payouts.
//!
//! Each trial draws a percent-to-target and a sales target for every rep,
//! applies the tiered commission rate, and totals sales, commission and
//! targets. Repeating the trial many times gives a distribution of payouts
//! instead of a single average-case number.

pub mod config;
pub mod types;
pub mod payout;
pub mod sampler;
pub mod trial;
pub mod simulation;
pub mod stats;

pub use config::{ConfigError, SimulationConfig};
pub use payout::{payout_rate, PayoutTier};
pub use simulation::CommissionSimulation;
pub use stats::{Stats, SummaryTable};
pub use types::*;

use wasm_bindgen::prelude::*;

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[wasm_bindgen]
impl CommissionSimulation {
    /// Build from a plain JS object with the `SimulationConfig` field names.
    #[wasm_bindgen(constructor)]
    pub fn from_js(config: JsValue) -> Result<CommissionSimulation, JsValue> {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let config: SimulationConfig = serde_wasm_bindgen::from_value(config)?;
        CommissionSimulation::new(config).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// All trial rows for `seed`.
    #[wasm_bindgen(js_name = run)]
    pub fn run_js(&self, seed: u64) -> Result<JsValue, JsValue> {
        let results = self.run_seeded(seed);
        Ok(serde_wasm_bindgen::to_value(&results)?)
    }

    /// Summary table for `seed`.
    #[wasm_bindgen(js_name = summary)]
    pub fn summary_js(&self, seed: u64) -> Result<JsValue, JsValue> {
        let summary = self.run_seeded(seed).summary();
        Ok(serde_wasm_bindgen::to_value(&summary)?)
    }

    #[wasm_bindgen(getter, js_name = trialCount)]
    pub fn trial_count(&self) -> usize {
        self.config.trial_count
    }

    #[wasm_bindgen(getter, js_name = unitCount)]
    pub fn unit_count(&self) -> usize {
        self.config.unit_count
    }
}
