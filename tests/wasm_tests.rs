#![cfg(target_arch = "wasm32")]

use commission_engine::{CommissionSimulation, SimulationConfig, SimulationResults};
use wasm_bindgen_test::*;

fn js_config(trials: usize) -> wasm_bindgen::JsValue {
    let config = SimulationConfig { unit_count: 25, trial_count: trials, ..Default::default() };
    serde_wasm_bindgen::to_value(&config).unwrap()
}

#[wasm_bindgen_test]
fn test_js_constructor_and_run() {
    let sim = CommissionSimulation::from_js(js_config(12)).unwrap();
    assert_eq!(sim.trial_count(), 12);

    let rows: SimulationResults = serde_wasm_bindgen::from_value(sim.run_js(5).unwrap()).unwrap();
    assert_eq!(rows.trials.len(), 12);
    assert_eq!(rows, sim.run_seeded(5));
}

#[wasm_bindgen_test]
fn test_js_constructor_rejects_bad_config() {
    assert!(CommissionSimulation::from_js(js_config(0)).is_err());
}
