// Scenario Definitions — named starting configs for the forecast runner
// The CLI can still override any field after a scenario is picked

use commission_engine::SimulationConfig;

/// Target menu used by most scenarios: (target, probability).
const STANDARD_TARGETS: &[(f64, f64)] = &[
    (75_000.0, 0.30),
    (100_000.0, 0.30),
    (200_000.0, 0.20),
    (300_000.0, 0.10),
    (400_000.0, 0.05),
    (500_000.0, 0.05),
];

// ─── Scenario Configuration ─────────────────────────────────────────────────

pub struct Scenario {
    pub name: &'static str,
    pub label: &'static str,
    pub performance_mean: f64,
    pub performance_stddev: f64,
    pub unit_count: usize,
    pub trial_count: usize,
    pub targets: &'static [(f64, f64)],
}

impl Scenario {
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            performance_mean: self.performance_mean,
            performance_stddev: self.performance_stddev,
            unit_count: self.unit_count,
            trial_count: self.trial_count,
            target_values: self.targets.iter().map(|(v, _)| *v).collect(),
            target_probabilities: self.targets.iter().map(|(_, p)| *p).collect(),
        }
    }
}

// ─── Scenario Definitions ───────────────────────────────────────────────────

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "BASELINE", label: "Historical spread (100% ± 10%)",
            performance_mean: 1.0, performance_stddev: 0.1,
            unit_count: 500, trial_count: 1000, targets: STANDARD_TARGETS,
        },
        Scenario {
            name: "STEADY", label: "Every rep exactly on target",
            performance_mean: 1.0, performance_stddev: 0.0,
            unit_count: 500, trial_count: 1000, targets: STANDARD_TARGETS,
        },
        Scenario {
            name: "VOLATILE", label: "Wide spread (100% ± 20%)",
            performance_mean: 1.0, performance_stddev: 0.2,
            unit_count: 500, trial_count: 1000, targets: STANDARD_TARGETS,
        },
        Scenario {
            name: "SOFT_YEAR", label: "Weak year (92% ± 10%)",
            performance_mean: 0.92, performance_stddev: 0.1,
            unit_count: 500, trial_count: 1000, targets: STANDARD_TARGETS,
        },
        Scenario {
            name: "FLAT_TARGETS", label: "Single 200k target for all reps",
            performance_mean: 1.0, performance_stddev: 0.1,
            unit_count: 500, trial_count: 1000, targets: &[(200_000.0, 1.0)],
        },
    ]
}

pub fn find(name: &str) -> Option<Scenario> {
    let lower = name.to_lowercase();
    scenarios().into_iter().find(|s| s.name.to_lowercase() == lower)
}
