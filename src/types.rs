// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Commission Forecast Engine - Type Definitions

use serde::{Deserialize, Serialize};

use crate::payout::payout_rate;

// ─── Per-Unit Records ───────────────────────────────────────────────────────

/// Raw random input for one rep in one trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitDraw {
    /// Percent to target, already rounded to 2 decimals.
    pub performance_ratio: f64,
    pub assigned_target: f64,
}

/// One evaluated rep: the draw plus everything derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitSample {
    pub performance_ratio: f64,
    pub assigned_target: f64,
    pub realized_amount: f64,
    pub payout_rate: f64,
    pub payout_amount: f64,
}

impl UnitSample {
    pub fn from_draw(draw: UnitDraw) -> Self {
        let realized_amount = draw.performance_ratio * draw.assigned_target;
        let payout_rate = payout_rate(draw.performance_ratio);
        Self {
            performance_ratio: draw.performance_ratio,
            assigned_target: draw.assigned_target,
            realized_amount,
            payout_rate,
            payout_amount: payout_rate * realized_amount,
        }
    }
}

// ─── Trial Output ───────────────────────────────────────────────────────────

/// Totals across all reps of one trial, rounded to whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrialResult {
    pub total_realized_amount: f64,
    pub total_payout_amount: f64,
    pub total_assigned_target: f64,
}

/// Which [`TrialResult`] column a statistic or table refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrialField {
    RealizedAmount,
    PayoutAmount,
    AssignedTarget,
}

impl TrialField {
    pub const ALL: [TrialField; 3] = [
        TrialField::RealizedAmount,
        TrialField::PayoutAmount,
        TrialField::AssignedTarget,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::RealizedAmount => "Sales",
            Self::PayoutAmount => "Commission_Amount",
            Self::AssignedTarget => "Sales_Target",
        }
    }
}

impl TrialResult {
    pub fn get(&self, field: TrialField) -> f64 {
        match field {
            TrialField::RealizedAmount => self.total_realized_amount,
            TrialField::PayoutAmount => self.total_payout_amount,
            TrialField::AssignedTarget => self.total_assigned_target,
        }
    }
}

// ─── Simulation Output ──────────────────────────────────────────────────────

/// The kernel's output table: one row per trial, in trial order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResults {
    /// Seed of the per-trial streams, if the run was seeded.
    pub seed: Option<u64>,
    pub trials: Vec<TrialResult>,
}

impl SimulationResults {
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    pub fn column(&self, field: TrialField) -> Vec<f64> {
        self.trials.iter().map(|t| t.get(field)).collect()
    }

    pub fn summary(&self) -> crate::stats::SummaryTable {
        crate::stats::SummaryTable::from_trials(&self.trials)
    }
}
