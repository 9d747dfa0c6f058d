// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Commission Forecast Engine - Trial Evaluator

use crate::types::{TrialResult, UnitDraw, UnitSample};

/// Round an aggregate to whole currency units, ties to even.
pub fn round_total(x: f64) -> f64 {
    x.round_ties_even()
}

/// Apply the payout rule to every draw of a trial.
pub fn sample_units(draws: &[UnitDraw]) -> Vec<UnitSample> {
    draws.iter().copied().map(UnitSample::from_draw).collect()
}

/// Sum one trial's reps into a [`TrialResult`].
///
/// Sums are taken at full precision; only the three totals are rounded.
pub fn evaluate_trial(draws: &[UnitDraw]) -> TrialResult {
    let mut realized = 0.0_f64;
    let mut payout = 0.0_f64;
    let mut target = 0.0_f64;

    for draw in draws {
        let unit = UnitSample::from_draw(*draw);
        realized += unit.realized_amount;
        payout += unit.payout_amount;
        target += unit.assigned_target;
    }

    TrialResult {
        total_realized_amount: round_total(realized),
        total_payout_amount: round_total(payout),
        total_assigned_target: round_total(target),
    }
}
