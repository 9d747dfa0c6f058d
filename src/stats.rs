// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Commission Forecast Engine - Summary Statistics

//! Descriptive statistics over the per-trial totals.
//!
//! Standard deviation is the sample standard deviation (n - 1 denominator).
//! Percentiles interpolate linearly between closest ranks: for probability
//! `p` over the sorted sample `x[0..n]`, the rank is `h = p * (n - 1)` and the
//! value is `x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])`.

use serde::Serialize;

use crate::types::{TrialField, TrialResult};

// ─── Statistics (per-column aggregation) ────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub n: usize,
    pub mean: f64,
    pub std_dev: f64,
    /// 95% confidence interval on the mean.
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self {
                n: 0, mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0,
                min: 0.0, p25: 0.0, p50: 0.0, p75: 0.0, max: 0.0,
            };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        Self {
            n,
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: sorted[0],
            p25: percentile_sorted(&sorted, 0.25),
            p50: percentile_sorted(&sorted, 0.50),
            p75: percentile_sorted(&sorted, 0.75),
            max: sorted[n - 1],
        }
    }

    /// Rows in display order, as (label, value).
    pub fn rows(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.n as f64),
            ("mean", self.mean),
            ("std", self.std_dev),
            ("min", self.min),
            ("25%", self.p25),
            ("50%", self.p50),
            ("75%", self.p75),
            ("max", self.max),
        ]
    }
}

/// Linear-interpolation percentile of an ascending slice.
/// `p` is clamped to [0, 1]. An empty slice yields 0.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    match n {
        0 => return 0.0,
        1 => return sorted[0],
        _ => {}
    }
    let h = p.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

// ─── Summary Table ──────────────────────────────────────────────────────────

/// One [`Stats`] per [`TrialResult`] column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    pub realized_amount: Stats,
    pub payout_amount: Stats,
    pub assigned_target: Stats,
}

impl SummaryTable {
    pub fn from_trials(trials: &[TrialResult]) -> Self {
        let column = |field: TrialField| {
            Stats::from_samples(&trials.iter().map(|t| t.get(field)).collect::<Vec<_>>())
        };
        Self {
            realized_amount: column(TrialField::RealizedAmount),
            payout_amount: column(TrialField::PayoutAmount),
            assigned_target: column(TrialField::AssignedTarget),
        }
    }

    pub fn get(&self, field: TrialField) -> &Stats {
        match field {
            TrialField::RealizedAmount => &self.realized_amount,
            TrialField::PayoutAmount => &self.payout_amount,
            TrialField::AssignedTarget => &self.assigned_target,
        }
    }
}
