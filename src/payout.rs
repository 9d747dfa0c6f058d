// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Commission Forecast Engine - Payout Rate Rule

use serde::{Deserialize, Serialize};

// ─── Payout Tier ────────────────────────────────────────────────────────────

/// Commission tier selected by percent-to-target.
///
/// Upper bounds are inclusive: 0.90 is `Base`, 0.99 is `Partial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoutTier {
    /// x <= 0.90
    Base,
    /// 0.90 < x <= 0.99
    Partial,
    /// x > 0.99
    Full,
}

impl PayoutTier {
    pub const BASE_CEILING: f64 = 0.90;
    pub const PARTIAL_CEILING: f64 = 0.99;

    /// Expects a ratio already rounded to 2 decimals.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= Self::BASE_CEILING {
            Self::Base
        } else if ratio <= Self::PARTIAL_CEILING {
            Self::Partial
        } else {
            Self::Full
        }
    }

    pub fn rate(&self) -> f64 {
        match self {
            Self::Base => 0.02,
            Self::Partial => 0.03,
            Self::Full => 0.04,
        }
    }
}

/// Commission rate for a percent-to-target. Total over all inputs.
pub fn payout_rate(ratio: f64) -> f64 {
    PayoutTier::from_ratio(ratio).rate()
}
