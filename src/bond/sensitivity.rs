//! Market-rate sensitivity sweep
//!
//! Revalues the same bond across a grid of market rates. Each
//! valuation is pure and independent, so the grid is evaluated in
//! parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::valuation::{value_bond, BondParams};

/// One point of the sensitivity curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatePoint {
    /// Market rate the bond was revalued at, in percent
    pub market_rate_pct: f64,

    /// Present value at that rate
    pub present_value: f64,
}

/// Revalue the bond at each market rate in `rates`.
///
/// Output preserves the input rate order. For positive cash flows the
/// present value strictly decreases as the discount rate increases.
pub fn market_rate_sweep(params: &BondParams, rates: &[f64]) -> Vec<RatePoint> {
    rates
        .par_iter()
        .map(|&market_rate_pct| {
            let valuation = value_bond(&BondParams {
                market_rate_pct,
                ..params.clone()
            });
            RatePoint {
                market_rate_pct,
                present_value: valuation.present_value,
            }
        })
        .collect()
}

/// Sweep over whole-percent market rates from `min_pct` through
/// `max_pct` inclusive (the interactive sensitivity chart uses 0..=20).
pub fn integer_rate_sweep(params: &BondParams, min_pct: u32, max_pct: u32) -> Vec<RatePoint> {
    let rates: Vec<f64> = (min_pct..=max_pct).map(f64::from).collect();
    market_rate_sweep(params, &rates)
}
