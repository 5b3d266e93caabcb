//! Output structures for portfolio growth projections

use serde::{Deserialize, Serialize};

/// One period of the growth schedule
///
/// Monetary fields are rounded to cents at emission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// Period number (1-indexed)
    pub period: u32,

    /// Contribution made this period
    pub contribution: f64,

    /// Interest earned on the balance this period
    pub interest: f64,

    /// Balance at end of period
    pub balance: f64,

    /// Initial amount plus all contributions through this period
    pub cumulative_contributions: f64,
}

/// Complete result of a growth projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthProjection {
    /// Balance at the end of the final period, rounded to cents
    pub final_balance: f64,

    /// Initial amount + contribution x number of periods, rounded to cents
    pub total_contributions: f64,

    /// Per-period schedule in increasing period order
    pub schedule: Vec<PeriodRecord>,
}

impl GrowthProjection {
    /// Summary statistics over the schedule
    pub fn summary(&self) -> GrowthSummary {
        let total_interest: f64 = self.schedule.iter().map(|r| r.interest).sum();

        GrowthSummary {
            total_periods: self.schedule.len() as u32,
            final_balance: self.final_balance,
            total_contributions: self.total_contributions,
            gain: self.final_balance - self.total_contributions,
            total_interest,
        }
    }
}

/// Summary statistics for a growth projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub total_periods: u32,
    pub final_balance: f64,
    pub total_contributions: f64,
    /// Final balance minus everything paid in
    pub gain: f64,
    /// Sum of per-period interest as emitted (rounded per period)
    pub total_interest: f64,
}
