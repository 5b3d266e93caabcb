//! Explicit session context threaded between modules
//!
//! Replaces ambient cross-module storage: each module's latest result
//! is carried in one value object that the orchestrating layer passes
//! along, so the retirement flow can consume the portfolio projection
//! without manual re-entry.

use serde::{Deserialize, Serialize};

use crate::bond::BondValuation;
use crate::portfolio::GrowthProjection;
use crate::retirement::RetirementOutcome;

/// Results accumulated over one calculator session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionContext {
    pub portfolio: Option<GrowthProjection>,
    pub retirement: Option<RetirementOutcome>,
    pub bond: Option<BondValuation>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_portfolio(mut self, projection: GrowthProjection) -> Self {
        self.portfolio = Some(projection);
        self
    }

    pub fn with_retirement(mut self, outcome: RetirementOutcome) -> Self {
        self.retirement = Some(outcome);
        self
    }

    pub fn with_bond(mut self, valuation: BondValuation) -> Self {
        self.bond = Some(valuation);
        self
    }

    /// Capital handoff from the portfolio module to the retirement
    /// module: (final balance, total contributions), if a projection
    /// has been run this session.
    pub fn retirement_capital(&self) -> Option<(f64, f64)> {
        self.portfolio
            .as_ref()
            .map(|p| (p.final_balance, p.total_contributions))
    }
}
