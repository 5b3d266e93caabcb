//! Wealth Planner - Personal-finance calculation engine
//!
//! This library provides:
//! - Portfolio growth projection with periodic contributions
//! - Retirement income planning (tax on gains, level monthly pension)
//! - Fixed-coupon bond valuation with market-rate sensitivity sweeps
//! - Report assembly with text and CSV export
//!
//! The calculation core is pure and synchronous: each function maps
//! validated inputs to immutable result values with no shared state.

pub mod bond;
pub mod money;
pub mod portfolio;
pub mod rates;
pub mod report;
pub mod retirement;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use bond::{value_bond, BondParams, BondValuation, ParStatus};
pub use portfolio::{project_growth, GrowthParams, GrowthProjection};
pub use rates::{periodic_rate, Frequency};
pub use retirement::{level_payment, plan_retirement, PayoutOption, RetirementOutcome, TaxSource};
pub use session::SessionContext;
pub use validation::ValidationError;
