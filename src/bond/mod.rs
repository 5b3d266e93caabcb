//! Fixed-coupon bond valuation

mod sensitivity;
mod valuation;

pub use sensitivity::{integer_rate_sweep, market_rate_sweep, RatePoint};
pub use valuation::{value_bond, BondParams, BondValuation, CashFlowRecord, ParStatus};
