//! Retirement income planning

mod annuity;
mod planner;
mod tax;

pub use annuity::level_payment;
pub use planner::{
    compare_retirement_ages, plan_retirement, AgeScenario, PayoutOption, RetirementOutcome,
    DEFAULT_COMPARISON_AGES,
};
pub use tax::{tax_on_gain, TaxSource};
