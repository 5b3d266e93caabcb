//! Retirement payout planning
//!
//! Orchestrates the gain check, tax, and pension calculations into a
//! single outcome, and runs the retirement-age comparison grid.

use serde::{Deserialize, Serialize};

use super::annuity::level_payment;
use super::tax::{tax_on_gain, TaxSource};
use crate::validation::ValidationError;

/// Reference retirement age the comparison grid is anchored to
pub const BASELINE_RETIREMENT_AGE: u32 = 65;

/// Pension horizon used for age-comparison scenarios (years)
pub const COMPARISON_PENSION_YEARS: u32 = 20;

/// Ages evaluated by the comparison grid
pub const DEFAULT_COMPARISON_AGES: [u32; 5] = [60, 62, 65, 68, 70];

/// How the retiree takes the money out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PayoutOption {
    /// Level monthly pension over a fixed number of years
    MonthlyPension {
        years: u32,
        /// Annual effective rate earned during retirement, in percent
        annual_rate_pct: f64,
    },
    /// Single lump-sum withdrawal of the net capital
    LumpSum,
}

/// Complete retirement outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementOutcome {
    /// Capital accumulated at retirement, before tax
    pub gross_capital: f64,

    /// Everything paid in over the accumulation phase
    pub total_contributed: f64,

    /// Gross capital minus contributions (non-negative by construction)
    pub gain: f64,

    /// Tax owed on the gain
    pub tax: f64,

    /// Gross capital minus tax
    pub net_capital: f64,

    /// Level monthly payment; 0 for a lump-sum payout
    pub monthly_pension: f64,

    /// Number of monthly payments; 0 for a lump-sum payout
    pub pension_months: u32,
}

/// One row of the retirement-age comparison grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeScenario {
    pub age: u32,
    /// Net capital compounded from the baseline age to this age
    pub capital_at_age: f64,
    pub monthly_pension: f64,
}

/// Plan a retirement payout from accumulated capital.
///
/// Rejects `gross_capital < total_contributed` before any tax or
/// annuity math runs; a negative gain is a user-input error, not a
/// calculation case.
pub fn plan_retirement(
    gross_capital: f64,
    total_contributed: f64,
    source: TaxSource,
    payout: PayoutOption,
) -> Result<RetirementOutcome, ValidationError> {
    let gain = gross_capital - total_contributed;
    if gain < 0.0 {
        return Err(ValidationError::GainNegative {
            gross: gross_capital,
            contributed: total_contributed,
        });
    }

    let tax = tax_on_gain(gain, source);
    let net_capital = gross_capital - tax;

    let (monthly_pension, pension_months) = match payout {
        PayoutOption::MonthlyPension { years, annual_rate_pct } => {
            (level_payment(net_capital, annual_rate_pct, years), years * 12)
        }
        PayoutOption::LumpSum => (0.0, 0),
    };

    Ok(RetirementOutcome {
        gross_capital,
        total_contributed,
        gain,
        tax,
        net_capital,
        monthly_pension,
        pension_months,
    })
}

/// Compare the monthly pension across candidate retirement ages.
///
/// Capital is compounded from the baseline age: `net_capital *
/// (1 + r)^(age - 65)`, so ages below 65 discount rather than grow.
/// Each scenario then pays a 20-year pension at the same rate.
pub fn compare_retirement_ages(
    net_capital: f64,
    annual_rate_pct: f64,
    ages: &[u32],
) -> Vec<AgeScenario> {
    ages.iter()
        .map(|&age| {
            let exponent = age as i32 - BASELINE_RETIREMENT_AGE as i32;
            let capital_at_age = net_capital * (1.0 + annual_rate_pct / 100.0).powi(exponent);
            AgeScenario {
                age,
                capital_at_age,
                monthly_pension: level_payment(
                    capital_at_age,
                    annual_rate_pct,
                    COMPARISON_PENSION_YEARS,
                ),
            }
        })
        .collect()
}
