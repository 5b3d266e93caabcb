//! Input validation for UI-facing parameters
//!
//! The calculation core trusts its inputs; these checks belong to the
//! calling layer (CLI, report builder) and are applied before any core
//! function runs. Range limits match the interactive form: rates in
//! [0, 50], horizons in [1, 80] years, ages in [18, 100].

use thiserror::Error;

/// Upper bound for UI-facing annual effective rates (percent)
pub const MAX_RATE_PCT: f64 = 50.0;

/// Upper bound for projection/retirement horizons (years)
pub const MAX_YEARS: u32 = 80;

/// Minimum age accepted for age-based horizons
pub const MIN_CURRENT_AGE: u32 = 18;

/// Maximum retirement age accepted for age-based horizons
pub const MAX_RETIREMENT_AGE: u32 = 100;

/// Parameter validation failures surfaced to the user
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be negative (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("annual effective rate must be between 0% and {MAX_RATE_PCT}% (got {value}%)")]
    RateOutOfRange { value: f64 },

    #[error("{field} must be between 1 and {MAX_YEARS} years (got {value})")]
    YearsOutOfRange { field: &'static str, value: u32 },

    #[error("current age must be at least {MIN_CURRENT_AGE} (got {value})")]
    CurrentAgeTooLow { value: u32 },

    #[error("retirement age must be greater than current age ({current} >= {retirement})")]
    RetirementBeforeCurrent { current: u32, retirement: u32 },

    #[error("retirement age must be at most {MAX_RETIREMENT_AGE} (got {value})")]
    RetirementAgeTooHigh { value: u32 },

    #[error("accumulated capital cannot be less than total contributions ({gross} < {contributed})")]
    GainNegative { gross: f64, contributed: f64 },

    #[error("unknown payment frequency '{0}'")]
    UnknownFrequency(String),

    #[error("unknown tax source '{0}'")]
    UnknownTaxSource(String),
}

/// Check that a monetary amount is non-negative
pub fn validate_amount(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    Ok(())
}

/// Check that an annual effective rate is within the accepted range
pub fn validate_rate(value: f64) -> Result<(), ValidationError> {
    if !(0.0..=MAX_RATE_PCT).contains(&value) {
        return Err(ValidationError::RateOutOfRange { value });
    }
    Ok(())
}

/// Check that a horizon in years is within the accepted range
pub fn validate_years(value: u32, field: &'static str) -> Result<(), ValidationError> {
    if value == 0 || value > MAX_YEARS {
        return Err(ValidationError::YearsOutOfRange { field, value });
    }
    Ok(())
}

/// Check that a current/retirement age pair is coherent
pub fn validate_age_range(current: u32, retirement: u32) -> Result<(), ValidationError> {
    if current < MIN_CURRENT_AGE {
        return Err(ValidationError::CurrentAgeTooLow { value: current });
    }
    if retirement <= current {
        return Err(ValidationError::RetirementBeforeCurrent { current, retirement });
    }
    if retirement > MAX_RETIREMENT_AGE {
        return Err(ValidationError::RetirementAgeTooHigh { value: retirement });
    }
    Ok(())
}
