//! Flat-rate tax on investment gains

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

/// Where the investment gains were earned
///
/// Closed enumeration with an exhaustive rate mapping: an unrecognized
/// source fails at parse time instead of resolving to a 0% rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxSource {
    /// Local stock exchange, taxed at 5%
    LocalExchange,
    /// Foreign-source income, taxed at 29.5%
    ForeignSource,
}

impl TaxSource {
    /// Flat tax rate applied to the gain, as a decimal fraction
    pub fn rate(&self) -> f64 {
        match self {
            TaxSource::LocalExchange => 0.05,
            TaxSource::ForeignSource => 0.295,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxSource::LocalExchange => "local",
            TaxSource::ForeignSource => "foreign",
        }
    }

    /// Human-readable label with the rate, for forms and reports
    pub fn label(&self) -> &'static str {
        match self {
            TaxSource::LocalExchange => "Local Exchange (5%)",
            TaxSource::ForeignSource => "Foreign Source (29.5%)",
        }
    }
}

impl fmt::Display for TaxSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxSource {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(TaxSource::LocalExchange),
            "foreign" => Ok(TaxSource::ForeignSource),
            other => Err(ValidationError::UnknownTaxSource(other.to_string())),
        }
    }
}

/// Tax owed on a realized gain.
///
/// `gain` must be non-negative; the retirement planner rejects
/// gross < contributed before ever calling this.
pub fn tax_on_gain(gain: f64, source: TaxSource) -> f64 {
    gain * source.rate()
}
