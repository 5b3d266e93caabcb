//! Rate conversion between annual effective and sub-annual periodic rates
//!
//! Every other calculation in the crate derives its per-period rate here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

/// Payment/compounding frequency within a year
///
/// Closed enumeration: an unrecognized frequency name fails at parse
/// time instead of falling through to a bogus period count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Monthly,
    Bimonthly,
    Quarterly,
    FourMonthly,
    Semiannual,
    Annual,
}

impl Frequency {
    /// Number of periods per year for this frequency
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Monthly => 12,
            Frequency::Bimonthly => 6,
            Frequency::Quarterly => 4,
            Frequency::FourMonthly => 3,
            Frequency::Semiannual => 2,
            Frequency::Annual => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Bimonthly => "bimonthly",
            Frequency::Quarterly => "quarterly",
            Frequency::FourMonthly => "four-monthly",
            Frequency::Semiannual => "semiannual",
            Frequency::Annual => "annual",
        }
    }

    /// All frequencies, highest period count first
    pub fn all() -> [Frequency; 6] {
        [
            Frequency::Monthly,
            Frequency::Bimonthly,
            Frequency::Quarterly,
            Frequency::FourMonthly,
            Frequency::Semiannual,
            Frequency::Annual,
        ]
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Frequency::Monthly),
            "bimonthly" => Ok(Frequency::Bimonthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "four-monthly" | "fourmonthly" => Ok(Frequency::FourMonthly),
            "semiannual" => Ok(Frequency::Semiannual),
            "annual" => Ok(Frequency::Annual),
            other => Err(ValidationError::UnknownFrequency(other.to_string())),
        }
    }
}

/// Convert an annual effective rate (in percent) to the equivalent
/// periodic rate for `periods_per_year` compounding periods.
///
/// Compound-interest equivalence: `(1 + a/100)^(1/n) - 1`, not a
/// nominal `a/n` division. A rate of exactly 0 yields 0.
pub fn periodic_rate(annual_rate_pct: f64, periods_per_year: u32) -> f64 {
    (1.0 + annual_rate_pct / 100.0).powf(1.0 / periods_per_year as f64) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rate_equivalence_identity() {
        // (1 + periodic)^n must reconstruct 1 + annual/100
        for &annual in &[0.0, 0.5, 5.0, 8.0, 12.75, 50.0] {
            for freq in Frequency::all() {
                let n = freq.periods_per_year();
                let r = periodic_rate(annual, n);
                assert_relative_eq!(
                    (1.0 + r).powi(n as i32),
                    1.0 + annual / 100.0,
                    max_relative = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_zero_rate_is_zero() {
        for freq in Frequency::all() {
            assert_eq!(periodic_rate(0.0, freq.periods_per_year()), 0.0);
        }
    }

    #[test]
    fn test_annual_rate_passthrough() {
        // With one period per year the periodic rate is the annual rate itself
        assert_relative_eq!(periodic_rate(8.0, 1), 0.08, max_relative = 1e-12);
    }

    #[test]
    fn test_monthly_rate_below_nominal() {
        // Effective conversion always sits below the nominal a/n division
        let monthly = periodic_rate(12.0, 12);
        assert!(monthly > 0.0);
        assert!(monthly < 0.12 / 12.0);
    }

    #[test]
    fn test_frequency_periods() {
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
        assert_eq!(Frequency::Bimonthly.periods_per_year(), 6);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::FourMonthly.periods_per_year(), 3);
        assert_eq!(Frequency::Semiannual.periods_per_year(), 2);
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
    }

    #[test]
    fn test_frequency_parse_roundtrip() {
        for freq in Frequency::all() {
            assert_eq!(freq.as_str().parse::<Frequency>().unwrap(), freq);
        }
        assert_eq!("Semiannual".parse::<Frequency>().unwrap(), Frequency::Semiannual);
    }

    #[test]
    fn test_frequency_parse_unknown_fails() {
        // No silent fallback for unrecognized names
        assert!("weekly".parse::<Frequency>().is_err());
        assert!("".parse::<Frequency>().is_err());
    }
}
