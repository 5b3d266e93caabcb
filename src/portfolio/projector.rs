//! Period-by-period portfolio growth projection

use serde::{Deserialize, Serialize};

use super::schedule::{GrowthProjection, PeriodRecord};
use crate::money::round_cents;
use crate::rates::{periodic_rate, Frequency};

/// Parameters for a growth projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthParams {
    /// Capital at the start of the projection
    pub initial_amount: f64,

    /// Contribution added at the end of every period
    pub periodic_contribution: f64,

    /// Annual effective rate, in percent
    pub annual_rate_pct: f64,

    /// Number of periods to project
    pub total_periods: u32,

    /// Compounding/contribution periods per year
    pub periods_per_year: u32,
}

impl GrowthParams {
    /// Build params for a horizon expressed in years at a given frequency
    pub fn over_years(
        initial_amount: f64,
        periodic_contribution: f64,
        annual_rate_pct: f64,
        years: u32,
        frequency: Frequency,
    ) -> Self {
        let periods_per_year = frequency.periods_per_year();
        Self {
            initial_amount,
            periodic_contribution,
            annual_rate_pct,
            total_periods: years * periods_per_year,
            periods_per_year,
        }
    }

    /// Build params for a horizon running from the current age to a
    /// retirement age (caller validates the age pair first)
    pub fn between_ages(
        initial_amount: f64,
        periodic_contribution: f64,
        annual_rate_pct: f64,
        current_age: u32,
        retirement_age: u32,
        frequency: Frequency,
    ) -> Self {
        Self::over_years(
            initial_amount,
            periodic_contribution,
            annual_rate_pct,
            retirement_age.saturating_sub(current_age),
            frequency,
        )
    }
}

impl Default for GrowthParams {
    fn default() -> Self {
        // Interactive form defaults: $1000 start, $100/month, 8% over 30 years
        Self::over_years(1000.0, 100.0, 8.0, 30, Frequency::Monthly)
    }
}

/// Project balance evolution period by period.
///
/// Each period earns interest on the running balance at the equivalent
/// periodic rate, then receives the contribution. Emitted records are
/// rounded to cents; the running balance is not, so the schedule and
/// the returned totals stay consistent with each other.
///
/// Zero periods is degenerate but non-fatal: empty schedule, final
/// balance equal to the initial amount.
pub fn project_growth(params: &GrowthParams) -> GrowthProjection {
    let rate = periodic_rate(params.annual_rate_pct, params.periods_per_year);

    let mut schedule = Vec::with_capacity(params.total_periods as usize);
    let mut balance = params.initial_amount;
    let mut cumulative = params.initial_amount;

    for period in 1..=params.total_periods {
        let interest = balance * rate;
        balance = balance + interest + params.periodic_contribution;
        cumulative += params.periodic_contribution;

        schedule.push(PeriodRecord {
            period,
            contribution: round_cents(params.periodic_contribution),
            interest: round_cents(interest),
            balance: round_cents(balance),
            cumulative_contributions: round_cents(cumulative),
        });
    }

    GrowthProjection {
        final_balance: round_cents(balance),
        total_contributions: round_cents(cumulative),
        schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_rate_growth() {
        let params = GrowthParams {
            initial_amount: 1000.0,
            periodic_contribution: 100.0,
            annual_rate_pct: 0.0,
            total_periods: 12,
            periods_per_year: 12,
        };
        let projection = project_growth(&params);

        assert_eq!(projection.schedule.len(), 12);
        for record in &projection.schedule {
            assert_eq!(record.interest, 0.0);
        }
        assert_eq!(projection.final_balance, 2200.0);
        assert_eq!(projection.total_contributions, 2200.0);
    }

    #[test]
    fn test_single_annual_period() {
        // 1000 at 8% for one annual period: 80 interest, 1080 balance
        let params = GrowthParams {
            initial_amount: 1000.0,
            periodic_contribution: 0.0,
            annual_rate_pct: 8.0,
            total_periods: 1,
            periods_per_year: 1,
        };
        let projection = project_growth(&params);

        assert_eq!(projection.schedule.len(), 1);
        assert_abs_diff_eq!(projection.schedule[0].interest, 80.0, epsilon = 1e-9);
        assert_abs_diff_eq!(projection.schedule[0].balance, 1080.0, epsilon = 1e-9);
        assert_abs_diff_eq!(projection.final_balance, 1080.0, epsilon = 1e-9);
    }

    #[test]
    fn test_schedule_length_matches_periods() {
        let params = GrowthParams::over_years(5000.0, 200.0, 6.0, 10, Frequency::Quarterly);
        assert_eq!(params.total_periods, 40);

        let projection = project_growth(&params);
        assert_eq!(projection.schedule.len(), 40);
    }

    #[test]
    fn test_final_balance_matches_last_record() {
        let params = GrowthParams::over_years(1000.0, 100.0, 8.0, 30, Frequency::Monthly);
        let projection = project_growth(&params);

        let last = projection.schedule.last().unwrap();
        assert_eq!(projection.final_balance, last.balance);
        assert_eq!(projection.total_contributions, last.cumulative_contributions);
    }

    #[test]
    fn test_total_contributions_formula() {
        let params = GrowthParams {
            initial_amount: 2500.0,
            periodic_contribution: 150.0,
            annual_rate_pct: 7.0,
            total_periods: 24,
            periods_per_year: 12,
        };
        let projection = project_growth(&params);
        assert_abs_diff_eq!(
            projection.total_contributions,
            2500.0 + 150.0 * 24.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_monotone_balance_and_contributions() {
        let params = GrowthParams::over_years(1000.0, 50.0, 5.0, 3, Frequency::Monthly);
        let projection = project_growth(&params);

        let mut prev_balance = params.initial_amount;
        let mut prev_cumulative = params.initial_amount;
        for record in &projection.schedule {
            assert!(record.balance >= prev_balance);
            assert!(record.cumulative_contributions >= prev_cumulative);
            prev_balance = record.balance;
            prev_cumulative = record.cumulative_contributions;
        }
    }

    #[test]
    fn test_zero_periods_degenerate() {
        let params = GrowthParams {
            initial_amount: 500.0,
            periodic_contribution: 100.0,
            annual_rate_pct: 5.0,
            total_periods: 0,
            periods_per_year: 12,
        };
        let projection = project_growth(&params);

        assert!(projection.schedule.is_empty());
        assert_eq!(projection.final_balance, 500.0);
        assert_eq!(projection.total_contributions, 500.0);
    }

    #[test]
    fn test_between_ages_horizon() {
        let params = GrowthParams::between_ages(0.0, 100.0, 8.0, 30, 65, Frequency::Monthly);
        assert_eq!(params.total_periods, 35 * 12);
    }

    #[test]
    fn test_summary_gain() {
        let params = GrowthParams::over_years(1000.0, 100.0, 8.0, 10, Frequency::Monthly);
        let projection = project_growth(&params);
        let summary = projection.summary();

        assert_eq!(summary.total_periods, 120);
        assert_abs_diff_eq!(
            summary.gain,
            projection.final_balance - projection.total_contributions,
            epsilon = 1e-9
        );
        assert!(summary.gain > 0.0);
    }
}
