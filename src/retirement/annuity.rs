//! Level annuity payment calculation

use crate::rates::periodic_rate;

/// Months per year for pension payments
const MONTHS_PER_YEAR: u32 = 12;

/// Level monthly payment that fully amortizes `capital` over `years`
/// at the given annual effective rate.
///
/// Standard amortization formula `capital * r / (1 - (1+r)^-months)`
/// with the monthly rate derived by compound equivalence; a zero rate
/// degenerates to straight-line depletion `capital / months`. No
/// rounding is applied here; presentation rounds.
pub fn level_payment(capital: f64, annual_rate_pct: f64, years: u32) -> f64 {
    let monthly_rate = periodic_rate(annual_rate_pct, MONTHS_PER_YEAR);
    let months = (years * MONTHS_PER_YEAR) as f64;

    if monthly_rate == 0.0 {
        capital / months
    } else {
        capital * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-months))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_rate_straight_line() {
        // 120000 over 10 years at 0%: exactly 1000/month
        assert_eq!(level_payment(120_000.0, 0.0, 10), 1000.0);
    }

    #[test]
    fn test_zero_capital_zero_payment() {
        assert_eq!(level_payment(0.0, 5.0, 20), 0.0);
        assert_eq!(level_payment(0.0, 0.0, 20), 0.0);
    }

    #[test]
    fn test_positive_for_positive_capital() {
        for &rate in &[0.0, 1.0, 5.0, 12.0] {
            assert!(level_payment(100_000.0, rate, 20) > 0.0);
        }
    }

    #[test]
    fn test_monotone_in_rate() {
        // A higher rate sustains a higher payment from the same capital
        let mut prev = 0.0;
        for &rate in &[0.0, 1.0, 2.5, 5.0, 10.0, 20.0] {
            let payment = level_payment(200_000.0, rate, 20);
            assert!(payment > prev, "payment not increasing at rate {rate}");
            prev = payment;
        }
    }

    #[test]
    fn test_payments_amortize_capital_exactly() {
        // Simulating the withdrawal schedule should land on a zero balance
        let capital = 150_000.0;
        let rate_pct = 5.0;
        let years = 15;
        let payment = level_payment(capital, rate_pct, years);

        let monthly_rate = periodic_rate(rate_pct, 12);
        let mut balance = capital;
        for _ in 0..years * 12 {
            balance = balance * (1.0 + monthly_rate) - payment;
        }
        assert_abs_diff_eq!(balance, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rate_exceeds_depletion_floor() {
        // With interest, the payment always beats straight-line depletion
        let payment = level_payment(120_000.0, 5.0, 10);
        assert!(payment > 1000.0);
    }
}
