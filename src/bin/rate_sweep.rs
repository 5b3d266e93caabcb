//! Bond sensitivity sweep over market rates
//!
//! Revalues one bond across a grid of whole-percent market rates (in
//! parallel) and writes the resulting curve to CSV.
//! Accepts config via environment variables:
//!   NOMINAL_VALUE, COUPON_RATE, FREQUENCY, YEARS, RATE_MIN, RATE_MAX, OUTPUT

use std::env;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result};

use wealth_planner::bond::{integer_rate_sweep, BondParams};
use wealth_planner::Frequency;

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn main() -> Result<()> {
    env_logger::init();

    let frequency = match env::var("FREQUENCY") {
        Ok(name) => Frequency::from_str(&name).context("invalid FREQUENCY")?,
        Err(_) => Frequency::Annual,
    };

    let params = BondParams {
        nominal_value: env_f64("NOMINAL_VALUE", 1000.0),
        coupon_rate_pct: env_f64("COUPON_RATE", 8.0),
        frequency,
        years: env_u32("YEARS", 10),
        market_rate_pct: 0.0, // overwritten per sweep point
    };
    let rate_min = env_u32("RATE_MIN", 0);
    let rate_max = env_u32("RATE_MAX", 20);
    let output = env::var("OUTPUT").unwrap_or_else(|_| "rate_sweep.csv".to_string());

    println!(
        "Sweeping {}% coupon, {}-year bond ({} payments) over market rates {}..={}%",
        params.coupon_rate_pct, params.years, params.frequency, rate_min, rate_max
    );

    let start = Instant::now();
    let points = integer_rate_sweep(&params, rate_min, rate_max);
    log::info!("swept {} rates in {:?}", points.len(), start.elapsed());

    println!("{:>8} {:>16}", "Rate", "Present Value");
    println!("{}", "-".repeat(26));
    for point in &points {
        println!("{:>7.0}% {:>16.2}", point.market_rate_pct, point.present_value);
    }

    let mut writer = csv::Writer::from_path(&output)
        .with_context(|| format!("unable to create {output}"))?;
    for point in &points {
        writer.serialize(point)?;
    }
    writer.flush()?;

    println!("\nCurve written to: {output}");
    Ok(())
}
