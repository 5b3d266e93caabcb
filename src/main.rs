//! Wealth Planner CLI
//!
//! Command-line interface for the personal-finance calculators

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use wealth_planner::bond::{integer_rate_sweep, value_bond, BondParams};
use wealth_planner::money::format_money;
use wealth_planner::portfolio::{project_growth, GrowthParams};
use wealth_planner::report::{write_bond_schedule_csv, write_growth_schedule_csv, Report};
use wealth_planner::retirement::{
    compare_retirement_ages, plan_retirement, PayoutOption, TaxSource, DEFAULT_COMPARISON_AGES,
};
use wealth_planner::validation::{validate_amount, validate_rate, validate_years};
use wealth_planner::{Frequency, SessionContext};

#[derive(Parser)]
#[command(name = "wealth_planner", version, about = "Personal-finance calculators")]
struct Cli {
    /// Emit results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project portfolio growth with periodic contributions
    Portfolio {
        /// Initial invested amount (USD)
        #[arg(long, default_value_t = 1000.0)]
        initial: f64,

        /// Contribution per period (USD)
        #[arg(long, default_value_t = 100.0)]
        contribution: f64,

        /// Annual effective rate (%)
        #[arg(long, default_value_t = 8.0)]
        rate: f64,

        /// Investment horizon in years
        #[arg(long, default_value_t = 30)]
        years: u32,

        /// Contribution frequency
        #[arg(long, default_value = "monthly")]
        frequency: Frequency,

        /// Write the full schedule to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Plan retirement income from accumulated capital
    Retirement {
        /// Accumulated capital at retirement (USD)
        #[arg(long, default_value_t = 100_000.0)]
        capital: f64,

        /// Total contributed over the accumulation phase (USD)
        #[arg(long, default_value_t = 50_000.0)]
        contributed: f64,

        /// Tax source for the gains (local | foreign)
        #[arg(long, default_value = "foreign")]
        source: TaxSource,

        /// Take the net capital as a single payment instead of a pension
        #[arg(long)]
        lump_sum: bool,

        /// Pension duration in years
        #[arg(long, default_value_t = 20)]
        years: u32,

        /// Annual effective rate during retirement (%)
        #[arg(long, default_value_t = 5.0)]
        rate: f64,

        /// Also print the retirement-age comparison grid
        #[arg(long)]
        compare_ages: bool,
    },

    /// Value a fixed-coupon bond against a market rate
    Bond {
        /// Nominal (face) value (USD)
        #[arg(long, default_value_t = 1000.0)]
        nominal: f64,

        /// Annual effective coupon rate (%)
        #[arg(long, default_value_t = 8.0)]
        coupon: f64,

        /// Coupon payment frequency
        #[arg(long, default_value = "annual")]
        frequency: Frequency,

        /// Years to maturity
        #[arg(long, default_value_t = 10)]
        years: u32,

        /// Annual effective market rate (%)
        #[arg(long, default_value_t = 10.0)]
        market_rate: f64,

        /// Write the cash-flow schedule to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Also sweep market rates 0..=20% and print the curve
        #[arg(long)]
        sensitivity: bool,
    },

    /// Run all three modules and print a combined report
    Report {
        /// Initial invested amount (USD)
        #[arg(long, default_value_t = 1000.0)]
        initial: f64,

        /// Contribution per period (USD)
        #[arg(long, default_value_t = 100.0)]
        contribution: f64,

        /// Annual effective rate during accumulation (%)
        #[arg(long, default_value_t = 8.0)]
        rate: f64,

        /// Accumulation horizon in years
        #[arg(long, default_value_t = 30)]
        years: u32,

        /// Tax source for the gains (local | foreign)
        #[arg(long, default_value = "foreign")]
        source: TaxSource,

        /// Pension duration in years
        #[arg(long, default_value_t = 20)]
        pension_years: u32,

        /// Annual effective rate during retirement (%)
        #[arg(long, default_value_t = 5.0)]
        pension_rate: f64,

        /// Write the report text to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Portfolio {
            initial,
            contribution,
            rate,
            years,
            frequency,
            csv,
        } => run_portfolio(initial, contribution, rate, years, frequency, csv, cli.json),
        Command::Retirement {
            capital,
            contributed,
            source,
            lump_sum,
            years,
            rate,
            compare_ages,
        } => run_retirement(
            capital,
            contributed,
            source,
            lump_sum,
            years,
            rate,
            compare_ages,
            cli.json,
        ),
        Command::Bond {
            nominal,
            coupon,
            frequency,
            years,
            market_rate,
            csv,
            sensitivity,
        } => run_bond(
            nominal,
            coupon,
            frequency,
            years,
            market_rate,
            csv,
            sensitivity,
            cli.json,
        ),
        Command::Report {
            initial,
            contribution,
            rate,
            years,
            source,
            pension_years,
            pension_rate,
            output,
        } => run_report(
            initial,
            contribution,
            rate,
            years,
            source,
            pension_years,
            pension_rate,
            output,
            cli.json,
        ),
    }
}

fn run_portfolio(
    initial: f64,
    contribution: f64,
    rate: f64,
    years: u32,
    frequency: Frequency,
    csv: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    validate_amount(initial, "initial amount")?;
    validate_amount(contribution, "periodic contribution")?;
    validate_rate(rate)?;
    validate_years(years, "investment horizon")?;

    let params = GrowthParams::over_years(initial, contribution, rate, years, frequency);
    log::info!(
        "projecting {} periods at {}% annual",
        params.total_periods,
        rate
    );
    let projection = project_growth(&params);

    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        println!("Portfolio Projection ({} periods):", projection.schedule.len());
        println!(
            "{:>7} {:>14} {:>14} {:>16} {:>16}",
            "Period", "Contribution", "Interest", "Balance", "Contributed"
        );
        println!("{}", "-".repeat(72));
        for record in projection.schedule.iter().take(24) {
            println!(
                "{:>7} {:>14.2} {:>14.2} {:>16.2} {:>16.2}",
                record.period,
                record.contribution,
                record.interest,
                record.balance,
                record.cumulative_contributions,
            );
        }
        if projection.schedule.len() > 24 {
            println!("... ({} more periods)", projection.schedule.len() - 24);
        }

        let summary = projection.summary();
        println!("\nSummary:");
        println!("  Total Contributed: {}", format_money(summary.total_contributions));
        println!("  Gain:              {}", format_money(summary.gain));
        println!("  Final Balance:     {}", format_money(summary.final_balance));
    }

    if let Some(path) = csv {
        let file = File::create(&path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        write_growth_schedule_csv(&projection, file)?;
        eprintln!("Schedule written to {}", path.display());
    }

    Ok(())
}

fn run_retirement(
    capital: f64,
    contributed: f64,
    source: TaxSource,
    lump_sum: bool,
    years: u32,
    rate: f64,
    compare_ages: bool,
    json: bool,
) -> Result<()> {
    validate_amount(capital, "accumulated capital")?;
    validate_amount(contributed, "total contributed")?;
    validate_rate(rate)?;
    validate_years(years, "pension duration")?;

    let payout = if lump_sum {
        PayoutOption::LumpSum
    } else {
        PayoutOption::MonthlyPension { years, annual_rate_pct: rate }
    };
    let outcome = plan_retirement(capital, contributed, source, payout)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("Retirement Plan ({}):", source.label());
        println!("  Gross Capital: {}", format_money(outcome.gross_capital));
        println!("  Gain:          {}", format_money(outcome.gain));
        println!("  Income Tax:    {}", format_money(outcome.tax));
        println!("  Net Capital:   {}", format_money(outcome.net_capital));
        if outcome.pension_months > 0 {
            println!(
                "  Monthly Pension: {} for {} months",
                format_money(outcome.monthly_pension),
                outcome.pension_months
            );
        } else {
            println!("  Payout: single lump sum");
        }
    }

    if compare_ages {
        let scenarios =
            compare_retirement_ages(outcome.net_capital, rate, &DEFAULT_COMPARISON_AGES);
        if json {
            println!("{}", serde_json::to_string_pretty(&scenarios)?);
        } else {
            println!("\nPension by Retirement Age:");
            println!("{:>5} {:>18} {:>18}", "Age", "Capital", "Monthly Pension");
            println!("{}", "-".repeat(44));
            for scenario in &scenarios {
                println!(
                    "{:>5} {:>18.2} {:>18.2}",
                    scenario.age, scenario.capital_at_age, scenario.monthly_pension
                );
            }
        }
    }

    Ok(())
}

fn run_bond(
    nominal: f64,
    coupon: f64,
    frequency: Frequency,
    years: u32,
    market_rate: f64,
    csv: Option<PathBuf>,
    sensitivity: bool,
    json: bool,
) -> Result<()> {
    validate_amount(nominal, "nominal value")?;
    validate_rate(coupon)?;
    validate_rate(market_rate)?;
    validate_years(years, "term")?;

    let params = BondParams {
        nominal_value: nominal,
        coupon_rate_pct: coupon,
        frequency,
        years,
        market_rate_pct: market_rate,
    };
    let valuation = value_bond(&params);

    if json {
        println!("{}", serde_json::to_string_pretty(&valuation)?);
    } else {
        println!("Bond Cash Flows ({} periods):", valuation.schedule.len());
        println!("{:>7} {:>14} {:>14}", "Period", "Cash Flow", "PV");
        println!("{}", "-".repeat(38));
        for record in &valuation.schedule {
            println!(
                "{:>7} {:>14.2} {:>14.2}",
                record.period, record.cash_flow, record.present_value
            );
        }

        println!("\nNominal Value:  {}", format_money(params.nominal_value));
        println!("Present Value:  {}", format_money(valuation.present_value));
        println!(
            "The bond trades {}",
            valuation.par_status(params.nominal_value).as_str()
        );
    }

    if sensitivity {
        let points = integer_rate_sweep(&params, 0, 20);
        if json {
            println!("{}", serde_json::to_string_pretty(&points)?);
        } else {
            println!("\nPresent Value by Market Rate:");
            println!("{:>8} {:>16}", "Rate", "Present Value");
            println!("{}", "-".repeat(26));
            for point in &points {
                println!("{:>7.0}% {:>16.2}", point.market_rate_pct, point.present_value);
            }
        }
    }

    if let Some(path) = csv {
        let file = File::create(&path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        write_bond_schedule_csv(&valuation, file)?;
        eprintln!("Schedule written to {}", path.display());
    }

    Ok(())
}

fn run_report(
    initial: f64,
    contribution: f64,
    rate: f64,
    years: u32,
    source: TaxSource,
    pension_years: u32,
    pension_rate: f64,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    validate_amount(initial, "initial amount")?;
    validate_amount(contribution, "periodic contribution")?;
    validate_rate(rate)?;
    validate_rate(pension_rate)?;
    validate_years(years, "investment horizon")?;
    validate_years(pension_years, "pension duration")?;

    // Module A feeds module B through the session context
    let growth_params =
        GrowthParams::over_years(initial, contribution, rate, years, Frequency::Monthly);
    let projection = project_growth(&growth_params);
    let session = SessionContext::new().with_portfolio(projection.clone());

    let (gross, contributed) = session
        .retirement_capital()
        .expect("portfolio projection was just recorded");
    let outcome = plan_retirement(
        gross,
        contributed,
        source,
        PayoutOption::MonthlyPension {
            years: pension_years,
            annual_rate_pct: pension_rate,
        },
    )?;

    let bond_params = BondParams::default();
    let valuation = value_bond(&bond_params);

    let mut report = Report::new();
    report.add_portfolio(&growth_params, &projection);
    report.add_retirement(&outcome);
    report.add_bond(&bond_params, &valuation);

    let text = if json {
        serde_json::to_string_pretty(&report)?
    } else {
        report.render_text()
    };
    match output {
        Some(path) => {
            std::fs::write(&path, &text)
                .with_context(|| format!("unable to write {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => print!("{text}"),
    }

    Ok(())
}
