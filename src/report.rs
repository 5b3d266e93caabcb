//! Financial report assembly and export
//!
//! Collects the session's results into a timestamped document with a
//! fixed label/value layout per module, rendered as plain text or
//! exported as CSV schedules. Page layout beyond plain text (PDF) is
//! the presentation layer's concern.

use std::io::Write;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::bond::{BondParams, BondValuation};
use crate::money::format_money;
use crate::portfolio::{GrowthParams, GrowthProjection};
use crate::retirement::RetirementOutcome;

const REPORT_TITLE: &str = "FINANCIAL REPORT";

/// One report section: a titled table of label/value rows
#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub rows: Vec<(String, String)>,
}

/// A complete report document
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Local>,
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Start an empty report stamped with the current local time
    pub fn new() -> Self {
        Self {
            generated_at: Local::now(),
            sections: Vec::new(),
        }
    }

    /// Add the portfolio projection section
    pub fn add_portfolio(&mut self, params: &GrowthParams, projection: &GrowthProjection) {
        let years = if params.periods_per_year > 0 {
            params.total_periods / params.periods_per_year
        } else {
            0
        };

        self.sections.push(ReportSection {
            title: "Portfolio Projection".to_string(),
            rows: vec![
                ("Initial Amount".to_string(), format_money(params.initial_amount)),
                (
                    "Periodic Contribution".to_string(),
                    format_money(params.periodic_contribution),
                ),
                (
                    "Annual Effective Rate".to_string(),
                    format!("{:.2}%", params.annual_rate_pct),
                ),
                ("Term".to_string(), format!("{} years", years)),
                (
                    "Total Contributed".to_string(),
                    format_money(projection.total_contributions),
                ),
                (
                    "Projected Final Balance".to_string(),
                    format_money(projection.final_balance),
                ),
            ],
        });
    }

    /// Add the retirement outcome section
    pub fn add_retirement(&mut self, outcome: &RetirementOutcome) {
        let mut rows = vec![
            (
                "Gross Accumulated Capital".to_string(),
                format_money(outcome.gross_capital),
            ),
            ("Gain Generated".to_string(), format_money(outcome.gain)),
            ("Income Tax".to_string(), format_money(outcome.tax)),
            (
                "Net Available Capital".to_string(),
                format_money(outcome.net_capital),
            ),
        ];
        if outcome.pension_months > 0 {
            rows.push((
                "Estimated Monthly Pension".to_string(),
                format_money(outcome.monthly_pension),
            ));
            rows.push((
                "Pension Duration".to_string(),
                format!("{} months", outcome.pension_months),
            ));
        } else {
            rows.push(("Payout".to_string(), "Single lump sum".to_string()));
        }

        self.sections.push(ReportSection {
            title: "Retirement Projection".to_string(),
            rows,
        });
    }

    /// Add the bond valuation section
    pub fn add_bond(&mut self, params: &BondParams, valuation: &BondValuation) {
        self.sections.push(ReportSection {
            title: "Bond Valuation".to_string(),
            rows: vec![
                ("Nominal Value".to_string(), format_money(params.nominal_value)),
                (
                    "Coupon Rate".to_string(),
                    format!("{:.2}%", params.coupon_rate_pct),
                ),
                (
                    "Payment Frequency".to_string(),
                    params.frequency.as_str().to_string(),
                ),
                ("Term".to_string(), format!("{} years", params.years)),
                (
                    "Market Rate".to_string(),
                    format!("{:.2}%", params.market_rate_pct),
                ),
                (
                    "Present Value".to_string(),
                    format_money(valuation.present_value),
                ),
                (
                    "Valuation".to_string(),
                    valuation.par_status(params.nominal_value).as_str().to_string(),
                ),
            ],
        });
    }

    /// Render the document as plain text
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(REPORT_TITLE);
        out.push('\n');
        out.push_str(&format!(
            "Generated on {}\n",
            self.generated_at.format("%d/%m/%Y %H:%M")
        ));

        for section in &self.sections {
            out.push('\n');
            out.push_str(&section.title);
            out.push('\n');
            out.push_str(&"-".repeat(section.title.len()));
            out.push('\n');

            let width = section
                .rows
                .iter()
                .map(|(label, _)| label.len())
                .max()
                .unwrap_or(0);
            for (label, value) in &section.rows {
                out.push_str(&format!("{:<width$}  {}\n", label, value, width = width));
            }
        }

        out
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a portfolio schedule as CSV
pub fn write_growth_schedule_csv<W: Write>(
    projection: &GrowthProjection,
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "Period",
        "Contribution",
        "Interest",
        "Balance",
        "TotalContributions",
    ])?;
    for record in &projection.schedule {
        csv_writer.write_record([
            record.period.to_string(),
            format!("{:.2}", record.contribution),
            format!("{:.2}", record.interest),
            format!("{:.2}", record.balance),
            format!("{:.2}", record.cumulative_contributions),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a bond cash-flow schedule as CSV
pub fn write_bond_schedule_csv<W: Write>(
    valuation: &BondValuation,
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Period", "CashFlow", "PresentValue"])?;
    for record in &valuation.schedule {
        csv_writer.write_record([
            record.period.to_string(),
            format!("{:.2}", record.cash_flow),
            format!("{:.2}", record.present_value),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
