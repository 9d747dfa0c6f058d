// Forecast Report Types — console tables and JSON output
// Everything is written to stdout; nothing is persisted

use serde::Serialize;

use commission_engine::{SimulationConfig, SummaryTable, TrialField, UnitSample};

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ForecastReport {
    pub version: &'static str,
    pub prng: &'static str,
    pub scenario: String,
    pub seed: u64,
    pub elapsed_ms: u128,
    pub config: SimulationConfig,
    pub summary: SummaryTable,
}

// ─── Console Rendering ──────────────────────────────────────────────────────

/// `1234567.891` -> `1,234,567.89`
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Rows are statistics, columns are the three trial totals.
pub fn print_summary(summary: &SummaryTable) {
    print!("  {:<8}", "");
    for field in TrialField::ALL {
        print!(" {:>20}", field.label());
    }
    println!();
    println!("  {}", "-".repeat(8 + 21 * TrialField::ALL.len()));

    let columns: Vec<_> = TrialField::ALL.iter().map(|f| summary.get(*f).rows()).collect();
    for row in 0..columns[0].len() {
        print!("  {:<8}", columns[0][row].0);
        for col in &columns {
            let decimals = if col[row].0 == "count" { 0 } else { 2 };
            print!(" {:>20}", format_thousands(col[row].1, decimals));
        }
        println!();
    }
}

pub fn print_units(units: &[UnitSample], limit: usize) {
    println!("  {:>5} {:>13} {:>12} {:>14} {:>15} {:>17}",
        "Rep", "Pct_To_Target", "Sales_Target", "Sales", "Commission_Rate", "Commission_Amount");
    println!("  {}", "-".repeat(81));
    for (i, u) in units.iter().take(limit).enumerate() {
        println!("  {:>5} {:>13.2} {:>12} {:>14} {:>15.2} {:>17}",
            i,
            u.performance_ratio,
            format_thousands(u.assigned_target, 0),
            format_thousands(u.realized_amount, 2),
            u.payout_rate,
            format_thousands(u.payout_amount, 2),
        );
    }
}
