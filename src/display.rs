//! Human-readable rendering of daily reports
//!
//! Formatting is truncation based, never rounding: tiny magnitudes (under
//! 0.01) keep 5 decimal places so small rates and effects stay visible,
//! everything else keeps 2.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::fmt::Write;

use crate::config::SimulationConfig;
use crate::simulation::DayReport;

/// Format a quantity for display
///
/// Values with |x| in (0, 0.01) show 5 decimal places, all others show 2;
/// excess digits are truncated toward zero.
pub fn format_quantity(value: Decimal) -> String {
    let abs = value.abs();
    let places: u32 = if !abs.is_zero() && abs < dec!(0.01) { 5 } else { 2 };
    let truncated = value.round_dp_with_strategy(places, RoundingStrategy::ToZero);
    format!("{truncated:.prec$}", prec = places as usize)
}

/// Render one day's report as a printable block
pub fn render_report(config: &SimulationConfig, report: &DayReport) -> String {
    let mut out = String::new();
    let keys: Vec<&str> = config.assets.iter().map(|a| a.key.as_str()).collect();

    let _ = writeln!(out, "Day {}", report.day);
    let _ = writeln!(out, "  holdings : {}", keyed_line(&keys, &report.opening_amounts));
    let _ = writeln!(out, "  rates    : {}", keyed_line(&keys, &report.rates));
    for key in &report.shocks {
        let _ = writeln!(out, "  shock day: {key}");
    }
    let _ = writeln!(out, "  total value       : {}", format_quantity(report.total_value));
    let _ = writeln!(
        out,
        "  without rebalance : {}",
        format_quantity(report.unrebalanced_value)
    );
    let _ = writeln!(
        out,
        "  trading effect    : {}",
        format_quantity(report.trading_effect)
    );
    let base_key = &config.assets[config.base_index()].key;
    let _ = write!(
        out,
        "  {base_key} growth       : {}",
        format_quantity(report.base_growth)
    );
    out
}

fn keyed_line(keys: &[&str], values: &[Decimal]) -> String {
    keys.iter()
        .zip(values)
        .map(|(key, value)| format!("{key} {}", format_quantity(*value)))
        .collect::<Vec<_>>()
        .join(" | ")
}
