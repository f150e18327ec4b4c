//! Observable state emitted for each simulated day

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day of simulation output
///
/// Amount and rate vectors are parallel to the configured asset order.
/// Diagnostics are computed on the opening holdings at the day's new rates,
/// before rebalancing replaces the holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    /// Day index, starting at 1
    pub day: u64,

    /// Holdings at the start of the day (yesterday's rebalance output)
    pub opening_amounts: Vec<Decimal>,

    /// Rates after today's stochastic update
    pub rates: Vec<Decimal>,

    /// Keys of assets that had a shock day
    pub shocks: Vec<String>,

    /// Portfolio value at today's rates
    pub total_value: Decimal,

    /// Value the initial holdings would have at today's rates
    pub unrebalanced_value: Decimal,

    /// total_value / unrebalanced_value - 1
    pub trading_effect: Decimal,

    /// Growth of the domestic-currency holding relative to its initial amount
    pub base_growth: Decimal,

    /// Holdings after today's rebalance
    pub closing_amounts: Vec<Decimal>,
}
