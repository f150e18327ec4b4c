//! Portfolio holdings and daily rebalancing
//!
//! Target proportions are computed once from the initial configuration and
//! frozen; every rebalance restores them at current rates, assuming zero
//! transaction cost.

use rust_decimal::Decimal;

use crate::error::SimError;

#[derive(Debug, Clone)]
pub struct Portfolio {
    amounts: Vec<Decimal>,
    proportions: Vec<Decimal>,
    initial_amounts: Vec<Decimal>,
    scale: u32,
}

impl Portfolio {
    /// Build a portfolio and fix its target proportions from the starting
    /// amounts and rates
    ///
    /// Fails if the starting holdings are worth nothing; proportions would be
    /// undefined.
    pub fn new(amounts: Vec<Decimal>, rates: &[Decimal], scale: u32) -> Result<Self, SimError> {
        let proportions = compute_proportions(&amounts, rates)?;
        Ok(Self {
            initial_amounts: amounts.clone(),
            amounts,
            proportions,
            scale,
        })
    }

    /// Value of the current holdings at the given rates
    pub fn total_value(&self, rates: &[Decimal]) -> Decimal {
        weighted_sum(&self.amounts, rates)
    }

    /// Value the *initial* holdings would have at the given rates, had no
    /// rebalancing ever happened
    pub fn unrebalanced_value(&self, rates: &[Decimal]) -> Decimal {
        weighted_sum(&self.initial_amounts, rates)
    }

    /// Diagnostic: actual value relative to the never-rebalanced value, minus 1
    pub fn trading_effect(&self, rates: &[Decimal]) -> Decimal {
        let total = self.total_value(rates);
        let held = self.unrebalanced_value(rates);
        (total / held - Decimal::ONE).round_dp(self.scale)
    }

    /// Restore the target proportions: each asset ends up holding
    /// `total_value * proportion / rate` units
    pub fn rebalance(&mut self, total_value: Decimal, rates: &[Decimal]) {
        for (idx, amount) in self.amounts.iter_mut().enumerate() {
            *amount = (total_value * self.proportions[idx] / rates[idx]).round_dp(self.scale);
        }
    }

    pub fn amounts(&self) -> &[Decimal] {
        &self.amounts
    }

    pub fn proportions(&self) -> &[Decimal] {
        &self.proportions
    }
}

/// Fraction of total value each asset represents at the given rates
///
/// Errors if the total is not positive; a portfolio worth nothing has no
/// meaningful proportions.
pub fn compute_proportions(
    amounts: &[Decimal],
    rates: &[Decimal],
) -> Result<Vec<Decimal>, SimError> {
    let total = weighted_sum(amounts, rates);
    if total <= Decimal::ZERO {
        return Err(SimError::DegenerateTotalValue(total));
    }
    Ok(amounts
        .iter()
        .zip(rates)
        .map(|(amount, rate)| amount * rate / total)
        .collect())
}

fn weighted_sum(amounts: &[Decimal], rates: &[Decimal]) -> Decimal {
    amounts
        .iter()
        .zip(rates)
        .map(|(amount, rate)| amount * rate)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_amounts() -> Vec<Decimal> {
        vec![dec!(10000), dec!(1000), dec!(0.2), dec!(1)]
    }

    fn sample_rates() -> Vec<Decimal> {
        vec![dec!(1), dec!(8.04), dec!(90594.66), dec!(9148.07)]
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let proportions = compute_proportions(&sample_amounts(), &sample_rates()).unwrap();
        let sum: Decimal = proportions.iter().sum();
        assert!((sum - Decimal::ONE).abs() < dec!(0.0000000001));
    }

    #[test]
    fn test_degenerate_portfolio_rejected() {
        let amounts = vec![dec!(0), dec!(0)];
        let rates = vec![dec!(1), dec!(5)];
        assert!(matches!(
            compute_proportions(&amounts, &rates),
            Err(SimError::DegenerateTotalValue(_))
        ));
    }

    #[test]
    fn test_rebalance_conserves_value() {
        let rates = sample_rates();
        let mut portfolio = Portfolio::new(sample_amounts(), &rates, 10).unwrap();

        // Move the market, then rebalance at the new rates
        let new_rates = vec![dec!(1), dec!(8.50), dec!(85000.00), dec!(9500.00)];
        let total = portfolio.total_value(&new_rates);
        portfolio.rebalance(total, &new_rates);

        let after = portfolio.total_value(&new_rates);
        // Amounts are rounded to 10 decimal places, so conservation holds to
        // well under a cent
        assert!((after - total).abs() < dec!(0.0001));
    }

    #[test]
    fn test_rebalance_restores_target_proportions() {
        let rates = sample_rates();
        let mut portfolio = Portfolio::new(sample_amounts(), &rates, 10).unwrap();
        let targets = portfolio.proportions().to_vec();

        let new_rates = vec![dec!(1), dec!(7.20), dec!(110000.00), dec!(8800.00)];
        let total = portfolio.total_value(&new_rates);
        portfolio.rebalance(total, &new_rates);

        let restored = compute_proportions(portfolio.amounts(), &new_rates).unwrap();
        for (target, actual) in targets.iter().zip(&restored) {
            assert!((target - actual).abs() < dec!(0.0000001));
        }
    }

    #[test]
    fn test_trading_effect_is_zero_before_any_drift() {
        let rates = sample_rates();
        let portfolio = Portfolio::new(sample_amounts(), &rates, 10).unwrap();
        assert_eq!(portfolio.trading_effect(&rates), Decimal::ZERO);
    }
}
