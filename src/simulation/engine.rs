//! Simulator: drives the per-day state transition and reports each day
//!
//! Each `step` is a single synchronous transition (rates, amounts) ->
//! (rates', amounts'), so the loop can be halted safely between any two days.
//! Emission is injected as a callback; nothing here prints.

use rust_decimal::Decimal;

use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::market::{RandomSource, RateEngine};
use crate::portfolio::Portfolio;
use crate::simulation::report::DayReport;

pub struct Simulator {
    config: SimulationConfig,
    engine: RateEngine,
    portfolio: Portfolio,
    rng: Box<dyn RandomSource>,
    day: u64,
}

impl Simulator {
    /// Validate the configuration and set up day zero
    pub fn new(config: SimulationConfig, mut rng: Box<dyn RandomSource>) -> Result<Self, SimError> {
        config.validate()?;

        let engine = RateEngine::from_config(&config, rng.as_mut());
        let amounts: Vec<Decimal> = config.assets.iter().map(|a| a.initial_amount).collect();
        let rates = engine.rates();
        let portfolio = Portfolio::new(amounts, &rates, config.scale)?;

        log::info!(
            "simulation ready: {} assets, target proportions {:?}",
            config.assets.len(),
            portfolio.proportions()
        );

        Ok(Self {
            config,
            engine,
            portfolio,
            rng,
            day: 0,
        })
    }

    /// Days simulated so far
    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Fixed target proportions, in config asset order
    pub fn proportions(&self) -> &[Decimal] {
        self.portfolio.proportions()
    }

    /// Advance the simulation by one day
    pub fn step(&mut self) -> DayReport {
        self.day += 1;
        let opening_amounts = self.portfolio.amounts().to_vec();

        let updates = self.engine.advance(self.rng.as_mut());
        let rates: Vec<Decimal> = updates.iter().map(|u| u.rate).collect();
        let shocks: Vec<String> = updates
            .iter()
            .zip(&self.config.assets)
            .filter(|(update, _)| update.shocked)
            .map(|(_, spec)| spec.key.clone())
            .collect();

        let total_value = self.portfolio.total_value(&rates);
        let unrebalanced_value = self.portfolio.unrebalanced_value(&rates);
        let trading_effect = self.portfolio.trading_effect(&rates);
        let base_growth = self.base_growth(&opening_amounts);

        self.portfolio.rebalance(total_value, &rates);

        DayReport {
            day: self.day,
            opening_amounts,
            rates,
            shocks,
            total_value,
            unrebalanced_value,
            trading_effect,
            base_growth,
            closing_amounts: self.portfolio.amounts().to_vec(),
        }
    }

    /// Run the day loop, emitting each report through `emit`
    ///
    /// Runs forever when `days` is `None`; the reference behavior.
    pub fn run<F: FnMut(&DayReport)>(&mut self, days: Option<u64>, mut emit: F) {
        match days {
            Some(n) => {
                for _ in 0..n {
                    let report = self.step();
                    emit(&report);
                }
            }
            None => loop {
                let report = self.step();
                emit(&report);
            },
        }
    }

    fn base_growth(&self, opening_amounts: &[Decimal]) -> Decimal {
        let base = self.config.base_index();
        let initial = self.config.assets[base].initial_amount;
        if initial.is_zero() {
            // No starting base holding: the ratio is undefined, report flat
            return Decimal::ONE;
        }
        (opening_amounts[base] / initial).round_dp(self.config.scale)
    }
}
