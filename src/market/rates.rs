//! Daily rate evolution for every asset in the universe
//!
//! Each asset follows a mean-reverting random walk around a compounding ideal
//! trend. The stochastic term is scaled by a rolling reference price and
//! amplified 10x on shock days.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::rng::RandomSource;
use super::rolling::RollingMean;
use super::shock::ShockTimer;
use crate::config::SimulationConfig;

const DAYS_PER_YEAR: Decimal = dec!(365);
const SHOCK_VOLATILITY_MULTIPLIER: f64 = 10.0;

/// Outcome of one asset's daily update
#[derive(Debug, Clone, Copy)]
pub struct RateUpdate {
    pub rate: Decimal,
    pub shocked: bool,
}

/// Evolution state for a single asset
#[derive(Debug, Clone)]
struct AssetDynamics {
    key: String,
    rate: Decimal,
    ideal: Decimal,
    daily_growth: Decimal,
    daily_std_dev: f64,
    reference: RollingMean,
    shock: ShockTimer,
}

/// Drives the per-day rate update for the whole asset universe
#[derive(Debug, Clone)]
pub struct RateEngine {
    assets: Vec<AssetDynamics>,
    reversion_rate: Decimal,
    rate_floor: Decimal,
    scale: u32,
}

impl RateEngine {
    /// Build engine state from configuration, in config asset order
    ///
    /// Each asset's rolling reference is seeded with its initial rate and its
    /// ideal trend starts there too. Shock countdowns draw from `rng`.
    pub fn from_config(config: &SimulationConfig, rng: &mut dyn RandomSource) -> Self {
        let assets = config
            .assets
            .iter()
            .map(|spec| {
                let mut reference = RollingMean::new(config.rolling_window);
                reference.append(spec.initial_rate);
                AssetDynamics {
                    key: spec.key.clone(),
                    rate: spec.initial_rate,
                    ideal: spec.initial_rate,
                    daily_growth: spec.annual_growth.powd(Decimal::ONE / DAYS_PER_YEAR),
                    daily_std_dev: spec.daily_std_dev,
                    reference,
                    shock: ShockTimer::from_config(
                        spec.shock_interval_mean,
                        spec.shock_interval_std_dev,
                        rng,
                    ),
                }
            })
            .collect();

        Self {
            assets,
            reversion_rate: config.reversion_rate,
            rate_floor: config.rate_floor,
            scale: config.scale,
        }
    }

    /// Advance every asset by one day, returning updates in config order
    pub fn advance(&mut self, rng: &mut dyn RandomSource) -> Vec<RateUpdate> {
        let mut updates = Vec::with_capacity(self.assets.len());
        for asset in &mut self.assets {
            // 1. Compound the long-term trend
            asset.ideal = (asset.ideal * asset.daily_growth).round_dp(self.scale);

            // 2-3. Advance the shock timer, then draw the stochastic term
            asset.shock.advance(rng);
            let shocked = asset.shock.is_shock();
            let std_dev = if shocked {
                asset.daily_std_dev * SHOCK_VOLATILITY_MULTIPLIER
            } else {
                asset.daily_std_dev
            };
            let draw = rng.sample_normal(0.0, std_dev);
            let s = Decimal::from_f64_retain(draw).unwrap_or(Decimal::ZERO);

            // 4-5. Perturb around the previous rate, scaled by the reference
            // price; a non-positive candidate clamps to the floor
            let reference = asset.reference.current_value();
            let mut candidate = asset.rate + reference * s;
            if candidate <= Decimal::ZERO {
                candidate = self.rate_floor;
            }

            // 6. Pull 1% of the way back toward the ideal trend
            let pulled = if candidate > asset.ideal {
                candidate - self.reversion_rate * (candidate - asset.ideal)
            } else {
                candidate + self.reversion_rate * (asset.ideal - candidate)
            };

            // 7. The floor must survive the reversion step as well
            let rate = pulled.max(self.rate_floor).round_dp(self.scale);
            asset.rate = rate;

            // 8. The new rate feeds tomorrow's reference price
            asset.reference.append(rate);

            if shocked {
                log::debug!("shock day for asset `{}`", asset.key);
            }
            updates.push(RateUpdate { rate, shocked });
        }
        updates
    }

    /// Current rates, in config order
    pub fn rates(&self) -> Vec<Decimal> {
        self.assets.iter().map(|a| a.rate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AssetSpec, SimulationConfig};
    use crate::market::rng::{GaussianSource, ScriptedSource};

    fn single_asset_config(initial_rate: Decimal, annual_growth: Decimal, std_dev: f64) -> SimulationConfig {
        SimulationConfig {
            assets: vec![AssetSpec {
                key: "asset".to_string(),
                initial_amount: dec!(1),
                initial_rate,
                annual_growth,
                daily_std_dev: std_dev,
                shock_interval_mean: 0.0,
                shock_interval_std_dev: 0.0,
            }],
            rolling_window: 90,
            reversion_rate: dec!(0.01),
            rate_floor: dec!(0.01),
            scale: 10,
        }
    }

    #[test]
    fn test_zero_variance_rate_tracks_ideal() {
        // No stochastic term, unit growth: rate already equals ideal and must
        // not move at all.
        let config = single_asset_config(dec!(100), Decimal::ONE, 0.0);
        let mut rng = ScriptedSource::zeros();
        let mut engine = RateEngine::from_config(&config, &mut rng);
        for _ in 0..30 {
            let updates = engine.advance(&mut rng);
            assert_eq!(updates[0].rate, dec!(100));
        }
    }

    #[test]
    fn test_reversion_closes_gap_one_percent_per_day() {
        let config = single_asset_config(dec!(100), Decimal::ONE, 0.01);
        // One z = 5 perturbation on day one, then silence
        let mut rng = ScriptedSource::new([5.0]);
        let mut engine = RateEngine::from_config(&config, &mut rng);

        // Day 1: candidate = 100 + 100 * 0.05 = 105, pulled back 1% of the gap
        let day1 = engine.advance(&mut rng)[0].rate;
        assert_eq!(day1, dec!(104.95));

        // Day 2: gap shrinks by exactly the reversion factor (0.99)
        let day2 = engine.advance(&mut rng)[0].rate;
        assert_eq!(day2, dec!(104.9005));

        let gap1 = day1 - dec!(100);
        let gap2 = day2 - dec!(100);
        assert_eq!(gap2, gap1 * dec!(0.99));
    }

    #[test]
    fn test_floor_holds_after_reversion() {
        // Ideal sits below the floor, so the reversion step would drag the
        // clamped candidate back under it.
        let config = single_asset_config(dec!(0.005), Decimal::ONE, 0.5);
        let mut rng = ScriptedSource::new([-1000.0]);
        let mut engine = RateEngine::from_config(&config, &mut rng);

        let update = engine.advance(&mut rng)[0];
        assert_eq!(update.rate, dec!(0.01));
    }

    #[test]
    fn test_shock_day_amplifies_volatility_tenfold() {
        let mut config = single_asset_config(dec!(100), Decimal::ONE, 0.01);
        // Interval mean 0 with nonzero std: armed timer whose first countdown
        // draw is scripted to 0, so day one is a shock day.
        config.assets[0].shock_interval_mean = 0.0;
        config.assets[0].shock_interval_std_dev = 1.0;

        // Draws: initial countdown (z=0 -> 0), redraw countdown (z=100),
        // then the rate term (z=1) at 10x std-dev.
        let mut rng = ScriptedSource::new([0.0, 100.0, 1.0]);
        let mut engine = RateEngine::from_config(&config, &mut rng);

        let update = engine.advance(&mut rng)[0];
        assert!(update.shocked);
        // candidate = 100 + 100 * 0.1 = 110, reverted to 110 - 0.01 * 10
        assert_eq!(update.rate, dec!(109.9));
    }

    #[test]
    fn test_base_currency_never_moves_and_floor_always_holds() {
        let config = SimulationConfig::default_market();
        let mut rng = GaussianSource::from_seed(1234);
        let mut engine = RateEngine::from_config(&config, &mut rng);

        for _ in 0..200 {
            let updates = engine.advance(&mut rng);
            assert_eq!(updates[0].rate, Decimal::ONE);
            for update in &updates {
                assert!(update.rate >= dec!(0.01));
            }
        }
    }
}
