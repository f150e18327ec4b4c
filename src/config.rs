//! Simulation configuration: the asset universe and market constants
//!
//! All tunables are carried by an explicit immutable `SimulationConfig` passed
//! into the simulator at construction. Nothing here is a process-wide global.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SimError;

/// Static definition of one asset in the simulated market
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSpec {
    /// Asset key used in output (e.g. "crypto")
    pub key: String,

    /// Units held at simulation start
    pub initial_amount: Decimal,

    /// Price in domestic-currency units at simulation start
    pub initial_rate: Decimal,

    /// Annualized growth multiplier for the long-term trend (1.0 = flat)
    pub annual_growth: Decimal,

    /// Daily relative volatility (std-dev of the stochastic shock term)
    pub daily_std_dev: f64,

    /// Mean days between shock events; (0, 0) disables shocks for this asset
    pub shock_interval_mean: f64,

    /// Std-dev of the days between shock events
    pub shock_interval_std_dev: f64,
}

/// Full configuration for a simulation run
///
/// The first asset is the domestic (base) currency: its initial rate must be
/// exactly 1, and with zero volatility and unit growth it stays there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed asset universe, in output order; index 0 is the base currency
    pub assets: Vec<AssetSpec>,

    /// Window length of the per-asset rolling reference price
    #[serde(default = "default_rolling_window")]
    pub rolling_window: u32,

    /// Fraction of the gap to the ideal trend closed each day
    #[serde(default = "default_reversion_rate")]
    pub reversion_rate: Decimal,

    /// Smallest rate a stochastic update may produce
    #[serde(default = "default_rate_floor")]
    pub rate_floor: Decimal,

    /// Decimal places kept after each rate/amount update
    #[serde(default = "default_scale")]
    pub scale: u32,
}

fn default_rolling_window() -> u32 {
    90
}

fn default_reversion_rate() -> Decimal {
    dec!(0.01)
}

fn default_rate_floor() -> Decimal {
    dec!(0.01)
}

fn default_scale() -> u32 {
    10
}

impl SimulationConfig {
    /// Built-in four-asset market: domestic cash, foreign currency, crypto,
    /// and an equity index
    pub fn default_market() -> Self {
        Self {
            assets: vec![
                AssetSpec {
                    key: "cash".to_string(),
                    initial_amount: dec!(10000),
                    initial_rate: Decimal::ONE,
                    annual_growth: Decimal::ONE,
                    daily_std_dev: 0.0,
                    shock_interval_mean: 0.0,
                    shock_interval_std_dev: 0.0,
                },
                AssetSpec {
                    key: "fx".to_string(),
                    initial_amount: dec!(1000),
                    initial_rate: dec!(8.04),
                    annual_growth: dec!(1.02),
                    daily_std_dev: 0.004,
                    shock_interval_mean: 240.0,
                    shock_interval_std_dev: 60.0,
                },
                AssetSpec {
                    key: "crypto".to_string(),
                    initial_amount: dec!(0.2),
                    initial_rate: dec!(90594.66),
                    annual_growth: dec!(1.30),
                    daily_std_dev: 0.025,
                    shock_interval_mean: 60.0,
                    shock_interval_std_dev: 20.0,
                },
                AssetSpec {
                    key: "equity".to_string(),
                    initial_amount: dec!(1),
                    initial_rate: dec!(9148.07),
                    annual_growth: dec!(1.08),
                    daily_std_dev: 0.01,
                    shock_interval_mean: 150.0,
                    shock_interval_std_dev: 40.0,
                },
            ],
            rolling_window: default_rolling_window(),
            reversion_rate: default_reversion_rate(),
            rate_floor: default_rate_floor(),
            scale: default_scale(),
        }
    }

    /// Load a configuration from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self, SimError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Index of the base (domestic currency) asset
    pub fn base_index(&self) -> usize {
        0
    }

    /// Check structural invariants before a run starts
    pub fn validate(&self) -> Result<(), SimError> {
        let base = self.assets.first().ok_or(SimError::EmptyAssetSet)?;
        if base.initial_rate != Decimal::ONE {
            return Err(SimError::BaseRateNotUnity {
                key: base.key.clone(),
                rate: base.initial_rate,
            });
        }

        for asset in &self.assets {
            if asset.initial_amount.is_sign_negative() {
                return Err(SimError::NegativeHolding {
                    key: asset.key.clone(),
                    amount: asset.initial_amount,
                });
            }
            if asset.initial_rate <= Decimal::ZERO {
                return Err(invalid("initial_rate", &asset.key, "must be positive"));
            }
            if asset.annual_growth <= Decimal::ZERO {
                return Err(invalid("annual_growth", &asset.key, "must be positive"));
            }
            if !asset.daily_std_dev.is_finite() || asset.daily_std_dev < 0.0 {
                return Err(invalid("daily_std_dev", &asset.key, "must be finite and >= 0"));
            }
            if asset.shock_interval_mean < 0.0 || asset.shock_interval_std_dev < 0.0 {
                return Err(invalid("shock_interval", &asset.key, "must be >= 0"));
            }
        }

        if self.rolling_window == 0 {
            return Err(SimError::InvalidParameter {
                name: "rolling_window",
                detail: "must be at least 1".to_string(),
            });
        }
        if self.rate_floor <= Decimal::ZERO {
            return Err(SimError::InvalidParameter {
                name: "rate_floor",
                detail: "must be positive".to_string(),
            });
        }
        if self.reversion_rate < Decimal::ZERO || self.reversion_rate > Decimal::ONE {
            return Err(SimError::InvalidParameter {
                name: "reversion_rate",
                detail: "must be in [0, 1]".to_string(),
            });
        }
        // Decimal supports at most 28 fractional digits
        if self.scale > 28 {
            return Err(SimError::InvalidParameter {
                name: "scale",
                detail: "must be at most 28".to_string(),
            });
        }

        let total: Decimal = self
            .assets
            .iter()
            .map(|a| a.initial_amount * a.initial_rate)
            .sum();
        if total <= Decimal::ZERO {
            return Err(SimError::DegenerateTotalValue(total));
        }

        Ok(())
    }
}

fn invalid(name: &'static str, key: &str, reason: &str) -> SimError {
    SimError::InvalidParameter {
        name,
        detail: format!("asset `{key}`: {reason}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_market_is_valid() {
        let config = SimulationConfig::default_market();
        config.validate().expect("default market should validate");
        assert_eq!(config.assets.len(), 4);
        assert_eq!(config.assets[config.base_index()].initial_rate, Decimal::ONE);
    }

    #[test]
    fn test_base_rate_must_be_one() {
        let mut config = SimulationConfig::default_market();
        config.assets[0].initial_rate = dec!(1.5);
        assert!(matches!(
            config.validate(),
            Err(SimError::BaseRateNotUnity { .. })
        ));
    }

    #[test]
    fn test_zero_value_portfolio_rejected() {
        let mut config = SimulationConfig::default_market();
        for asset in &mut config.assets {
            asset.initial_amount = Decimal::ZERO;
        }
        assert!(matches!(
            config.validate(),
            Err(SimError::DegenerateTotalValue(_))
        ));
    }

    #[test]
    fn test_negative_holding_rejected() {
        let mut config = SimulationConfig::default_market();
        config.assets[2].initial_amount = dec!(-1);
        assert!(matches!(config.validate(), Err(SimError::NegativeHolding { .. })));
    }

    #[test]
    fn test_defaults_fill_in_from_json() {
        let json = r#"{
            "assets": [
                {
                    "key": "cash",
                    "initial_amount": "100",
                    "initial_rate": "1",
                    "annual_growth": "1.0",
                    "daily_std_dev": 0.0,
                    "shock_interval_mean": 0.0,
                    "shock_interval_std_dev": 0.0
                }
            ]
        }"#;
        let config: SimulationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rolling_window, 90);
        assert_eq!(config.reversion_rate, dec!(0.01));
        assert_eq!(config.rate_floor, dec!(0.01));
        assert_eq!(config.scale, 10);
        config.validate().unwrap();
    }
}
