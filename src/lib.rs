//! Portfolio Sim - Monte Carlo simulation of a rebalanced multi-asset portfolio
//!
//! This library provides:
//! - Stochastic exchange-rate dynamics (mean-reverting random walk around a
//!   compounding trend, with randomly-timed shock days)
//! - Daily rebalancing back to fixed target proportions
//! - A day-by-day simulation loop with injectable randomness and output

pub mod config;
pub mod display;
pub mod error;
pub mod market;
pub mod portfolio;
pub mod simulation;

// Re-export commonly used types
pub use config::{AssetSpec, SimulationConfig};
pub use error::SimError;
pub use market::{GaussianSource, RandomSource, RateEngine, RollingMean, ShockTimer};
pub use portfolio::Portfolio;
pub use simulation::{DayReport, Simulator};
