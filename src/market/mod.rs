//! Market dynamics: stochastic rate evolution for the asset universe

mod rates;
mod rng;
mod rolling;
mod shock;

pub use rates::{RateEngine, RateUpdate};
pub use rng::{GaussianSource, RandomSource, ScriptedSource};
pub use rolling::RollingMean;
pub use shock::ShockTimer;
