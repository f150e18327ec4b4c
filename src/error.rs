//! Error types for simulation setup and configuration loading

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building or validating a simulation
#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration defines no assets")]
    EmptyAssetSet,

    #[error("base asset `{key}` must have an initial rate of exactly 1, got {rate}")]
    BaseRateNotUnity { key: String, rate: Decimal },

    #[error("asset `{key}` has a negative initial holding: {amount}")]
    NegativeHolding { key: String, amount: Decimal },

    #[error("initial portfolio value must be positive, got {0}")]
    DegenerateTotalValue(Decimal),

    #[error("invalid parameter for `{name}`: {detail}")]
    InvalidParameter { name: &'static str, detail: String },

    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
