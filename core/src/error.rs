use thiserror::Error;

use crate::types::Year;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unknown adaptation rate '{label}': expected low, medium or high")]
    UnknownAdaptationRate { label: String },

    #[error("Unknown black swan event type '{label}'")]
    UnknownBlackSwanEvent { label: String },

    #[error("Invalid config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Projection horizon exhausted: all {years} years already simulated")]
    HorizonExhausted { years: Year },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
