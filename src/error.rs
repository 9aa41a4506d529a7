//! Errors raised while loading or validating tuning data
//!
//! The simulation itself never fails; only the data that configures it can.

use thiserror::Error;

/// Why a [`crate::Tuning`] could not be produced
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, TuningError>;
