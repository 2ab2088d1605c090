use thiserror::Error;

/// Validation failures for clock mutations
///
/// All variants are detected before any state is touched; a rejected
/// mutation leaves the clock at its last-good state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClockError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid speed multiplier: {0}")]
    InvalidSpeed(f64),

    #[error("Invalid unit for advancing time: {0}")]
    InvalidUnit(String),

    #[error("Unknown timezone: {0}")]
    InvalidZone(String),
}

pub type Result<T> = std::result::Result<T, ClockError>;
