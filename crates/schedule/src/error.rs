use thiserror::Error;

/// Data-quality failures surfaced during schedule resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid schedule entry: bad timestamp {0:?}")]
    InvalidEntry(String),

    #[error("Invalid hunt window bound: {0}")]
    InvalidWindowBound(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
