use std::env;

use chrono::DateTime;

use timegate_core::EpochMs;

use crate::error::{Result, ScheduleError};

/// Optional overall hunt window (countdown before the first day, end-of-hunt
/// cutoff), independent of individual entry unlocks
///
/// Missing bounds mean the hunt is considered already started / never
/// ending. Countdowns clamp to zero once the bound has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HuntWindow {
    start_at_ms: Option<EpochMs>,
    end_at_ms: Option<EpochMs>,
}

impl HuntWindow {
    pub fn from_iso(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        Ok(Self {
            start_at_ms: start.map(parse_bound).transpose()?,
            end_at_ms: end.map(parse_bound).transpose()?,
        })
    }

    /// Read the window from the environment (`START_AT_ISO` / `END_AT_ISO`)
    pub fn from_env() -> Result<Self> {
        let start = env::var("START_AT_ISO").ok();
        let end = env::var("END_AT_ISO").ok();
        Self::from_iso(start.as_deref(), end.as_deref())
    }

    /// Milliseconds until the hunt starts, 0 once it has
    pub fn ms_to_start(&self, now_ms: EpochMs) -> EpochMs {
        self.start_at_ms
            .map_or(0, |start| (start - now_ms).max(0))
    }

    /// Milliseconds until the hunt ends, 0 once it has (or with no end set)
    pub fn ms_to_end(&self, now_ms: EpochMs) -> EpochMs {
        self.end_at_ms.map_or(0, |end| (end - now_ms).max(0))
    }
}

fn parse_bound(iso: &str) -> Result<EpochMs> {
    DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| ScheduleError::InvalidWindowBound(iso.to_string()))
}
