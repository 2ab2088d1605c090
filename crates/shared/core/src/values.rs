use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Epoch time in milliseconds
/// Future: could become a newtype with validation (non-negative, range)
pub type EpochMs = i64;

/// Convert a timestamp to epoch milliseconds
pub fn to_epoch_ms(ts: Timestamp) -> EpochMs {
    ts.timestamp_millis()
}

/// Convert epoch milliseconds back to a UTC timestamp
///
/// Values outside chrono's representable range clamp to the matching bound
/// instead of panicking.
pub fn from_epoch_ms(ms: EpochMs) -> Timestamp {
    DateTime::from_timestamp_millis(ms).unwrap_or(if ms < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Snapshot of the server's notion of "now"
///
/// Produced by the clock on every read. `now_iso` carries an explicit UTC
/// offset and is rendered in the configured zone; all arithmetic elsewhere
/// uses `timestamp_ms`. The zone label is descriptive only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    /// ISO-8601 timestamp with explicit offset
    pub now_iso: String,
    /// Same instant as epoch milliseconds
    pub timestamp_ms: EpochMs,
    /// IANA zone label the iso string was rendered in
    pub tz: String,
}
