use serde::{Deserialize, Serialize};

use crate::values::EpochMs;

/// One scheduled content entry (a "slot")
///
/// The unlock timestamp is kept as the original ISO-8601 string so the
/// payload round-trips through the content store unchanged; parsing to epoch
/// milliseconds happens at resolution time. The payload is whatever the
/// editor stored alongside the timestamp (message, media reference, riddle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Unlock instant, ISO-8601 with explicit UTC offset
    #[serde(rename = "atIso")]
    pub at_iso: String,
    /// Arbitrary content fields carried alongside the timestamp
    #[serde(flatten)]
    pub payload: serde_json::Value,
}

impl ScheduleEntry {
    pub fn new(at_iso: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            at_iso: at_iso.into(),
            payload,
        }
    }
}

/// Result of resolving the schedule against the current time
///
/// `index` is -1 when nothing has unlocked yet (matching the wire contract
/// the public handlers expose); the terminal state — every entry unlocked —
/// is `ms_to_next == 0` with no next timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSlot {
    /// Index of the current (latest accessible) entry, -1 if none
    pub index: i64,
    /// The current entry itself, if any
    pub current: Option<ScheduleEntry>,
    /// Milliseconds until the next entry unlocks, 0 when there is none
    pub ms_to_next: EpochMs,
    /// Unlock timestamp of the next entry, if any
    pub next_entry_iso: Option<String>,
}

impl CurrentSlot {
    /// Result for an empty or fully-locked schedule with no upcoming entry
    pub fn none() -> Self {
        Self {
            index: -1,
            current: None,
            ms_to_next: 0,
            next_entry_iso: None,
        }
    }
}
