use chrono::DateTime;

use timegate_core::{CurrentSlot, EpochMs, ScheduleEntry};

use crate::error::{Result, ScheduleError};

/// Parse an entry's unlock timestamp to epoch milliseconds
pub fn entry_unlock_ms(entry: &ScheduleEntry) -> Result<EpochMs> {
    DateTime::parse_from_rfc3339(&entry.at_iso)
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| ScheduleError::InvalidEntry(entry.at_iso.clone()))
}

/// Whether a single entry has unlocked at `now_ms` (inclusive boundary)
///
/// Used for by-index fetches where rescanning the whole schedule would be
/// wasted work.
pub fn is_accessible(entry: &ScheduleEntry, now_ms: EpochMs) -> Result<bool> {
    Ok(entry_unlock_ms(entry)? <= now_ms)
}

/// Resolve which entry is current and how far away the next unlock is
///
/// Precondition: `schedule` is sorted ascending by `atIso` (the content
/// store sorts on write). The accessible entries are then exactly a prefix
/// of the sequence, so one pass suffices; the current entry is the last of
/// that prefix, which also makes ties on equal timestamps resolve to the
/// higher index. Sortedness is checked with a debug assertion because a
/// violated precondition silently selects the wrong entry.
///
/// A timestamp that fails to parse aborts resolution with `InvalidEntry`
/// rather than mis-ordering around it.
pub fn resolve_current_slot(schedule: &[ScheduleEntry], now_ms: EpochMs) -> Result<CurrentSlot> {
    if schedule.is_empty() {
        return Ok(CurrentSlot::none());
    }

    let mut current_index: Option<usize> = None;
    let mut next: Option<(usize, EpochMs)> = None;
    let mut prev_ms = EpochMs::MIN;

    for (i, entry) in schedule.iter().enumerate() {
        let unlock_ms = entry_unlock_ms(entry)?;
        debug_assert!(
            unlock_ms >= prev_ms,
            "schedule must be sorted ascending by atIso (index {i})"
        );
        prev_ms = unlock_ms;

        if unlock_ms <= now_ms {
            current_index = Some(i);
        } else if next.is_none() {
            next = Some((i, unlock_ms));
        }
    }

    Ok(CurrentSlot {
        index: current_index.map_or(-1, |i| i as i64),
        current: current_index.map(|i| schedule[i].clone()),
        ms_to_next: next.map_or(0, |(_, unlock_ms)| unlock_ms - now_ms),
        next_entry_iso: next.map(|(i, _)| schedule[i].at_iso.clone()),
    })
}
