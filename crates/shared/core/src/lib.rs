//! Timegate Core Domain
//!
//! Pure domain types for the timegate scavenger-hunt server.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod schedule;
pub mod values;

// Re-export commonly used types at crate root
pub use schedule::{CurrentSlot, ScheduleEntry};
pub use values::{EpochMs, ServerTime, Timestamp, from_epoch_ms, to_epoch_ms};
