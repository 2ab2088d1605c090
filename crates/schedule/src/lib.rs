//! Timegate Schedule
//!
//! Pure slot-accessibility logic: given the ordered schedule and the
//! current epoch-millisecond time (real or simulated, the resolver does not
//! care), compute which entries have unlocked, which one is "current", and
//! how far away the next unlock is. No async, no I/O.

mod error;
mod resolver;
mod window;

pub use error::{Result, ScheduleError};
pub use resolver::{entry_unlock_ms, is_accessible, resolve_current_slot};
pub use window::HuntWindow;
