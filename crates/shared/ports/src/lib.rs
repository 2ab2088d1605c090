//! Timegate Ports
//!
//! Port definitions (traits) for the timegate server.
//! These define the boundaries between domain logic and infrastructure.

mod time_source;

pub use time_source::TimeSource;
