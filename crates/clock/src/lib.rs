//! Timegate Clock Infrastructure
//!
//! Provides the simulated-time engine behind the scavenger hunt's
//! time-gated content:
//!
//! ```text
//! TimeSource (wall clock, injectable)
//!     │
//!     └── SimClock (anchor + speed projection, single global instance)
//!             │
//!             └── consumed by the slot resolver and the admin controller
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use timegate_clock::{ClockConfig, SimClock, SystemTimeSource, AdvanceUnit};
//!
//! let clock = SimClock::new(Arc::new(SystemTimeSource::new()), &ClockConfig::default())?;
//!
//! // Warp time for preview/demo
//! clock.set_time("2025-09-28T20:00:00+03:00").await?;
//! clock.set_speed(60.0).await?;                     // one real second = one simulated minute
//! clock.advance(AdvanceUnit::Day, 1).await?;        // jump to the same wall-clock time tomorrow
//! clock.clear().await;                              // back to real time
//! ```

mod config;
mod error;
mod manual;
mod sim;
mod system;

pub use config::ClockConfig;
pub use error::{ClockError, Result};
pub use manual::ManualTimeSource;
pub use sim::{AdvanceUnit, SimClock};
pub use system::SystemTimeSource;

// Re-export the TimeSource trait for convenience
pub use timegate_ports::TimeSource;
