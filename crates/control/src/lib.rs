//! Timegate Control
//!
//! The administrative surface over the single process-wide
//! [`SimClock`](timegate_clock::SimClock):
//! activate/update simulated time, change speed, advance by hours or days,
//! or revert to real time. Each operation delegates synchronously to the
//! clock and returns a [`SimStatus`] confirmation for the admin UI.

mod controller;

pub use controller::{SimStatus, SimulationController};
