use timegate_core::Timestamp;

/// Where "what time is it really" comes from
///
/// The simulated clock never calls the system clock directly; it asks its
/// injected `TimeSource`. Production wires in the real wall clock, tests
/// wire in a manually-stepped one so elapsed-time behavior can be asserted
/// exactly, without sleeping.
pub trait TimeSource: Send + Sync {
    /// The current real (wall-clock) instant
    fn wall_now(&self) -> Timestamp;

    /// Source identifier for diagnostics
    fn name(&self) -> &str {
        "TimeSource"
    }
}
