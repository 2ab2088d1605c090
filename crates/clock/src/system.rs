use chrono::Utc;
use timegate_core::Timestamp;
use timegate_ports::TimeSource;

/// Production time source: straight `Utc::now()`
///
/// The hunt server runs against this one; everything deterministic lives in
/// [`ManualTimeSource`](crate::ManualTimeSource) instead.
pub struct SystemTimeSource;

impl SystemTimeSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemTimeSource {
    fn wall_now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemTimeSource"
    }
}
