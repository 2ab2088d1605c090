use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Duration;
use timegate_core::{Timestamp, from_epoch_ms, to_epoch_ms};
use timegate_ports::TimeSource;

/// Manually-stepped wall-clock source for deterministic tests
///
/// Time stands still until `advance`/`set` is called, so tests exercise
/// elapsed-time behavior without sleeping.
pub struct ManualTimeSource {
    now_ms: AtomicI64,
}

impl ManualTimeSource {
    pub fn new(start: Timestamp) -> Arc<Self> {
        Arc::new(Self {
            now_ms: AtomicI64::new(to_epoch_ms(start)),
        })
    }

    /// Move wall time forward (or backward, with a negative duration)
    pub fn advance(&self, by: Duration) {
        self.now_ms.fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }

    /// Jump wall time to an absolute instant
    pub fn set(&self, to: Timestamp) {
        self.now_ms.store(to_epoch_ms(to), Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn wall_now(&self) -> Timestamp {
        from_epoch_ms(self.now_ms.load(Ordering::SeqCst))
    }

    fn name(&self) -> &str {
        "ManualTimeSource"
    }
}
