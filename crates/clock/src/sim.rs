use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{Days, Duration, SecondsFormat, TimeZone};
use chrono_tz::Tz;
use tokio::sync::RwLock;

use timegate_core::{EpochMs, ServerTime, Timestamp, from_epoch_ms, to_epoch_ms};
use timegate_ports::TimeSource;

use crate::config::ClockConfig;
use crate::error::{ClockError, Result};

/// Units accepted by [`SimClock::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceUnit {
    /// Absolute time: N * 3600s
    Hour,
    /// Calendar days, preserving local wall-clock fields across DST shifts
    Day,
}

impl FromStr for AdvanceUnit {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hour" => Ok(AdvanceUnit::Hour),
            "day" => Ok(AdvanceUnit::Day),
            other => Err(ClockError::InvalidUnit(other.to_string())),
        }
    }
}

impl fmt::Display for AdvanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvanceUnit::Hour => f.write_str("hour"),
            AdvanceUnit::Day => f.write_str("day"),
        }
    }
}

/// Simulation anchor state
///
/// All three fields live behind one lock so a read never observes a new
/// anchor paired with an old multiplier.
#[derive(Debug, Clone, Copy)]
struct ClockState {
    /// Real instant of the last (re)anchoring; None = simulation inactive
    anchor_real: Option<Timestamp>,
    /// Simulated epoch-ms value at `anchor_real`
    anchor_sim_ms: EpochMs,
    /// Ratio of simulated-time flow to real-time flow
    speed: f64,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            anchor_real: None,
            anchor_sim_ms: 0,
            speed: 1.0,
        }
    }
}

impl ClockState {
    /// Project the simulated time at `wall`, or None when inactive
    fn simulated_ms(&self, wall: Timestamp) -> Option<EpochMs> {
        let anchor = self.anchor_real?;
        let real_elapsed_ms = (wall - anchor).num_milliseconds();
        Some(self.anchor_sim_ms + (real_elapsed_ms as f64 * self.speed).round() as EpochMs)
    }
}

/// The single process-wide simulated clock
///
/// Returns true wall time until an absolute `set_time` (or a lazy `advance`)
/// activates simulation. While active, every read is a pure linear
/// projection from the last anchor, so behavior does not depend on how
/// often the clock is polled. Every mutation re-anchors, which is what lets
/// speed changes and absolute jumps compose without drift.
pub struct SimClock {
    /// Where real time comes from (injectable for tests)
    source: Arc<dyn TimeSource>,
    /// Zone used for rendering and calendar-day boundaries
    tz: Tz,
    state: RwLock<ClockState>,
}

impl SimClock {
    /// Create a clock in the inactive (real time) state
    ///
    /// # Arguments
    /// * `source` - Wall-clock reads go through this seam
    /// * `config` - Carries the IANA zone name; unknown names are rejected
    pub fn new(source: Arc<dyn TimeSource>, config: &ClockConfig) -> Result<Arc<Self>> {
        let tz: Tz = config
            .timezone
            .parse()
            .map_err(|_| ClockError::InvalidZone(config.timezone.clone()))?;

        Ok(Arc::new(Self {
            source,
            tz,
            state: RwLock::new(ClockState::default()),
        }))
    }

    /// Current time: simulated while active, true wall time otherwise
    ///
    /// Side-effect-free read.
    pub async fn now(&self) -> ServerTime {
        self.render(self.now_ms().await)
    }

    /// Current time as epoch milliseconds
    pub async fn now_ms(&self) -> EpochMs {
        let state = *self.state.read().await;
        let wall = self.source.wall_now();
        state.simulated_ms(wall).unwrap_or_else(|| to_epoch_ms(wall))
    }

    /// Activate simulation at an absolute instant
    ///
    /// Parses first, mutates after, so a bad timestamp leaves the previous
    /// anchor intact. The speed multiplier is deliberately untouched.
    pub async fn set_time(&self, iso: &str) -> Result<()> {
        let target_ms = parse_iso_ms(iso)?;

        let mut state = self.state.write().await;
        state.anchor_real = Some(self.source.wall_now());
        state.anchor_sim_ms = target_ms;
        Ok(())
    }

    /// Change how fast simulated time flows relative to real time
    ///
    /// While active this re-anchors at the current simulated instant before
    /// storing the new rate, so simulated time never jumps at a speed
    /// change; only its future slope differs. While inactive the multiplier
    /// is stored without activating simulation, so an admin can pre-set the
    /// speed a later `set_time` will start at.
    pub async fn set_speed(&self, multiplier: f64) -> Result<()> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(ClockError::InvalidSpeed(multiplier));
        }

        let mut state = self.state.write().await;
        let wall = self.source.wall_now();
        if let Some(sim_ms) = state.simulated_ms(wall) {
            state.anchor_real = Some(wall);
            state.anchor_sim_ms = sim_ms;
        }
        state.speed = multiplier;
        Ok(())
    }

    /// Shift simulated time by a relative amount; negative amounts rewind
    ///
    /// Activates lazily from wall time when simulation is inactive. `Hour`
    /// is plain absolute arithmetic; `Day` moves across calendar days in the
    /// configured zone, keeping the local wall-clock fields (a day across a
    /// DST transition is 23 or 25 absolute hours). A target in a fall-back
    /// duplicated hour resolves to its first occurrence; only a genuine gap
    /// (spring-forward skipped hour) or overflow fails, before any state
    /// changes.
    pub async fn advance(&self, unit: AdvanceUnit, amount: i64) -> Result<ServerTime> {
        let mut state = self.state.write().await;
        let wall = self.source.wall_now();
        let current_ms = state.simulated_ms(wall).unwrap_or_else(|| to_epoch_ms(wall));
        let local = from_epoch_ms(current_ms).with_timezone(&self.tz);

        let target = match unit {
            AdvanceUnit::Hour => {
                Duration::try_hours(amount).and_then(|d| local.checked_add_signed(d))
            }
            AdvanceUnit::Day => {
                let naive = local.naive_local();
                let shifted = if amount >= 0 {
                    naive.checked_add_days(Days::new(amount as u64))
                } else {
                    naive.checked_sub_days(Days::new(amount.unsigned_abs()))
                };
                shifted.and_then(|n| self.tz.from_local_datetime(&n).earliest())
            }
        }
        .ok_or_else(|| {
            ClockError::InvalidTimestamp(format!(
                "advancing {} {}(s) from {} is not representable",
                amount,
                unit,
                local.to_rfc3339()
            ))
        })?;

        state.anchor_real = Some(wall);
        state.anchor_sim_ms = target.timestamp_millis();
        Ok(self.render(state.anchor_sim_ms))
    }

    /// Whether simulated time is currently active
    pub async fn is_active(&self) -> bool {
        self.state.read().await.anchor_real.is_some()
    }

    /// Current speed multiplier
    pub async fn speed(&self) -> f64 {
        self.state.read().await.speed
    }

    /// Deactivate simulation and reset the multiplier to 1.0; idempotent
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        *state = ClockState::default();
    }

    /// The current simulated instant as ISO, or None when inactive
    pub async fn simulated_iso(&self) -> Option<String> {
        let state = *self.state.read().await;
        let sim_ms = state.simulated_ms(self.source.wall_now())?;
        Some(self.render(sim_ms).now_iso)
    }

    /// Milliseconds until the next local midnight in the configured zone
    pub async fn ms_to_next_midnight(&self) -> EpochMs {
        let now_ms = self.now_ms().await;
        let local = from_epoch_ms(now_ms).with_timezone(&self.tz);

        let midnight = local
            .date_naive()
            .checked_add_days(Days::new(1))
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .and_then(|naive| {
                self.tz.from_local_datetime(&naive).earliest().or_else(|| {
                    // some zones skip midnight when DST starts
                    self.tz
                        .from_local_datetime(&(naive + Duration::hours(1)))
                        .earliest()
                })
            });

        match midnight {
            Some(m) => (m.timestamp_millis() - now_ms).max(0),
            None => 0,
        }
    }

    /// The configured zone label
    pub fn tz_name(&self) -> &str {
        self.tz.name()
    }

    fn render(&self, ms: EpochMs) -> ServerTime {
        let local = from_epoch_ms(ms).with_timezone(&self.tz);
        ServerTime {
            now_iso: local.to_rfc3339_opts(SecondsFormat::Millis, false),
            timestamp_ms: ms,
            tz: self.tz.name().to_string(),
        }
    }
}

fn parse_iso_ms(iso: &str) -> Result<EpochMs> {
    chrono::DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| ClockError::InvalidTimestamp(iso.to_string()))
}
