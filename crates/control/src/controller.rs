use std::sync::Arc;

use serde::Serialize;

use timegate_clock::{AdvanceUnit, Result, SimClock};

/// Confirmation payload returned by every control operation
///
/// `preview_at_iso` is the current simulated instant, or None when the
/// clock is running on real time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimStatus {
    pub preview_at_iso: Option<String>,
    pub speed: f64,
}

/// Thin orchestration over the shared clock
///
/// Holds no state of its own; authorization of callers is the session
/// layer's concern.
pub struct SimulationController {
    clock: Arc<SimClock>,
}

impl SimulationController {
    pub fn new(clock: Arc<SimClock>) -> Self {
        Self { clock }
    }

    /// Current simulation status for admin display
    pub async fn status(&self) -> SimStatus {
        SimStatus {
            preview_at_iso: self.clock.simulated_iso().await,
            speed: self.clock.speed().await,
        }
    }

    /// Apply an admin request: a present timestamp activates or moves the
    /// simulation (optionally changing speed afterwards), an absent one
    /// reverts to real time
    pub async fn apply(
        &self,
        preview_at_iso: Option<&str>,
        speed: Option<f64>,
    ) -> Result<SimStatus> {
        match preview_at_iso {
            Some(iso) => {
                self.clock.set_time(iso).await?;
                if let Some(multiplier) = speed {
                    self.clock.set_speed(multiplier).await?;
                }
                log::info!(
                    "Simulation set to {iso} (speed {})",
                    self.clock.speed().await
                );
            }
            None => {
                self.clock.clear().await;
                log::info!("Simulation cleared, back to real time");
            }
        }
        Ok(self.status().await)
    }

    /// Change the speed multiplier without moving simulated time
    pub async fn set_speed(&self, multiplier: f64) -> Result<SimStatus> {
        self.clock.set_speed(multiplier).await?;
        log::info!("Simulation speed set to {multiplier}");
        Ok(self.status().await)
    }

    /// Advance (or rewind) simulated time by whole hours or calendar days
    ///
    /// `unit` is the wire tag from the admin request: "hour" or "day".
    pub async fn advance(&self, unit: &str, amount: i64) -> Result<SimStatus> {
        let unit: AdvanceUnit = unit.parse()?;
        let after = self.clock.advance(unit, amount).await?;
        log::info!("Simulation advanced by {amount} {unit}(s) to {}", after.now_iso);
        Ok(self.status().await)
    }

    /// The underlying clock, for the read-only request paths
    pub fn clock(&self) -> &Arc<SimClock> {
        &self.clock
    }
}
