//! Simulation control integration test
//!
//! Exercises the full admin flow against one shared clock:
//! 1. Hunt starts locked; the resolver sees nothing accessible
//! 2. Admin warps simulated time and the gated entries open up
//! 3. Accelerated time keeps unlocking entries while real time barely moves
//! 4. Day advance crosses a calendar boundary
//! 5. Clearing the simulation returns to real time

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

use timegate_clock::{ClockConfig, ManualTimeSource, SimClock, TimeSource};
use timegate_control::SimulationController;
use timegate_core::{ScheduleEntry, to_epoch_ms};
use timegate_schedule::{HuntWindow, resolve_current_slot};

fn schedule() -> Vec<ScheduleEntry> {
    vec![
        ScheduleEntry::new("2025-09-28T10:00:00+03:00", json!({"title": "Day one"})),
        ScheduleEntry::new("2025-09-28T20:00:00+03:00", json!({"title": "Evening clue"})),
        ScheduleEntry::new("2025-09-29T10:00:00+03:00", json!({"title": "Day two"})),
    ]
}

fn setup() -> (Arc<ManualTimeSource>, SimulationController) {
    let _ = env_logger::try_init();
    // Real time: a week before the hunt starts
    let source = ManualTimeSource::new(Utc.with_ymd_and_hms(2025, 9, 21, 12, 0, 0).unwrap());
    let clock = SimClock::new(source.clone(), &ClockConfig::default()).unwrap();
    (source, SimulationController::new(clock))
}

#[tokio::test]
async fn test_warp_unlock_and_clear_flow() {
    let (source, controller) = setup();
    let schedule = schedule();
    let window =
        HuntWindow::from_iso(Some("2025-09-28T10:00:00+03:00"), None).unwrap();

    // Before the hunt: nothing accessible, countdown comes from the window
    let now_ms = controller.clock().now_ms().await;
    let slot = resolve_current_slot(&schedule, now_ms).unwrap();
    assert_eq!(slot.index, -1);
    assert_eq!(window.ms_to_start(now_ms), 7 * 24 * 3_600_000 - 5 * 3_600_000);

    // Admin previews the evening of day one
    let status = controller
        .apply(Some("2025-09-28T20:30:00+03:00"), None)
        .await
        .unwrap();
    assert_eq!(
        status.preview_at_iso.as_deref(),
        Some("2025-09-28T20:30:00.000+03:00")
    );

    let now_ms = controller.clock().now_ms().await;
    let slot = resolve_current_slot(&schedule, now_ms).unwrap();
    assert_eq!(slot.index, 1);
    assert_eq!(slot.current.unwrap().payload["title"], "Evening clue");
    assert_eq!(
        slot.next_entry_iso.as_deref(),
        Some("2025-09-29T10:00:00+03:00")
    );
    assert_eq!(slot.ms_to_next, 13 * 3_600_000 + 30 * 60_000);

    // One simulated minute per real second: day two unlocks after
    // fourteen "real" minutes
    controller.set_speed(60.0).await.unwrap();
    source.advance(Duration::minutes(14));
    let now_ms = controller.clock().now_ms().await;
    let slot = resolve_current_slot(&schedule, now_ms).unwrap();
    assert_eq!(slot.index, 2);
    assert_eq!(slot.ms_to_next, 0);
    assert_eq!(slot.next_entry_iso, None);

    // Back to real time
    let status = controller.apply(None, None).await.unwrap();
    assert_eq!(status.preview_at_iso, None);
    assert_eq!(status.speed, 1.0);
    assert_eq!(
        controller.clock().now_ms().await,
        to_epoch_ms(source.wall_now())
    );
}

#[tokio::test]
async fn test_day_advance_crosses_calendar_boundary() {
    let (_source, controller) = setup();
    let schedule = schedule();

    controller
        .apply(Some("2025-09-28T12:00:00+03:00"), None)
        .await
        .unwrap();
    let status = controller.advance("day", 1).await.unwrap();
    assert_eq!(
        status.preview_at_iso.as_deref(),
        Some("2025-09-29T12:00:00.000+03:00")
    );

    let now_ms = controller.clock().now_ms().await;
    let slot = resolve_current_slot(&schedule, now_ms).unwrap();
    assert_eq!(slot.index, 2);
}

#[tokio::test]
async fn test_rejected_requests_leave_simulation_untouched() {
    let (_source, controller) = setup();

    controller
        .apply(Some("2025-09-28T12:00:00+03:00"), Some(2.0))
        .await
        .unwrap();
    let before = controller.status().await;

    assert!(controller.apply(Some("soonish"), None).await.is_err());
    assert!(controller.set_speed(-1.0).await.is_err());
    assert!(controller.advance("week", 1).await.is_err());

    assert_eq!(controller.status().await, before);
}
