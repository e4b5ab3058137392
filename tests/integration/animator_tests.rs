//! Integration tests for the animation lifecycle driven through the
//! service: full oscillation runs, supersession on re-trigger, and servo
//! I/O failure handling.

use crate::mock_hw::{MockHardware, RecordingSink, RecordingSpeech, ScriptedCamera};

use skellybell::app::events::AppEvent;
use skellybell::app::ports::CaptureOutcome;
use skellybell::app::service::DoorbellService;
use skellybell::config::SystemConfig;
use skellybell::detector::MotionEvent;

const STEP_MS: u64 = 1000;

fn make_rig() -> (
    DoorbellService,
    MockHardware,
    ScriptedCamera,
    RecordingSpeech,
    RecordingSink,
) {
    let config = SystemConfig::default();
    let mut svc = DoorbellService::new(&config);
    let mut hw = MockHardware::new();
    let mut speech = RecordingSpeech::new();
    let mut sink = RecordingSink::new();
    let camera = ScriptedCamera::new(vec![
        CaptureOutcome::Frame(vec![1]),
        CaptureOutcome::Frame(vec![2]),
    ]);
    svc.start(&mut hw, &mut speech, &mut sink);
    (svc, hw, camera, speech, sink)
}

fn trigger(
    svc: &mut DoorbellService,
    at_ms: u64,
    camera: &mut ScriptedCamera,
    speech: &mut RecordingSpeech,
    sink: &mut RecordingSink,
) {
    svc.on_motion(MotionEvent { at_ms }, camera, speech, sink);
}

#[test]
fn full_run_writes_six_alternating_angles_then_stops() {
    let (mut svc, mut hw, mut camera, mut speech, mut sink) = make_rig();
    trigger(&mut svc, 0, &mut camera, &mut speech, &mut sink);

    let mut now = 0;
    while svc.animation_active() {
        svc.tick(now, &mut hw, &mut sink);
        now += STEP_MS;
    }

    assert_eq!(hw.writes, vec![180.0, 0.0, 180.0, 0.0, 180.0, 0.0]);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::AnimationFinished)), 1);

    // No further scheduling after completion.
    svc.tick(now + 10 * STEP_MS, &mut hw, &mut sink);
    assert_eq!(hw.writes.len(), 6);
}

#[test]
fn retrigger_mid_run_leaves_one_active_task() {
    let (mut svc, mut hw, mut camera, mut speech, mut sink) = make_rig();
    trigger(&mut svc, 0, &mut camera, &mut speech, &mut sink);

    // Two steps of the first run.
    svc.tick(0, &mut hw, &mut sink);
    svc.tick(STEP_MS, &mut hw, &mut sink);
    assert_eq!(hw.writes.len(), 2);

    // Second visitor while four steps remain.
    trigger(&mut svc, STEP_MS + 500, &mut camera, &mut speech, &mut sink);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::AnimationStarted { .. })), 2);

    let mut now = STEP_MS + 500;
    while svc.animation_active() {
        svc.tick(now, &mut hw, &mut sink);
        now += STEP_MS;
    }

    // 2 writes from the superseded run + a full 6 from the winner, with
    // the winner restarting from the maximum angle.
    assert_eq!(
        hw.writes,
        vec![180.0, 0.0, 180.0, 0.0, 180.0, 0.0, 180.0, 0.0]
    );
    assert_eq!(sink.count(|e| matches!(e, AppEvent::AnimationFinished)), 1);
}

#[test]
fn servo_write_failure_ends_run_without_reaching_orchestrator() {
    let (mut svc, mut hw, mut camera, mut speech, mut sink) = make_rig();
    hw.fail_writes_after = Some(3);
    trigger(&mut svc, 0, &mut camera, &mut speech, &mut sink);

    let mut now = 0;
    for _ in 0..12 {
        svc.tick(now, &mut hw, &mut sink);
        now += STEP_MS;
    }

    // Steps 4..6 never execute and the failure surfaces only as an event.
    assert_eq!(hw.writes.len(), 3);
    assert!(!svc.animation_active());
    assert_eq!(sink.count(|e| matches!(e, AppEvent::AnimationFault(_))), 1);

    // The next visitor gets a fresh, working run.
    hw.fail_writes_after = None;
    trigger(&mut svc, now, &mut camera, &mut speech, &mut sink);
    svc.tick(now, &mut hw, &mut sink);
    assert_eq!(hw.writes.len(), 4);
    assert_eq!(hw.writes[3], 180.0);
}

#[test]
fn steps_respect_the_interval() {
    let (mut svc, mut hw, mut camera, mut speech, mut sink) = make_rig();
    trigger(&mut svc, 0, &mut camera, &mut speech, &mut sink);

    svc.tick(0, &mut hw, &mut sink);
    assert_eq!(hw.writes.len(), 1);

    // Loop ticks arriving faster than the step interval do not add writes.
    for now in (50..STEP_MS).step_by(50) {
        svc.tick(now, &mut hw, &mut sink);
    }
    assert_eq!(hw.writes.len(), 1);

    svc.tick(STEP_MS, &mut hw, &mut sink);
    assert_eq!(hw.writes.len(), 2);
}
