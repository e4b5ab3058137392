//! Integration tests for the DoorbellService orchestration contract:
//! dispatch order, isolation between the three side effects, and
//! shutdown/resource lifecycle.

use crate::mock_hw::{
    MockHardware, RecordingSink, RecordingSpeech, RecordingUploads, ScriptedCamera,
};

use skellybell::app::events::AppEvent;
use skellybell::app::ports::{CameraPort, CaptureOutcome};
use skellybell::app::service::DoorbellService;
use skellybell::config::SystemConfig;
use skellybell::detector::MotionEvent;
use skellybell::error::CaptureError;

fn make_service() -> (DoorbellService, MockHardware, RecordingSink) {
    let config = SystemConfig::default();
    let svc = DoorbellService::new(&config);
    (svc, MockHardware::new(), RecordingSink::new())
}

// ── Dispatch order: capture, speak, animate ──────────────────

#[test]
fn motion_dispatches_in_fixed_order() {
    let (mut svc, mut hw, mut sink) = make_service();
    let mut camera = ScriptedCamera::new(vec![CaptureOutcome::Frame(vec![1])]);
    let mut speech = RecordingSpeech::new();
    svc.start(&mut hw, &mut speech, &mut sink);

    svc.on_motion(
        MotionEvent { at_ms: 100 },
        &mut camera,
        &mut speech,
        &mut sink,
    );

    let pos = |pred: fn(&AppEvent) -> bool| {
        sink.events
            .iter()
            .position(|e| pred(e))
            .expect("dispatched")
    };
    let capture = pos(|e| matches!(e, AppEvent::CaptureRequested));
    let speak = pos(|e| matches!(e, AppEvent::AnnouncementQueued));
    let animate = pos(|e| matches!(e, AppEvent::AnimationStarted { .. }));

    assert!(capture < speak);
    assert!(speak < animate);
}

// ── Isolation: capture failure leaves speak + animate intact ─

#[test]
fn failed_capture_does_not_suppress_speech_or_animation() {
    let (mut svc, mut hw, mut sink) = make_service();
    let mut camera = ScriptedCamera::new(vec![CaptureOutcome::Failed(CaptureError::NoFrame)]);
    let mut speech = RecordingSpeech::new();
    let mut uploads = RecordingUploads::new();
    svc.start(&mut hw, &mut speech, &mut sink);

    svc.on_motion(
        MotionEvent { at_ms: 50 },
        &mut camera,
        &mut speech,
        &mut sink,
    );

    // Speech and animation dispatched despite the doomed capture.
    assert_eq!(speech.spoken, vec!["Thanks for stopping by!"]);
    assert!(svc.animation_active());

    // The completed (failed) capture skips the upload and nothing else.
    let outcome = camera.poll_frame().expect("capture completed");
    svc.on_frame(outcome, 1000, &mut uploads, &mut sink);
    assert!(uploads.jobs.is_empty());
    assert_eq!(sink.count(|e| matches!(e, AppEvent::CaptureFailed(_))), 1);
}

#[test]
fn speech_init_failure_does_not_suppress_capture_or_animation() {
    let (mut svc, mut hw, mut sink) = make_service();
    let mut camera = ScriptedCamera::new(vec![CaptureOutcome::Frame(vec![1])]);
    let mut speech = RecordingSpeech::new();
    speech.fail_init = true;
    svc.start(&mut hw, &mut speech, &mut sink);

    svc.on_motion(
        MotionEvent { at_ms: 10 },
        &mut camera,
        &mut speech,
        &mut sink,
    );

    assert_eq!(sink.count(|e| matches!(e, AppEvent::SpeechUnavailable)), 1);
    assert!(speech.spoken.is_empty());
    assert_eq!(camera.take_count, 1);
    assert!(svc.animation_active());
}

// ── End-to-end: frame → named upload job ─────────────────────

#[test]
fn captured_frame_reaches_storage_under_timestamp_name() {
    let (mut svc, mut hw, mut sink) = make_service();
    let mut camera = ScriptedCamera::new(vec![CaptureOutcome::Frame(vec![9, 9, 9])]);
    let mut speech = RecordingSpeech::new();
    let mut uploads = RecordingUploads::new();
    svc.start(&mut hw, &mut speech, &mut sink);

    svc.on_motion(
        MotionEvent { at_ms: 5 },
        &mut camera,
        &mut speech,
        &mut sink,
    );
    let outcome = camera.poll_frame().expect("capture completed");
    svc.on_frame(outcome, 1_234_567, &mut uploads, &mut sink);

    assert_eq!(uploads.jobs.len(), 1);
    assert_eq!(uploads.jobs[0].object_name.as_str(), "1234567.png");
    assert_eq!(uploads.jobs[0].bytes, vec![9, 9, 9]);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::UploadQueued { .. })), 1);
}

// ── Peripheral open failures are non-fatal ───────────────────

#[test]
fn start_survives_actuator_open_failure() {
    let (mut svc, mut hw, mut sink) = make_service();
    hw.fail_open_actuator = true;
    let mut speech = RecordingSpeech::new();
    let mut camera = ScriptedCamera::new(vec![CaptureOutcome::Frame(vec![1])]);

    svc.start(&mut hw, &mut speech, &mut sink);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::Started)), 1);

    // Triggers still dispatch; the animation just fails at write time.
    svc.on_motion(
        MotionEvent { at_ms: 1 },
        &mut camera,
        &mut speech,
        &mut sink,
    );
    assert_eq!(speech.spoken.len(), 1);
}

// ── Shutdown semantics ───────────────────────────────────────

#[test]
fn shutdown_cancels_animation_and_closes_each_handle_once() {
    let (mut svc, mut hw, mut sink) = make_service();
    let mut camera = ScriptedCamera::new(vec![CaptureOutcome::Frame(vec![1])]);
    let mut speech = RecordingSpeech::new();
    svc.start(&mut hw, &mut speech, &mut sink);

    svc.on_motion(
        MotionEvent { at_ms: 0 },
        &mut camera,
        &mut speech,
        &mut sink,
    );
    svc.tick(0, &mut hw, &mut sink);
    assert_eq!(hw.writes.len(), 1);
    assert!(svc.animation_active());

    svc.shutdown(&mut hw, &mut sink);

    // Cancelled task produces no further writes, ever.
    svc.tick(1000, &mut hw, &mut sink);
    svc.tick(2000, &mut hw, &mut sink);
    assert_eq!(hw.writes.len(), 1);
    assert!(!svc.animation_active());

    assert_eq!(hw.actuator_closes, 1);
    assert_eq!(hw.sensor_closes, 1);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::ShutdownComplete)), 1);

    // Repeat shutdown is a no-op: each handle still closed exactly once.
    svc.shutdown(&mut hw, &mut sink);
    assert_eq!(hw.actuator_closes, 1);
    assert_eq!(hw.sensor_closes, 1);
}

// ── Upload results are observed only ─────────────────────────

#[test]
fn upload_failure_is_reported_and_dropped() {
    let (mut svc, _hw, mut sink) = make_service();
    svc.on_upload_result(
        "77.png",
        Err(skellybell::error::UploadError::Rejected),
        &mut sink,
    );
    svc.on_upload_result("78.png", Ok(()), &mut sink);

    assert_eq!(sink.count(|e| matches!(e, AppEvent::UploadFailed { .. })), 1);
}
