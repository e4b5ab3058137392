//! Doorbell service — the hexagonal core.
//!
//! [`DoorbellService`] is the event orchestrator: it owns the animator, the
//! capture pipeline, and the announcer, and coordinates them per motion
//! trigger. All I/O flows through port traits injected at call sites, making
//! the entire service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────────┐ ──▶ EventSink
//!                 │       DoorbellService       │ ──▶ CameraPort / UploadSink
//! ActuatorPort ◀──│  Animator · Pipeline · TTS  │ ──▶ SpeechPort
//!                 └────────────────────────────┘
//! ```
//!
//! The three per-trigger dispatches (capture, speak, animate) are
//! fire-and-forget and isolated: a failure in any one never blocks or
//! aborts the others. Overlapping triggers are not serialized — a new
//! trigger supersedes the running animation rather than queueing behind it.

use log::info;

use crate::animator::MouthAnimator;
use crate::announcer::Announcer;
use crate::config::SystemConfig;
use crate::detector::MotionEvent;
use crate::pipeline::CapturePipeline;

use super::events::AppEvent;
use super::ports::{
    ActuatorPort, CameraPort, CaptureOutcome, EventSink, SensorPort, SpeechPort, UploadSink,
};
use crate::error::UploadError;

// ───────────────────────────────────────────────────────────────
// DoorbellService
// ───────────────────────────────────────────────────────────────

/// Orchestrates the capture, announcement, and animation side effects of
/// each motion trigger, and owns peripheral lifecycle.
pub struct DoorbellService {
    animator: MouthAnimator,
    pipeline: CapturePipeline,
    announcer: Announcer,
    announcement: String,
    motions_seen: u64,
    shut_down: bool,
}

impl DoorbellService {
    /// Construct the service from configuration.
    ///
    /// Does **not** open peripherals — call [`start`](Self::start) next.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            animator: MouthAnimator::new(
                config.mouth_step_count,
                config.mouth_step_interval_ms,
                config.servo_min_angle_deg,
                config.servo_max_angle_deg,
            ),
            pipeline: CapturePipeline::new(),
            announcer: Announcer::new(&config.speech_locale, config.speech_pitch),
            announcement: config.announcement.clone(),
            motions_seen: 0,
            shut_down: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Open both peripherals, begin sensor notification, and bring up the
    /// speech engine. Peripheral open failures are logged and non-fatal:
    /// the rest of the system keeps working without the broken part.
    pub fn start(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        speech: &mut impl SpeechPort,
        sink: &mut impl EventSink,
    ) {
        if let Err(e) = hw.open_sensor() {
            log::error!("Motion sensor open failed: {e} — doorbell will not trigger");
        }
        if let Err(e) = hw.open_actuator() {
            log::error!("Servo open failed: {e} — mouth animation disabled");
        }
        self.announcer.init(speech, sink);

        sink.emit(&AppEvent::Started);
        info!("DoorbellService started");
    }

    /// Cancel any in-flight animation, then release both peripherals.
    /// Best-effort: individual close failures are swallowed inside the
    /// ports so every resource gets its close attempt. Repeat calls are
    /// no-ops — each handle is closed exactly once.
    pub fn shutdown(&mut self, hw: &mut (impl SensorPort + ActuatorPort), sink: &mut impl EventSink) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        self.animator.cancel();
        hw.close_actuator();
        hw.close_sensor();

        sink.emit(&AppEvent::ShutdownComplete);
        info!("DoorbellService shut down");
    }

    // ── Per-trigger orchestration ─────────────────────────────

    /// Handle one logical motion event.
    ///
    /// Dispatch order is fixed — capture, speak, animate — but all three
    /// are fire-and-forget; completion order across them is unconstrained.
    pub fn on_motion(
        &mut self,
        event: MotionEvent,
        camera: &mut impl CameraPort,
        speech: &mut impl SpeechPort,
        sink: &mut impl EventSink,
    ) {
        self.motions_seen += 1;
        info!("Motion detected (t={}ms)", event.at_ms);
        sink.emit(&AppEvent::MotionDetected { at_ms: event.at_ms });

        self.pipeline.request_capture(camera, sink);
        self.announcer.speak(speech, &self.announcement, sink);
        self.animator.trigger(event.at_ms, sink);
    }

    // ── Per-tick work ─────────────────────────────────────────

    /// Run the animator's due step, if any. Call once per loop iteration.
    pub fn tick(&mut self, now_ms: u64, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        self.animator.tick(now_ms, hw, sink);
    }

    // ── Asynchronous completions ──────────────────────────────

    /// Feed one completed capture into the upload pipeline.
    pub fn on_frame(
        &mut self,
        outcome: CaptureOutcome,
        epoch_ms: u64,
        uploads: &mut impl UploadSink,
        sink: &mut impl EventSink,
    ) {
        self.pipeline.on_frame(outcome, epoch_ms, uploads, sink);
    }

    /// Observe one asynchronous upload result.
    pub fn on_upload_result(
        &mut self,
        object: &str,
        result: Result<(), UploadError>,
        sink: &mut impl EventSink,
    ) {
        self.pipeline.on_upload_result(object, result, sink);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Whether an animation run is currently live.
    pub fn animation_active(&self) -> bool {
        self.animator.is_active()
    }

    /// Motion triggers handled since startup.
    pub fn motions_seen(&self) -> u64 {
        self.motions_seen
    }

    /// Captures dispatched since startup.
    pub fn captures_requested(&self) -> u64 {
        self.pipeline.captures_requested()
    }

    /// Emit the periodic liveness report.
    pub fn heartbeat(&self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Heartbeat {
            motions_seen: self.motions_seen,
        });
    }
}
