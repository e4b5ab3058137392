//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! process logger. A future MQTT or webhook adapter would implement the
//! same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => info!("START | peripherals open, listening for visitors"),
            AppEvent::MotionDetected { at_ms } => info!("MOTION | rising edge at t={at_ms}ms"),
            AppEvent::SensorReadFailed(e) => warn!("MOTION | level read failed: {e}"),
            AppEvent::CaptureRequested => info!("CAPTURE | frame requested"),
            AppEvent::CaptureFailed(e) => warn!("CAPTURE | no frame ({e}), upload skipped"),
            AppEvent::UploadQueued { object } => info!("UPLOAD | queued {object}"),
            AppEvent::UploadFailed { object, error } => {
                warn!("UPLOAD | {object} failed: {error}");
            }
            AppEvent::AnimationStarted { steps } => info!("MOUTH | run started ({steps} steps)"),
            AppEvent::AnimationFinished => info!("MOUTH | run complete"),
            AppEvent::AnimationFault(e) => warn!("MOUTH | run aborted: {e}"),
            AppEvent::AnnouncementQueued => info!("SPEECH | announcement queued"),
            AppEvent::SpeechUnavailable => warn!("SPEECH | engine unavailable, muted"),
            AppEvent::Heartbeat { motions_seen } => {
                info!("HEARTBEAT | motions_seen={motions_seen}");
            }
            AppEvent::ShutdownComplete => info!("STOP | peripherals released"),
        }
    }
}
