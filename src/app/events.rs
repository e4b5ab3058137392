//! Outbound application events.
//!
//! The [`DoorbellService`](super::service::DoorbellService) and its domain
//! components emit these through the [`EventSink`](super::ports::EventSink)
//! port. Adapters on the other side decide what to do with them — log to
//! the console, publish over MQTT, record in tests.

use crate::error::{CaptureError, PeripheralError, UploadError};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The controller has started and opened its peripherals.
    Started,

    /// A visitor tripped the motion sensor (rising edge).
    MotionDetected { at_ms: u64 },

    /// A sensor level read failed; the sample was dropped.
    SensorReadFailed(PeripheralError),

    /// One capture was requested from the camera.
    CaptureRequested,

    /// The capture completed without a usable frame; upload skipped.
    CaptureFailed(CaptureError),

    /// A frame was handed to the storage sink under `object`.
    UploadQueued { object: heapless::String<32> },

    /// The sink reported an upload failure (observed, not retried).
    UploadFailed {
        object: heapless::String<32>,
        error: UploadError,
    },

    /// A fresh mouth animation run started (superseding any prior run).
    AnimationStarted { steps: u8 },

    /// An animation run completed all of its steps.
    AnimationFinished,

    /// An animation run was terminated early by a servo write failure.
    AnimationFault(PeripheralError),

    /// The announcement was handed to the speech engine.
    AnnouncementQueued,

    /// The speech engine failed to initialise; announcements disabled.
    SpeechUnavailable,

    /// Periodic liveness report.
    Heartbeat { motions_seen: u64 },

    /// All peripherals have been released.
    ShutdownComplete,
}
