//! Port traits — the hexagonal boundary between domain logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DoorbellService (domain)
//! ```
//!
//! Driven adapters (sensor, servo, camera, speech engine, storage sink,
//! event sinks) implement these traits. The
//! [`DoorbellService`](super::service::DoorbellService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::error::{CaptureError, PeripheralError, SpeechError, UploadError};
use crate::pipeline::UploadJob;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Logical level of the motion sensor output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorLevel {
    Low,
    High,
}

/// Read-side port: the edge detector samples the motion sensor through this.
pub trait SensorPort {
    /// Open the sensor peripheral and begin level-change notification.
    fn open_sensor(&mut self) -> Result<(), PeripheralError>;

    /// Read the current logical level.
    fn read_level(&mut self) -> Result<SensorLevel, PeripheralError>;

    /// Release the sensor. Idempotent; internal errors are logged and
    /// swallowed so shutdown always completes.
    fn close_sensor(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the animator commands the jaw servo through this.
///
/// Angle writes are clamped to the range configured at open time; callers
/// must not assume sub-range values are valid.
pub trait ActuatorPort {
    /// Open the servo peripheral.
    fn open_actuator(&mut self) -> Result<(), PeripheralError>;

    /// Command the servo to `degrees` (clamped to the configured range).
    fn set_angle(&mut self, degrees: f32) -> Result<(), PeripheralError>;

    /// Release the servo. Idempotent; never raises.
    fn close_actuator(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Camera port (external collaborator, interface only)
// ───────────────────────────────────────────────────────────────

/// Result of one completed capture request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// An encoded image buffer (PNG/JPEG, forwarded unmodified).
    Frame(Vec<u8>),
    /// The capture completed without a usable image.
    Failed(CaptureError),
}

/// The capture pipeline requests frames through this port. Completion is
/// asynchronous: `take_picture` returns immediately and the finished
/// outcome is collected later via `poll_frame`.
pub trait CameraPort {
    /// Start one capture. Fire-and-forget.
    fn take_picture(&mut self);

    /// Collect a completed capture, if one is ready.
    fn poll_frame(&mut self) -> Option<CaptureOutcome>;
}

// ───────────────────────────────────────────────────────────────
// Speech port (external collaborator, interface only)
// ───────────────────────────────────────────────────────────────

/// Text-to-speech engine boundary.
///
/// Queueing semantics are "append": `speak` never interrupts or replaces
/// an utterance already playing.
pub trait SpeechPort {
    /// Apply locale and pitch. Called once at startup; failure is terminal
    /// for the announcer (it becomes unavailable).
    fn configure(&mut self, locale: &str, pitch: f32) -> Result<(), SpeechError>;

    /// Enqueue one utterance for asynchronous playback.
    fn speak(&mut self, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Upload sink (external collaborator, interface only)
// ───────────────────────────────────────────────────────────────

/// Remote storage boundary. Accepts jobs fire-and-forget and reports
/// completion asynchronously via `poll_result`; results are observed but
/// carry no user-visible consequence.
pub trait UploadSink {
    /// Accept one upload job.
    fn upload(&mut self, job: UploadJob);

    /// Collect one completed upload result, if any: the object name and
    /// its success/failure outcome.
    fn poll_result(&mut self) -> Option<(String, Result<(), UploadError>)>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log, MQTT,
/// test recorder, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
