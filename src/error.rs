//! Error types for the SkellyBell controller.
//!
//! One small enum per failure domain, matching the port boundary it
//! crosses. All variants are `Copy` so they can be passed through
//! event-loop plumbing without allocation. There is deliberately no
//! umbrella error type: nothing in the controller handles two domains'
//! failures through one path — each error is consumed (logged, reported
//! on the event stream, or latched) right where its domain ends.

use core::fmt;

// ---------------------------------------------------------------------------
// Peripheral errors
// ---------------------------------------------------------------------------

/// Sensor/actuator transport failures. Always non-fatal to the orchestrator:
/// the originating operation is aborted and logged, nothing propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeripheralError {
    /// GPIO level read returned an error.
    GpioReadFailed,
    /// PWM pulse-width write failed.
    PwmWriteFailed,
    /// The peripheral could not be opened.
    OpenFailed,
    /// Operation attempted on a peripheral that is not open.
    NotOpen,
}

impl fmt::Display for PeripheralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioReadFailed => write!(f, "GPIO read failed"),
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
            Self::OpenFailed => write!(f, "open failed"),
            Self::NotOpen => write!(f, "peripheral not open"),
        }
    }
}

impl std::error::Error for PeripheralError {}

// ---------------------------------------------------------------------------
// Capture errors
// ---------------------------------------------------------------------------

/// A capture request completed without producing an image. The upload step
/// is skipped; nothing else is affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    /// The camera delivered no frame (timeout or empty buffer).
    NoFrame,
    /// The camera device is absent or failed to initialise.
    CameraUnavailable,
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFrame => write!(f, "no frame produced"),
            Self::CameraUnavailable => write!(f, "camera unavailable"),
        }
    }
}

impl std::error::Error for CaptureError {}

// ---------------------------------------------------------------------------
// Upload errors
// ---------------------------------------------------------------------------

/// Reported asynchronously by the storage sink. Observed and logged, never
/// acted upon — the pipeline keeps no retry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadError {
    /// The sink could not be reached.
    ConnectionFailed,
    /// The sink refused the object.
    Rejected,
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed => write!(f, "connection failed"),
            Self::Rejected => write!(f, "object rejected"),
        }
    }
}

impl std::error::Error for UploadError {}

// ---------------------------------------------------------------------------
// Speech errors
// ---------------------------------------------------------------------------

/// Terminal for the announcer only: a failed engine configure disables
/// announcements for the remainder of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechError {
    /// The engine failed to start.
    EngineInitFailed,
    /// The requested locale is not installed.
    LocaleUnsupported,
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EngineInitFailed => write!(f, "engine init failed"),
            Self::LocaleUnsupported => write!(f, "locale unsupported"),
        }
    }
}

impl std::error::Error for SpeechError {}
