//! Capture-and-upload pipeline.
//!
//! One trigger produces at most one [`UploadJob`]: the camera is asked for
//! a frame, and a completed non-empty frame is forwarded unmodified to the
//! storage sink under a fresh timestamp-derived object name. Fire-and-forget
//! throughout — the orchestrator never waits on capture or upload, no retry
//! state is kept, and upload results are observed but not acted upon.

use core::fmt::Write as _;

use crate::app::events::AppEvent;
use crate::app::ports::{CameraPort, CaptureOutcome, EventSink, UploadSink};
use crate::error::UploadError;

/// Ephemeral upload unit: raw image bytes plus the generated object name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadJob {
    /// `<epoch-millis>.png`, unique per trigger.
    pub object_name: heapless::String<32>,
    /// Unmodified encoded image buffer from the camera.
    pub bytes: Vec<u8>,
}

/// Dispatches captures and forwards completed frames to storage.
#[derive(Default)]
pub struct CapturePipeline {
    /// Timestamp used for the most recent object name; bumped forward on
    /// same-millisecond collisions so names stay unique per trigger.
    last_object_ts_ms: u64,
    captures_requested: u64,
    uploads_queued: u64,
}

impl CapturePipeline {
    pub fn new() -> Self {
        Self {
            last_object_ts_ms: 0,
            captures_requested: 0,
            uploads_queued: 0,
        }
    }

    /// Ask the camera for one frame. Returns immediately; the completed
    /// outcome arrives later through [`on_frame`](Self::on_frame).
    pub fn request_capture(&mut self, camera: &mut impl CameraPort, sink: &mut impl EventSink) {
        camera.take_picture();
        self.captures_requested += 1;
        sink.emit(&AppEvent::CaptureRequested);
    }

    /// Handle one completed capture. A failed or empty frame skips the
    /// upload; a real frame is queued on the sink under a unique name.
    pub fn on_frame(
        &mut self,
        outcome: CaptureOutcome,
        epoch_ms: u64,
        uploads: &mut impl UploadSink,
        sink: &mut impl EventSink,
    ) {
        let bytes = match outcome {
            CaptureOutcome::Frame(bytes) if !bytes.is_empty() => bytes,
            CaptureOutcome::Frame(_) => {
                sink.emit(&AppEvent::CaptureFailed(crate::error::CaptureError::NoFrame));
                return;
            }
            CaptureOutcome::Failed(e) => {
                sink.emit(&AppEvent::CaptureFailed(e));
                return;
            }
        };

        let object_name = self.next_object_name(epoch_ms);
        sink.emit(&AppEvent::UploadQueued {
            object: object_name.clone(),
        });
        uploads.upload(UploadJob { object_name, bytes });
        self.uploads_queued += 1;
    }

    /// Observe one asynchronous upload result. Failures are logged and
    /// reported to the sink; nothing is retried.
    pub fn on_upload_result(
        &mut self,
        object: &str,
        result: Result<(), UploadError>,
        sink: &mut impl EventSink,
    ) {
        match result {
            Ok(()) => log::debug!("Upload complete: {object}"),
            Err(e) => {
                log::warn!("Upload failed: {object} ({e})");
                let mut name = heapless::String::new();
                let _ = name.push_str(object);
                sink.emit(&AppEvent::UploadFailed {
                    object: name,
                    error: e,
                });
            }
        }
    }

    /// Captures dispatched since startup.
    pub fn captures_requested(&self) -> u64 {
        self.captures_requested
    }

    /// Jobs handed to the storage sink since startup.
    pub fn uploads_queued(&self) -> u64 {
        self.uploads_queued
    }

    fn next_object_name(&mut self, epoch_ms: u64) -> heapless::String<32> {
        let ts = epoch_ms.max(self.last_object_ts_ms + 1);
        self.last_object_ts_ms = ts;

        let mut name = heapless::String::new();
        // 20 digits + ".png" fits the 32-byte capacity for any u64.
        let _ = write!(name, "{ts}.png");
        name
    }
}
