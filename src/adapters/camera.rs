//! Simulated camera adapter.
//!
//! Placeholder [`CameraPort`] implementation: `take_picture` marks a capture
//! pending and `poll_frame` delivers a canned PNG on the next poll, mimicking
//! the one-loop-later completion of a real capture stack. The V4L2 capture
//! adapter will replace this behind the same trait.

use crate::app::ports::{CameraPort, CaptureOutcome};

/// Minimal valid-ish PNG header used as the stand-in frame payload.
const STUB_FRAME: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[derive(Default)]
pub struct SimCamera {
    pending: u32,
}

impl SimCamera {
    pub fn new() -> Self {
        Self { pending: 0 }
    }
}

impl CameraPort for SimCamera {
    fn take_picture(&mut self) {
        self.pending += 1;
    }

    fn poll_frame(&mut self) -> Option<CaptureOutcome> {
        if self.pending == 0 {
            return None;
        }
        self.pending -= 1;
        Some(CaptureOutcome::Frame(STUB_FRAME.to_vec()))
    }
}
