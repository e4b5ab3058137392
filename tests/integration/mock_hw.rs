//! Mock adapters for integration tests.
//!
//! Record every port call so tests can assert on the full command history
//! without touching real peripherals or external services.

use std::collections::VecDeque;

use skellybell::app::events::AppEvent;
use skellybell::app::ports::{
    ActuatorPort, CameraPort, CaptureOutcome, EventSink, SensorLevel, SensorPort, SpeechPort,
    UploadSink,
};
use skellybell::error::{PeripheralError, SpeechError, UploadError};
use skellybell::pipeline::UploadJob;

// ── MockHardware ──────────────────────────────────────────────

#[allow(dead_code)]
pub struct MockHardware {
    /// Level returned by the next sensor read.
    pub level: Result<SensorLevel, PeripheralError>,
    /// Every servo angle write, in order.
    pub writes: Vec<f32>,
    /// When set, servo writes fail once this many have succeeded.
    pub fail_writes_after: Option<usize>,
    pub fail_open_sensor: bool,
    pub fail_open_actuator: bool,
    pub sensor_closes: u32,
    pub actuator_closes: u32,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            level: Ok(SensorLevel::Low),
            writes: Vec::new(),
            fail_writes_after: None,
            fail_open_sensor: false,
            fail_open_actuator: false,
            sensor_closes: 0,
            actuator_closes: 0,
        }
    }
}

impl SensorPort for MockHardware {
    fn open_sensor(&mut self) -> Result<(), PeripheralError> {
        if self.fail_open_sensor {
            Err(PeripheralError::OpenFailed)
        } else {
            Ok(())
        }
    }

    fn read_level(&mut self) -> Result<SensorLevel, PeripheralError> {
        self.level
    }

    fn close_sensor(&mut self) {
        self.sensor_closes += 1;
    }
}

impl ActuatorPort for MockHardware {
    fn open_actuator(&mut self) -> Result<(), PeripheralError> {
        if self.fail_open_actuator {
            Err(PeripheralError::OpenFailed)
        } else {
            Ok(())
        }
    }

    fn set_angle(&mut self, degrees: f32) -> Result<(), PeripheralError> {
        if self.fail_writes_after.is_some_and(|n| self.writes.len() >= n) {
            return Err(PeripheralError::PwmWriteFailed);
        }
        self.writes.push(degrees);
        Ok(())
    }

    fn close_actuator(&mut self) {
        self.actuator_closes += 1;
    }
}

// ── ScriptedCamera ────────────────────────────────────────────

/// Each `take_picture` moves the next scripted outcome into the ready
/// queue, delivered by the following `poll_frame` — one loop later, like
/// the real capture stack.
#[allow(dead_code)]
pub struct ScriptedCamera {
    script: VecDeque<CaptureOutcome>,
    ready: VecDeque<CaptureOutcome>,
    pub take_count: u32,
}

#[allow(dead_code)]
impl ScriptedCamera {
    pub fn new(script: Vec<CaptureOutcome>) -> Self {
        Self {
            script: script.into(),
            ready: VecDeque::new(),
            take_count: 0,
        }
    }
}

impl CameraPort for ScriptedCamera {
    fn take_picture(&mut self) {
        self.take_count += 1;
        if let Some(outcome) = self.script.pop_front() {
            self.ready.push_back(outcome);
        }
    }

    fn poll_frame(&mut self) -> Option<CaptureOutcome> {
        self.ready.pop_front()
    }
}

// ── RecordingSpeech ───────────────────────────────────────────

#[allow(dead_code)]
pub struct RecordingSpeech {
    pub fail_init: bool,
    pub spoken: Vec<String>,
}

#[allow(dead_code)]
impl RecordingSpeech {
    pub fn new() -> Self {
        Self {
            fail_init: false,
            spoken: Vec::new(),
        }
    }
}

impl SpeechPort for RecordingSpeech {
    fn configure(&mut self, _locale: &str, _pitch: f32) -> Result<(), SpeechError> {
        if self.fail_init {
            Err(SpeechError::EngineInitFailed)
        } else {
            Ok(())
        }
    }

    fn speak(&mut self, text: &str) {
        self.spoken.push(text.to_owned());
    }
}

// ── RecordingUploads ──────────────────────────────────────────

#[allow(dead_code)]
pub struct RecordingUploads {
    pub jobs: Vec<UploadJob>,
    pub results: VecDeque<(String, Result<(), UploadError>)>,
}

#[allow(dead_code)]
impl RecordingUploads {
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            results: VecDeque::new(),
        }
    }
}

impl UploadSink for RecordingUploads {
    fn upload(&mut self, job: UploadJob) {
        self.jobs.push(job);
    }

    fn poll_result(&mut self) -> Option<(String, Result<(), UploadError>)> {
        self.results.pop_front()
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[allow(dead_code)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
