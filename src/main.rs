//! SkellyBell — Main Entry Point
//!
//! Hexagonal architecture with event-driven execution.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter    LogEventSink    SimCamera                  │
//! │  (Sensor+Actuator)  (EventSink)     (CameraPort)               │
//! │  LogSpeech          LogUploadSink                              │
//! │  (SpeechPort)       (UploadSink)                               │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            DoorbellService (pure logic)                │    │
//! │  │  Detector · Animator · Pipeline · Announcer            │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use log::info;

use skellybell::adapters::camera::SimCamera;
use skellybell::adapters::hardware::HardwareAdapter;
use skellybell::adapters::log_sink::LogEventSink;
use skellybell::adapters::speech::LogSpeech;
use skellybell::adapters::storage::LogUploadSink;
use skellybell::app::ports::{CameraPort, UploadSink};
use skellybell::app::service::DoorbellService;
use skellybell::config::SystemConfig;
use skellybell::detector::MotionDetector;
use skellybell::drivers::motion::MotionSensorDriver;
use skellybell::drivers::servo::ServoDriver;
use skellybell::events::{self, Event, push_event};

const CONFIG_PATH_ENV: &str = "SKELLYBELL_CONFIG";
const CONFIG_PATH_DEFAULT: &str = "/etc/skellybell/config.json";

/// Wall-clock milliseconds, used only for upload object names.
fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Watch the console for a stop request ("quit" or end-of-input) and turn
/// it into a loop event. Runs detached for the process lifetime.
fn spawn_console_watcher() {
    std::thread::spawn(|| {
        let mut line = String::new();
        loop {
            line.clear();
            match std::io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => {
                    push_event(Event::ShutdownRequested);
                    break;
                }
                Ok(_) if line.trim() == "quit" => {
                    push_event(Event::ShutdownRequested);
                    break;
                }
                Ok(_) => {}
            }
        }
    });
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("SkellyBell v{}", env!("CARGO_PKG_VERSION"));

    // ── 1. Load config (file or defaults) ─────────────────────
    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| CONFIG_PATH_DEFAULT.to_owned());
    let config = SystemConfig::load_or_default(&config_path);

    // ── 2. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        MotionSensorDriver::new(config.motion_sensor_pin),
        ServoDriver::new(
            config.servo_pwm_channel,
            config.servo_min_angle_deg,
            config.servo_max_angle_deg,
        ),
    );
    let mut camera = SimCamera::new();
    let mut speech = LogSpeech::new();
    let mut uploads = LogUploadSink::new(&config.storage_root);
    let mut sink = LogEventSink::new();

    // ── 3. Construct and start the service ────────────────────
    let mut service = DoorbellService::new(&config);
    let mut detector = MotionDetector::new();
    service.start(&mut hw, &mut speech, &mut sink);

    spawn_console_watcher();
    info!("System ready. Entering event loop (type 'quit' to stop).");

    // ── 4. Event loop ─────────────────────────────────────────
    let started = Instant::now();
    let heartbeat_period =
        u64::from(config.heartbeat_interval_secs) * 1000 / config.control_loop_interval_ms.max(1);
    let mut loop_count: u64 = 0;
    let mut stop = false;

    // Host-only visitor simulation state.
    #[cfg(not(feature = "board"))]
    let mut sim = VisitorSim::new(config.control_loop_interval_ms);

    while !stop {
        // The sleep is the loop's suspension point. On real hardware the
        // GPIO interrupt fires independently of it and is picked up on the
        // next iteration.
        std::thread::sleep(Duration::from_millis(config.control_loop_interval_ms));
        push_event(Event::ControlTick);

        loop_count += 1;
        if heartbeat_period > 0 && loop_count % heartbeat_period == 0 {
            push_event(Event::HeartbeatTick);
        }

        #[cfg(not(feature = "board"))]
        sim.tick(&mut hw);

        let now_ms = started.elapsed().as_millis() as u64;

        events::drain_events(|event| match event {
            Event::ControlTick | Event::MotionSensorChanged => {
                if let Some(motion) = detector.tick(&mut hw, now_ms, &mut sink) {
                    service.on_motion(motion, &mut camera, &mut speech, &mut sink);
                }
            }
            Event::HeartbeatTick => service.heartbeat(&mut sink),
            Event::ShutdownRequested => stop = true,
        });

        // Due animation step, if any.
        service.tick(now_ms, &mut hw, &mut sink);

        // Asynchronous completions from the collaborators.
        if let Some(outcome) = camera.poll_frame() {
            service.on_frame(outcome, epoch_ms(), &mut uploads, &mut sink);
        }
        while let Some((object, result)) = uploads.poll_result() {
            service.on_upload_result(&object, result, &mut sink);
        }
    }

    // ── 5. Shutdown ───────────────────────────────────────────
    service.shutdown(&mut hw, &mut sink);
    Ok(())
}

/// Synthesizes a visitor every ~20 s on host builds: a HIGH pulse held for
/// two seconds, delivered through the same notification path the GPIO
/// interrupt would use.
#[cfg(not(feature = "board"))]
struct VisitorSim {
    loop_count: u64,
    arrive_at: u64,
    leave_at: u64,
}

#[cfg(not(feature = "board"))]
impl VisitorSim {
    fn new(loop_interval_ms: u64) -> Self {
        let interval = loop_interval_ms.max(1);
        Self {
            loop_count: 0,
            arrive_at: 20_000 / interval,
            leave_at: 22_000 / interval,
        }
    }

    fn tick(&mut self, hw: &mut HardwareAdapter) {
        use skellybell::app::ports::SensorLevel;
        use skellybell::detector::sensor_isr_notify;

        self.loop_count += 1;
        if self.loop_count == self.arrive_at {
            hw.sim_set_level(SensorLevel::High);
            sensor_isr_notify(SensorLevel::High);
            push_event(Event::MotionSensorChanged);
        } else if self.loop_count == self.leave_at {
            hw.sim_set_level(SensorLevel::Low);
            sensor_isr_notify(SensorLevel::Low);
            push_event(Event::MotionSensorChanged);
            self.loop_count = 0;
        }
    }
}
