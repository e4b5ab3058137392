//! System configuration parameters
//!
//! All tunable parameters for the SkellyBell controller. Values can be
//! overridden via a JSON config file; everything the firmware would
//! otherwise hard-code lives here so a board rework never touches code.

use serde::{Deserialize, Serialize};

use crate::pins;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Peripherals ---
    /// BCM pin of the PIR motion sensor output.
    pub motion_sensor_pin: u8,
    /// Hardware PWM channel of the jaw servo.
    pub servo_pwm_channel: u8,
    /// Lowest angle the jaw servo may be commanded to (degrees).
    pub servo_min_angle_deg: f32,
    /// Highest angle the jaw servo may be commanded to (degrees).
    pub servo_max_angle_deg: f32,

    // --- Mouth animation ---
    /// Number of servo writes per animation run.
    pub mouth_step_count: u8,
    /// Delay between consecutive animation steps (milliseconds).
    pub mouth_step_interval_ms: u64,

    // --- Announcement ---
    /// Utterance spoken on each visitor.
    pub announcement: String,
    /// BCP-47 locale tag handed to the speech engine at startup.
    pub speech_locale: String,
    /// Voice pitch multiplier (1.0 = engine default; low = spooky).
    pub speech_pitch: f32,

    // --- Upload ---
    /// Storage root the capture pipeline uploads into.
    pub storage_root: String,

    // --- Timing ---
    /// Main control loop interval (milliseconds).
    pub control_loop_interval_ms: u64,
    /// Heartbeat report interval (seconds).
    pub heartbeat_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Peripherals
            motion_sensor_pin: pins::MOTION_SENSOR_GPIO,
            servo_pwm_channel: pins::SERVO_PWM_CHANNEL,
            servo_min_angle_deg: 0.0,
            servo_max_angle_deg: 180.0,

            // Mouth animation
            mouth_step_count: 6,
            mouth_step_interval_ms: 1000,

            // Announcement
            announcement: "Thanks for stopping by!".to_owned(),
            speech_locale: "en-GB".to_owned(),
            speech_pitch: 0.3,

            // Upload
            storage_root: "gs://skellybell-captures".to_owned(),

            // Timing
            control_loop_interval_ms: 50, // 20 Hz
            heartbeat_interval_secs: 60,  // 1/min
        }
    }
}

impl SystemConfig {
    /// Load configuration from a JSON file, falling back to defaults on any
    /// error. The failure is logged, never fatal — the doorbell must come up
    /// even with a corrupt or missing config.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(cfg) => {
                    log::info!("Config loaded from {path}");
                    cfg
                }
                Err(e) => {
                    log::warn!("Config parse failed ({e}), using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Config read failed ({e}), using defaults");
                Self::default()
            }
        }
    }
}
