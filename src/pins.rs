//! GPIO / peripheral pin assignments for the SkellyBell board.
//!
//! Single source of truth — drivers and config defaults reference this module
//! rather than hard-coding pin numbers. Change a pin here and it propagates
//! everywhere.

// ---------------------------------------------------------------------------
// Motion sensor (HC-SR501 PIR)
// ---------------------------------------------------------------------------

/// Digital input for the PIR output line (BCM numbering).
/// HIGH = motion present, LOW = quiescent.
pub const MOTION_SENSOR_GPIO: u8 = 21;

// ---------------------------------------------------------------------------
// Mouth servo (hobby servo on hardware PWM)
// ---------------------------------------------------------------------------

/// Hardware PWM channel driving the jaw servo (PWM1 on the 40-pin header).
pub const SERVO_PWM_CHANNEL: u8 = 1;

/// Standard 50 Hz servo frame.
pub const SERVO_PWM_PERIOD_MS: u64 = 20;

/// Pulse width commanding the 0° end stop.
pub const SERVO_MIN_PULSE_US: u64 = 500;

/// Pulse width commanding the 180° end stop.
pub const SERVO_MAX_PULSE_US: u64 = 2500;

/// Full mechanical travel of the servo in degrees.
pub const SERVO_TRAVEL_DEG: f32 = 180.0;
