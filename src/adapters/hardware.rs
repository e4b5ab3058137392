//! Hardware adapter — bridges the peripheral drivers to the domain port
//! traits.
//!
//! Owns the PIR driver and the servo driver, exposing them through
//! [`SensorPort`] and [`ActuatorPort`]. This is the only module in the
//! system that hands real hardware to the domain; on non-`board` targets
//! the underlying drivers use in-memory simulation.

use crate::app::ports::{ActuatorPort, SensorLevel, SensorPort};
use crate::drivers::motion::MotionSensorDriver;
use crate::drivers::servo::ServoDriver;
use crate::error::PeripheralError;

/// Concrete adapter combining both peripherals behind port traits.
pub struct HardwareAdapter {
    sensor: MotionSensorDriver,
    servo: ServoDriver,
}

impl HardwareAdapter {
    pub fn new(sensor: MotionSensorDriver, servo: ServoDriver) -> Self {
        Self { sensor, servo }
    }

    /// Host-only: drive the simulated sensor level (visitor simulation).
    #[cfg(not(feature = "board"))]
    pub fn sim_set_level(&mut self, level: SensorLevel) {
        self.sensor.sim_set_level(level);
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn open_sensor(&mut self) -> Result<(), PeripheralError> {
        self.sensor.open()
    }

    fn read_level(&mut self) -> Result<SensorLevel, PeripheralError> {
        self.sensor.read_level()
    }

    fn close_sensor(&mut self) {
        self.sensor.close();
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn open_actuator(&mut self) -> Result<(), PeripheralError> {
        self.servo.open()
    }

    fn set_angle(&mut self, degrees: f32) -> Result<(), PeripheralError> {
        self.servo.set_angle(degrees)
    }

    fn close_actuator(&mut self) {
        self.servo.close();
    }
}
