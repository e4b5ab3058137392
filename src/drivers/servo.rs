//! Jaw servo driver (hobby servo on hardware PWM).
//!
//! Maps a commanded angle onto the standard 500–2500 µs pulse range at
//! 50 Hz. Angles are clamped to the range configured at construction,
//! declared once — callers never see an out-of-range write reach the wire.
//!
//! ## Dual-target design
//!
//! With the `board` feature: drives a real PWM channel via `rppal`.
//! On host/test: records the last commanded pulse in-memory only.

use crate::error::PeripheralError;
use crate::pins;

pub struct ServoDriver {
    channel: u8,
    min_angle_deg: f32,
    max_angle_deg: f32,
    open: bool,
    last_pulse_us: Option<u64>,
    #[cfg(feature = "board")]
    pwm: Option<rppal::pwm::Pwm>,
}

impl ServoDriver {
    pub fn new(channel: u8, min_angle_deg: f32, max_angle_deg: f32) -> Self {
        Self {
            channel,
            min_angle_deg,
            max_angle_deg,
            open: false,
            last_pulse_us: None,
            #[cfg(feature = "board")]
            pwm: None,
        }
    }

    /// Claim the PWM channel and park the servo at the minimum angle.
    pub fn open(&mut self) -> Result<(), PeripheralError> {
        if self.open {
            return Ok(());
        }
        self.open_hw()?;
        self.open = true;
        self.write_pulse(Self::angle_to_pulse_us(self.min_angle_deg))
    }

    /// Command the servo, clamping to the configured angle range.
    pub fn set_angle(&mut self, degrees: f32) -> Result<(), PeripheralError> {
        if !self.open {
            return Err(PeripheralError::NotOpen);
        }
        let clamped = degrees.clamp(self.min_angle_deg, self.max_angle_deg);
        self.write_pulse(Self::angle_to_pulse_us(clamped))
    }

    /// Release the channel. Idempotent; internal errors are logged and
    /// swallowed so shutdown always completes.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.close_hw();
        self.open = false;
        log::info!("Servo channel {} released", self.channel);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Last pulse width written, in microseconds.
    pub fn last_pulse_us(&self) -> Option<u64> {
        self.last_pulse_us
    }

    fn angle_to_pulse_us(degrees: f32) -> u64 {
        let span = (pins::SERVO_MAX_PULSE_US - pins::SERVO_MIN_PULSE_US) as f32;
        let frac = degrees / pins::SERVO_TRAVEL_DEG;
        pins::SERVO_MIN_PULSE_US + (frac * span) as u64
    }

    fn write_pulse(&mut self, pulse_us: u64) -> Result<(), PeripheralError> {
        self.write_pulse_hw(pulse_us)?;
        self.last_pulse_us = Some(pulse_us);
        Ok(())
    }

    // ── Hardware backend (board) ──────────────────────────────

    #[cfg(feature = "board")]
    fn open_hw(&mut self) -> Result<(), PeripheralError> {
        use rppal::pwm::{Channel, Polarity, Pwm};
        use std::time::Duration;

        let channel = match self.channel {
            0 => Channel::Pwm0,
            1 => Channel::Pwm1,
            _ => return Err(PeripheralError::OpenFailed),
        };
        let pwm = Pwm::with_period(
            channel,
            Duration::from_millis(pins::SERVO_PWM_PERIOD_MS),
            Duration::from_micros(pins::SERVO_MIN_PULSE_US),
            Polarity::Normal,
            true,
        )
        .map_err(|e| {
            log::error!("PWM channel {} open failed: {e}", self.channel);
            PeripheralError::OpenFailed
        })?;
        self.pwm = Some(pwm);
        Ok(())
    }

    #[cfg(feature = "board")]
    fn write_pulse_hw(&mut self, pulse_us: u64) -> Result<(), PeripheralError> {
        use std::time::Duration;

        let pwm = self.pwm.as_mut().ok_or(PeripheralError::NotOpen)?;
        pwm.set_pulse_width(Duration::from_micros(pulse_us))
            .map_err(|_| PeripheralError::PwmWriteFailed)
    }

    #[cfg(feature = "board")]
    fn close_hw(&mut self) {
        if let Some(pwm) = self.pwm.take() {
            if let Err(e) = pwm.disable() {
                log::warn!("PWM disable failed during shutdown: {e}");
            }
        }
    }

    // ── Simulation backend (host) ─────────────────────────────

    #[cfg(not(feature = "board"))]
    fn open_hw(&mut self) -> Result<(), PeripheralError> {
        Ok(())
    }

    #[cfg(not(feature = "board"))]
    fn write_pulse_hw(&mut self, _pulse_us: u64) -> Result<(), PeripheralError> {
        Ok(())
    }

    #[cfg(not(feature = "board"))]
    fn close_hw(&mut self) {}
}
