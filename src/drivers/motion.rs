//! Motion sensor driver (HC-SR501 PIR on a GPIO input).
//!
//! The sensor holds its output HIGH while presence is detected. With the
//! `board` feature the driver registers a both-edges GPIO interrupt whose
//! callback only records the edge in the detector's atomic counters
//! ([`sensor_isr_notify`](crate::detector::sensor_isr_notify)) and queues
//! a loop event — all real work happens in the main loop, never in
//! interrupt context.
//!
//! On host/test targets the level is an in-memory field that simulation
//! code flips.

use crate::app::ports::SensorLevel;
use crate::error::PeripheralError;

pub struct MotionSensorDriver {
    pin: u8,
    open: bool,
    #[cfg(feature = "board")]
    gpio: Option<rppal::gpio::InputPin>,
    #[cfg(not(feature = "board"))]
    sim_level: SensorLevel,
}

impl MotionSensorDriver {
    pub fn new(pin: u8) -> Self {
        Self {
            pin,
            open: false,
            #[cfg(feature = "board")]
            gpio: None,
            #[cfg(not(feature = "board"))]
            sim_level: SensorLevel::Low,
        }
    }

    /// Claim the GPIO and begin level-change notification.
    pub fn open(&mut self) -> Result<(), PeripheralError> {
        if self.open {
            return Ok(());
        }
        self.open_hw()?;
        self.open = true;
        Ok(())
    }

    /// Sample the current logical level.
    pub fn read_level(&mut self) -> Result<SensorLevel, PeripheralError> {
        if !self.open {
            return Err(PeripheralError::NotOpen);
        }
        self.read_hw()
    }

    /// Release the GPIO. Idempotent; never raises.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.close_hw();
        self.open = false;
        log::info!("Motion sensor GPIO {} released", self.pin);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    // ── Hardware backend (board) ──────────────────────────────

    #[cfg(feature = "board")]
    fn open_hw(&mut self) -> Result<(), PeripheralError> {
        use rppal::gpio::{Gpio, Trigger};

        let gpio = Gpio::new().map_err(|e| {
            log::error!("GPIO controller open failed: {e}");
            PeripheralError::OpenFailed
        })?;
        let mut pin = gpio
            .get(self.pin)
            .map_err(|e| {
                log::error!("GPIO {} claim failed: {e}", self.pin);
                PeripheralError::OpenFailed
            })?
            .into_input_pulldown();

        pin.set_async_interrupt(Trigger::Both, None, |event| {
            let level = if matches!(event.trigger, Trigger::RisingEdge) {
                SensorLevel::High
            } else {
                SensorLevel::Low
            };
            crate::detector::sensor_isr_notify(level);
            crate::events::push_event(crate::events::Event::MotionSensorChanged);
        })
        .map_err(|e| {
            log::error!("GPIO {} interrupt registration failed: {e}", self.pin);
            PeripheralError::OpenFailed
        })?;

        self.gpio = Some(pin);
        Ok(())
    }

    #[cfg(feature = "board")]
    fn read_hw(&mut self) -> Result<SensorLevel, PeripheralError> {
        let pin = self.gpio.as_ref().ok_or(PeripheralError::NotOpen)?;
        Ok(if pin.is_high() {
            SensorLevel::High
        } else {
            SensorLevel::Low
        })
    }

    #[cfg(feature = "board")]
    fn close_hw(&mut self) {
        if let Some(mut pin) = self.gpio.take() {
            if let Err(e) = pin.clear_async_interrupt() {
                log::warn!("GPIO interrupt clear failed during shutdown: {e}");
            }
        }
    }

    // ── Simulation backend (host) ─────────────────────────────

    #[cfg(not(feature = "board"))]
    fn open_hw(&mut self) -> Result<(), PeripheralError> {
        Ok(())
    }

    #[cfg(not(feature = "board"))]
    fn read_hw(&mut self) -> Result<SensorLevel, PeripheralError> {
        Ok(self.sim_level)
    }

    #[cfg(not(feature = "board"))]
    fn close_hw(&mut self) {}

    /// Host-only: drive the simulated level. Pair with
    /// [`sensor_isr_notify`](crate::detector::sensor_isr_notify) to mimic
    /// the interrupt the real wiring would deliver.
    #[cfg(not(feature = "board"))]
    pub fn sim_set_level(&mut self, level: SensorLevel) {
        self.sim_level = level;
    }
}
