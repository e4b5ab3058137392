//! Peripheral drivers.
//!
//! Dual-target design: with the `board` feature the drivers own real GPIO
//! and hardware-PWM handles via `rppal`; without it they track state
//! in-memory so the whole crate builds and tests on any host.

pub mod motion;
pub mod servo;
