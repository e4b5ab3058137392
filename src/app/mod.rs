//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the SkellyBell controller:
//! motion-event orchestration, animation lifecycle, and capture dispatch.
//! All interaction with hardware and external services happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
