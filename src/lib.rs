//! SkellyBell controller library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All board-specific code is guarded by the `board` feature
//! within each module; the default build runs entirely on simulated
//! peripherals.

#![deny(unused_must_use)]

pub mod animator;
pub mod announcer;
pub mod app;
pub mod config;
pub mod detector;
pub mod error;
pub mod events;
pub mod pipeline;

mod pins;

pub mod adapters;
pub mod drivers;
