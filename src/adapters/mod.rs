//! Concrete adapters on the outside of the port boundary.
//!
//! [`hardware`] bridges the real (or simulated) drivers to the sensor and
//! actuator ports; the rest bind the external collaborators — event log,
//! camera, speech engine, storage sink — to their port traits.

pub mod camera;
pub mod hardware;
pub mod log_sink;
pub mod speech;
pub mod storage;
