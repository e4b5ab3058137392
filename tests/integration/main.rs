//! Host-side integration tests for the doorbell core.
//!
//! Everything here runs against recording mocks — no real GPIO, PWM,
//! camera, or speech engine is touched.

mod mock_hw;

mod animator_tests;
mod orchestrator_tests;
