//! install-nothing library exports for testing.
//!
//! The binary is the product; these exports let the integration tests
//! drive the renderer with an in-memory sink and a silent pacer.

pub mod config;
pub mod console;
pub mod pacing;
pub mod profiles;
pub mod progress;
pub mod rng;
pub mod speed;
pub mod units;
