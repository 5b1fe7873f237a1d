//! Pacing between printed lines and progress steps.
//!
//! Delays are a capability, not a side effect of rendering: callers
//! compute the full pause (base plus any jittered part) and hand the
//! finished number of milliseconds here. That keeps the draw sequence
//! identical whether delays are real or zeroed.

use std::thread;
use std::time::Duration;

/// Sleep capability used between transcript lines and bar steps.
pub trait Pacer {
    fn pause(&self, ms: u64);
}

/// Real wall-clock pacing.
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&self, ms: u64) {
        if ms > 0 {
            thread::sleep(Duration::from_millis(ms));
        }
    }
}

/// Zero-delay pacing for `--fast` runs and the test suite.
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn pause(&self, _ms: u64) {}
}
