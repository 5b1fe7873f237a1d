//! The self-overwriting download progress bar.
//!
//! Ten fixed steps across a 24-column bar. Each step resamples the
//! displayed rate around the profile's base rate and draws a small
//! sleep jitter. Both draws happen in every mode, so a seeded run
//! produces the same bytes whether or not delays are zeroed.

use anyhow::Result;

use crate::console::Console;
use crate::rng::Lcg;
use crate::speed::SpeedProfile;

/// Animation steps per download.
pub const STEPS: u64 = 10;
/// Bar width in columns.
pub const BAR_WIDTH: u64 = 24;
/// Upper bound of the per-step sleep jitter, in ms.
const JITTER_MS: u64 = 29;

/// One package download worth of progress rendering.
#[derive(Debug, Clone, Copy)]
pub struct DownloadBar {
    total_kb: u64,
}

impl DownloadBar {
    pub fn new(total_kb: u64) -> Self {
        Self { total_kb }
    }

    /// Kilobytes complete after `step` of [`STEPS`].
    ///
    /// Integer math throughout; a zero-size download stays at zero for
    /// every step instead of dividing by anything.
    pub fn done_at(&self, step: u64) -> u64 {
        self.total_kb * step / STEPS
    }

    /// Percent complete at `step`: 0, 10, .. 100.
    pub fn percent_at(step: u64) -> u64 {
        step * 100 / STEPS
    }

    /// Filled columns at `step`.
    pub fn filled_at(step: u64) -> u64 {
        Self::percent_at(step) * BAR_WIDTH / 100
    }

    /// The overwriting line for `step` at the given sampled rate.
    pub fn line(&self, step: u64, rate_kbps: u64) -> String {
        let filled = Self::filled_at(step) as usize;
        let empty = BAR_WIDTH as usize - filled;
        format!(
            "{:>3}% [{}{}] {}/{} kB {:>6} kB/s",
            Self::percent_at(step),
            "#".repeat(filled),
            ".".repeat(empty),
            self.done_at(step),
            self.total_kb,
            rate_kbps,
        )
    }

    /// Drive all ten steps through the console.
    ///
    /// Per step: resample the rate, draw the jitter, emit the
    /// `\r`-prefixed line, pause. The terminating newline lands after
    /// the final step.
    pub fn animate(&self, rng: &mut Lcg, speed: &SpeedProfile, out: &mut Console) -> Result<()> {
        let base = speed.base_rate_kbps;
        for step in 1..=STEPS {
            let rate = rng.between(base * 8 / 10, base * 12 / 10);
            let jitter = rng.between(0, JITTER_MS);
            out.chunk(&format!("\r{}", self.line(step, rate)))?;
            out.pause(speed.base_delay_ms + jitter);
        }
        out.say("")?;
        Ok(())
    }
}
