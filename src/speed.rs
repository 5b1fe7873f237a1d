//! Speed tiers and the numbers that pace a run.
//!
//! A speed setting resolves to two values: the base pause between
//! transcript lines and the base transfer rate shown in download lines.
//! Named tiers map to fixed pairs; a numeric setting is read as Mbps,
//! converted to kB/s and clamped. Zeroing delays (`--fast`) is not
//! handled here: it is a pacer decision, so the displayed numbers stay
//! the same either way.

use anyhow::{bail, Result};

/// Lower clamp for numeric throughput, in kB/s.
pub const MIN_RATE_KBPS: u64 = 100;
/// Upper clamp for numeric throughput, in kB/s.
pub const MAX_RATE_KBPS: u64 = 50_000;

/// Resolved pacing numbers for one run.
#[derive(Debug, Clone)]
pub struct SpeedProfile {
    /// Base pause between progress steps and scripted lines, in ms.
    pub base_delay_ms: u64,
    /// Base transfer rate jittered into download lines, in kB/s.
    pub base_rate_kbps: u64,
    /// Tier name, or `custom` for numeric input.
    pub label: &'static str,
}

impl SpeedProfile {
    pub fn slow() -> Self {
        Self {
            base_delay_ms: 160,
            base_rate_kbps: 750,
            label: "slow",
        }
    }

    pub fn medium() -> Self {
        Self {
            base_delay_ms: 70,
            base_rate_kbps: 4_200,
            label: "medium",
        }
    }

    pub fn fast() -> Self {
        Self {
            base_delay_ms: 25,
            base_rate_kbps: 12_500,
            label: "fast",
        }
    }

    /// Resolve `--speed` input: a tier name or a Mbps number.
    pub fn parse(input: &str) -> Result<Self> {
        match input {
            "slow" => Ok(Self::slow()),
            "medium" => Ok(Self::medium()),
            "fast" => Ok(Self::fast()),
            other => Self::parse_mbps(other),
        }
    }

    fn parse_mbps(input: &str) -> Result<Self> {
        let mbps: f64 = match input.parse() {
            Ok(v) => v,
            Err(_) => bail!(
                "invalid speed '{}': expected slow, medium, fast, or a Mbps number",
                input
            ),
        };
        // "NaN" and "inf" parse successfully; neither is a speed.
        if !mbps.is_finite() || mbps < 0.0 {
            bail!(
                "invalid speed '{}': expected slow, medium, fast, or a Mbps number",
                input
            );
        }
        Ok(Self::from_mbps(mbps))
    }

    /// Convert Mbps to a clamped kB/s rate with a matching delay.
    ///
    /// 1 Mbps is 125 kB/s. The delay is scaled so faster links animate
    /// faster, bounded to stay watchable at either extreme.
    pub fn from_mbps(mbps: f64) -> Self {
        let rate = ((mbps * 125.0).round() as u64).clamp(MIN_RATE_KBPS, MAX_RATE_KBPS);
        let delay = (350_000 / rate).clamp(15, 200);
        Self {
            base_delay_ms: delay,
            base_rate_kbps: rate,
            label: "custom",
        }
    }
}
