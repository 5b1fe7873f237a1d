//! Run configuration.
//!
//! The CLI layer parses flags and hands this module plain values;
//! nothing here depends on clap, so tests can build configurations
//! directly and render them in memory.

use std::sync::OnceLock;

use anyhow::{bail, Result};
use regex::Regex;

use crate::profiles::Manager;
use crate::speed::SpeedProfile;

/// Seed used when `--seed` is absent, so unseeded runs are just as
/// reproducible as seeded ones.
pub const DEFAULT_SEED: &str = "install-nothing";

/// The fallback shopping list: eleven fine packages nobody ships.
pub const DEFAULT_PACKAGES: [&str; 11] = [
    "nothing",
    "libnothing2",
    "nothing-utils",
    "python3-nothing",
    "vaporware-core",
    "placebo-gtk4",
    "nullfs-tools",
    "flux-capacitor",
    "quantum-bogosort",
    "infinite-loop-detector",
    "schroedingers-cache",
];

/// Allowed package-name shape, in the spirit of Debian and pacman rules.
const PACKAGE_NAME_PATTERN: &str = r"^[a-zA-Z0-9._+-]+$";

fn package_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PACKAGE_NAME_PATTERN).expect("package name pattern compiles"))
}

/// Check one package name against the allowed pattern.
pub fn valid_package_name(name: &str) -> bool {
    package_name_re().is_match(name)
}

/// Color handling for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when stdout is a terminal and `NO_COLOR` is unset.
    Auto,
    Always,
    Never,
}

/// Everything the renderer needs for one run. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Which tool's transcript to imitate.
    pub manager: Manager,
    /// Package names, already split and validated.
    pub packages: Vec<String>,
    pub speed: SpeedProfile,
    /// Derived initial generator state. Shown by verbose diagnostics,
    /// and accepted back via `--seed` to replay the run.
    pub seed_state: u32,
    pub color: ColorMode,
    /// Suppress the transcript, keep the summary.
    pub quiet: bool,
    /// Emit per-package draw diagnostics.
    pub verbose: bool,
    /// Skip the confirmation prompt.
    pub assume_yes: bool,
    /// Append the disclaimer line after the summary.
    pub dry_run: bool,
    /// Zero every pause. Draws are unaffected.
    pub zero_delay: bool,
}

/// Split repeated `--packages` values on commas and whitespace,
/// validate every token, and fall back to the default list when the
/// result is empty.
pub fn resolve_packages(raw: &[String]) -> Result<Vec<String>> {
    let mut packages = Vec::new();
    for value in raw {
        for token in value.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            if !valid_package_name(token) {
                bail!(
                    "invalid package name '{}': allowed characters are letters, digits, and ._+-",
                    token
                );
            }
            packages.push(token.to_string());
        }
    }
    if packages.is_empty() {
        packages = DEFAULT_PACKAGES.iter().map(|s| s.to_string()).collect();
    }
    Ok(packages)
}
