//! Package-manager style profiles.
//!
//! One profile per imitated tool. Every profile renders the same fixed
//! phase sequence (preamble, plan, confirmation, download, install,
//! completion) in its tool's phrasing, and all variability comes from
//! the seeded generator passed in. Sizes are drawn up front so the
//! plan's totals agree with the download lines that follow.

pub mod apt;
pub mod dnf;
pub mod pacman;

use std::fmt;

use anyhow::Result;

use crate::config::SimulationConfig;
use crate::console::Console;
use crate::rng::Lcg;

/// The imitated package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Manager {
    Apt,
    Dnf,
    Pacman,
}

impl Manager {
    /// Normalize a CLI selector: the tool name or a distro alias.
    pub fn from_alias(value: &str) -> Option<Self> {
        match value {
            "apt" | "debian" => Some(Self::Apt),
            "dnf" | "fedora" => Some(Self::Dnf),
            "pacman" | "arch" => Some(Self::Pacman),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Apt => "apt",
            Self::Dnf => "dnf",
            Self::Pacman => "pacman",
        }
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One rendering pipeline, scripted after a real tool's transcript.
pub trait Profile {
    /// Render the complete fake transcript for this run.
    fn render(&self, cfg: &SimulationConfig, rng: &mut Lcg, out: &mut Console) -> Result<()>;
}

/// Select the profile for a manager.
pub fn profile_for(manager: Manager) -> &'static dyn Profile {
    match manager {
        Manager::Apt => &apt::AptProfile,
        Manager::Dnf => &dnf::DnfProfile,
        Manager::Pacman => &pacman::PacmanProfile,
    }
}

/// Draw one package size in kB.
fn draw_size_kb(rng: &mut Lcg) -> u64 {
    rng.between(64, 8192)
}

/// Draw sizes for the whole package set before anything prints, so the
/// plan totals match the per-package download lines.
pub(crate) fn draw_sizes(rng: &mut Lcg, count: usize) -> Vec<u64> {
    (0..count).map(|_| draw_size_kb(rng)).collect()
}

/// Draw a plausible dotted version like `1.4.12`.
pub(crate) fn draw_version(rng: &mut Lcg) -> String {
    let major = rng.between(0, 9);
    let minor = rng.between(0, 24);
    let patch = rng.between(0, 99);
    format!("{}.{}.{}", major, minor, patch)
}

/// Emit the per-package verbose diagnostic. Bypasses quiet.
///
/// The printed seed is the derived state, which `--seed` accepts back
/// verbatim to replay the run.
pub(crate) fn diag_package(
    cfg: &SimulationConfig,
    out: &mut Console,
    name: &str,
    size_kb: u64,
) -> Result<()> {
    if cfg.verbose {
        out.diag(&format!(
            "sim: pkg={} size={} kB rate~{} kB/s speed={} seed={}",
            name, size_kb, cfg.speed.base_rate_kbps, cfg.speed.label, cfg.seed_state
        ))?;
    }
    Ok(())
}

/// Print a confirmation prompt, think it over, answer yes.
///
/// Skipped entirely under `--yes`. The pause is scripted, not drawn,
/// so prompting never shifts the generator.
pub(crate) fn confirm(cfg: &SimulationConfig, out: &mut Console, prompt: &str) -> Result<()> {
    if cfg.assume_yes {
        return Ok(());
    }
    out.chunk(prompt)?;
    out.pause(cfg.speed.base_delay_ms * 3);
    out.say("y")?;
    Ok(())
}
