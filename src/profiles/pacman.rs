//! Arch Linux `pacman -S` lookalike.

use anyhow::Result;
use colored::Colorize;

use crate::config::SimulationConfig;
use crate::console::Console;
use crate::progress::DownloadBar;
use crate::rng::Lcg;
use crate::units;

use super::{confirm, diag_package, draw_sizes, draw_version, Profile};

const ARCH: &str = "x86_64";
const SYNC_REPOS: [&str; 3] = ["core", "extra", "multilib"];
const CHECK_PASSES: [&str; 4] = [
    "checking keys in keyring",
    "checking package integrity",
    "loading package files",
    "checking for file conflicts",
];

pub struct PacmanProfile;

impl Profile for PacmanProfile {
    fn render(&self, cfg: &SimulationConfig, rng: &mut Lcg, out: &mut Console) -> Result<()> {
        let base = cfg.speed.base_delay_ms;
        let names = &cfg.packages;
        let n = names.len();
        let sizes = draw_sizes(rng, n);
        let versions: Vec<String> = names
            .iter()
            .map(|_| format!("{}-{}", draw_version(rng), rng.between(1, 6)))
            .collect();
        let labels: Vec<String> = names
            .iter()
            .zip(&versions)
            .map(|(name, version)| format!("{}-{}", name, version))
            .collect();
        let total_kb: u64 = sizes.iter().sum();

        out.say(&heading(":: Synchronizing package databases..."))?;
        out.pause(base * 2);
        for repo in SYNC_REPOS {
            out.say(&format!(" {} is up to date", repo))?;
            out.pause(base);
        }
        out.say("resolving dependencies...")?;
        out.pause(base);
        out.say("looking for conflicting packages...")?;
        out.pause(base);
        out.say("")?;

        let installed_factor = rng.between(28, 41);
        out.say(&format!("Packages ({}) {}", n, labels.join("  ")))?;
        out.say("")?;
        out.say(&format!(
            "Total Download Size:{:>12}",
            units::mib(total_kb)
        ))?;
        out.say(&format!(
            "Total Installed Size:{:>11}",
            units::mib(total_kb * installed_factor / 10)
        ))?;
        out.say("")?;

        confirm(cfg, out, &heading(":: Proceed with installation? [Y/n] "))?;

        out.say(&heading(":: Retrieving packages..."))?;
        for i in 0..n {
            diag_package(cfg, out, &names[i], sizes[i])?;
            out.say(&format!(
                " {}-{} [{}]",
                labels[i],
                ARCH,
                units::mib(sizes[i])
            ))?;
            DownloadBar::new(sizes[i]).animate(rng, &cfg.speed, out)?;
        }

        for pass in CHECK_PASSES {
            for i in 0..n {
                out.say(&format!("({}/{}) {}", i + 1, n, pass))?;
                out.pause(base / 2);
            }
        }
        out.say("checking available disk space...")?;
        out.pause(base);

        out.say(&heading(":: Processing package changes..."))?;
        for (i, name) in names.iter().enumerate() {
            out.say(&format!("({}/{}) installing {}", i + 1, n, name))?;
            out.pause(base);
        }

        out.say(&heading(":: Running post-transaction hooks..."))?;
        out.say("(1/2) Arming ConditionNeedsUpdate...")?;
        out.pause(base);
        out.say("(2/2) Updating the info directory file...")?;
        out.pause(base);
        Ok(())
    }
}

/// Pacman's headline style: bold blue `::` marker, bold text.
fn heading(text: &str) -> String {
    let (marker, rest) = text.split_at(2);
    format!("{}{}", marker.blue().bold(), rest.bold())
}
