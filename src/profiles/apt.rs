//! Debian/Ubuntu `apt install` lookalike.

use anyhow::Result;

use crate::config::SimulationConfig;
use crate::console::Console;
use crate::progress::DownloadBar;
use crate::rng::Lcg;
use crate::units;

use super::{confirm, diag_package, draw_sizes, draw_version, Profile};

const ARCH: &str = "amd64";
const MIRROR: &str = "http://archive.nowhere.example/nowhere";

pub struct AptProfile;

impl Profile for AptProfile {
    fn render(&self, cfg: &SimulationConfig, rng: &mut Lcg, out: &mut Console) -> Result<()> {
        let base = cfg.speed.base_delay_ms;
        let names = &cfg.packages;
        let sizes = draw_sizes(rng, names.len());
        let versions: Vec<String> = names
            .iter()
            .map(|_| format!("{}-{}", draw_version(rng), rng.between(1, 9)))
            .collect();
        let total_kb: u64 = sizes.iter().sum();

        out.say("Reading package lists... Done")?;
        out.pause(base * 2);
        out.say("Building dependency tree... Done")?;
        out.pause(base);
        out.say("Reading state information... Done")?;
        out.pause(base);

        let not_upgraded = rng.between(0, 17);
        // Unpacked footprint, in tenths of the archive size.
        let disk_factor = rng.between(28, 41);
        out.say("The following NEW packages will be installed:")?;
        out.say(&format!("  {}", names.join(" ")))?;
        out.say(&format!(
            "0 upgraded, {} newly installed, 0 to remove and {} not upgraded.",
            names.len(),
            not_upgraded
        ))?;
        out.say(&format!(
            "Need to get {} of archives.",
            units::size(total_kb)
        ))?;
        out.say(&format!(
            "After this operation, {} of additional disk space will be used.",
            units::size(total_kb * disk_factor / 10)
        ))?;
        out.pause(base);

        confirm(cfg, out, "Do you want to continue? [Y/n] ")?;

        for (i, name) in names.iter().enumerate() {
            diag_package(cfg, out, name, sizes[i])?;
            out.say(&format!(
                "Get:{} {} nowhere/main {} {} {} {} [{}]",
                i + 1,
                MIRROR,
                ARCH,
                name,
                ARCH,
                versions[i],
                units::size(sizes[i])
            ))?;
            DownloadBar::new(sizes[i]).animate(rng, &cfg.speed, out)?;
        }
        let secs = (total_kb / cfg.speed.base_rate_kbps).max(1);
        out.say(&format!(
            "Fetched {} in {}s ({})",
            units::size(total_kb),
            secs,
            units::rate(cfg.speed.base_rate_kbps)
        ))?;
        out.pause(base);

        let db_files = rng.between(120_000, 260_000);
        for (i, name) in names.iter().enumerate() {
            out.say(&format!(
                "Selecting previously unselected package {}.",
                name
            ))?;
            if i == 0 {
                out.say(&format!(
                    "(Reading database ... {} files and directories currently installed.)",
                    db_files
                ))?;
            }
            out.pause(base);
            out.say(&format!(
                "Preparing to unpack .../{}_{}_{}.deb ...",
                name, versions[i], ARCH
            ))?;
            out.pause(base);
            out.say(&format!("Unpacking {} ({}) ...", name, versions[i]))?;
            out.pause(base);
        }
        for (i, name) in names.iter().enumerate() {
            out.say(&format!("Setting up {} ({}) ...", name, versions[i]))?;
            out.pause(base);
        }
        out.say("Processing triggers for man-db (2.12.1-1) ...")?;
        Ok(())
    }
}
