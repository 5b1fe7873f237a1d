//! Fedora/RHEL `dnf install` lookalike.

use anyhow::Result;

use crate::config::SimulationConfig;
use crate::console::Console;
use crate::progress::DownloadBar;
use crate::rng::Lcg;
use crate::units;

use super::{confirm, diag_package, draw_sizes, draw_version, Profile};

const ARCH: &str = "x86_64";
const REPO: &str = "imaginary";
const DIST: &str = "fc42";
const RULE_WIDTH: usize = 80;

pub struct DnfProfile;

impl Profile for DnfProfile {
    fn render(&self, cfg: &SimulationConfig, rng: &mut Lcg, out: &mut Console) -> Result<()> {
        let base = cfg.speed.base_delay_ms;
        let names = &cfg.packages;
        let n = names.len();
        let sizes = draw_sizes(rng, n);
        let versions: Vec<String> = names
            .iter()
            .map(|_| format!("{}-{}.{}", draw_version(rng), rng.between(1, 5), DIST))
            .collect();
        // Full NEVRA-style labels used by the download and transaction lines.
        let labels: Vec<String> = names
            .iter()
            .zip(&versions)
            .map(|(name, version)| format!("{}-{}.{}", name, version, ARCH))
            .collect();
        let total_kb: u64 = sizes.iter().sum();

        let minutes = rng.between(10, 59);
        let seconds = rng.between(10, 59);
        out.say(&format!(
            "Last metadata expiration check: 0:{}:{} ago on {}.",
            minutes,
            seconds,
            draw_timestamp(rng)
        ))?;
        out.pause(base * 2);
        out.say("Dependencies resolved.")?;
        out.pause(base);

        let rule = "=".repeat(RULE_WIDTH);
        out.say(&rule)?;
        out.say(&format!(
            " {:<28} {:<12} {:<20} {:<12} {:>6}",
            "Package", "Architecture", "Version", "Repository", "Size"
        ))?;
        out.say(&rule)?;
        out.say("Installing:")?;
        for i in 0..n {
            out.say(&format!(
                " {:<28} {:<12} {:<20} {:<12} {:>6}",
                names[i],
                ARCH,
                versions[i],
                REPO,
                units::dnf_size(sizes[i])
            ))?;
        }
        out.say("")?;
        out.say("Transaction Summary")?;
        out.say(&rule)?;
        out.say(&format!("Install  {} Packages", n))?;
        out.say("")?;
        let installed_factor = rng.between(28, 41);
        out.say(&format!("Total download size: {}", units::dnf_size(total_kb)))?;
        out.say(&format!(
            "Installed size: {}",
            units::dnf_size(total_kb * installed_factor / 10)
        ))?;
        out.pause(base);

        confirm(cfg, out, "Is this ok [y/N]: ")?;

        out.say("Downloading Packages:")?;
        for i in 0..n {
            diag_package(cfg, out, &names[i], sizes[i])?;
            out.say(&format!("({}/{}): {}.rpm", i + 1, n, labels[i]))?;
            DownloadBar::new(sizes[i]).animate(rng, &cfg.speed, out)?;
        }
        out.say(&"-".repeat(RULE_WIDTH))?;
        let secs = (total_kb / cfg.speed.base_rate_kbps).max(1);
        out.say(&format!(
            "Total {:>42} | {:>6}  {:02}:{:02}",
            units::mb_rate(cfg.speed.base_rate_kbps),
            units::dnf_size(total_kb),
            secs / 60,
            secs % 60
        ))?;
        out.pause(base);

        out.say("Running transaction check")?;
        out.pause(base);
        out.say("Transaction check succeeded.")?;
        out.say("Running transaction test")?;
        out.pause(base);
        out.say("Transaction test succeeded.")?;
        out.say("Running transaction")?;
        out.pause(base);
        out.say(&format!("  {:<17}: {:<55} {:>5}", "Preparing", "", "1/1"))?;
        out.pause(base);
        for (i, label) in labels.iter().enumerate() {
            let count = format!("{}/{}", i + 1, n);
            out.say(&format!("  {:<17}: {:<55} {:>5}", "Installing", label, count))?;
            out.pause(base);
            out.say(&format!(
                "  {:<17}: {:<55} {:>5}",
                "Running scriptlet", label, count
            ))?;
            out.pause(base);
            out.say(&format!("  {:<17}: {:<55} {:>5}", "Verifying", label, count))?;
            out.pause(base);
        }

        out.say("")?;
        out.say("Installed:")?;
        out.say(&format!("  {}", labels.join("  ")))?;
        out.say("")?;
        out.say("Complete!")?;
        Ok(())
    }
}

/// A timestamp that looks right and means nothing. The wall clock is
/// never consulted; dates come from the seeded stream like everything
/// else, so transcripts stay reproducible.
fn draw_timestamp(rng: &mut Lcg) -> String {
    const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let day = DAYS[rng.between(0, 6) as usize];
    let date = rng.between(1, 28);
    let month = MONTHS[rng.between(0, 11) as usize];
    let hour = rng.between(0, 23);
    let minute = rng.between(0, 59);
    let second = rng.between(0, 59);
    format!(
        "{} {:02} {} 2025 {:02}:{:02}:{:02} UTC",
        day, date, month, hour, minute, second
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_shape() {
        let mut rng = Lcg::seeded(18990);
        let stamp = draw_timestamp(&mut rng);
        assert!(stamp.ends_with(" UTC"));
        assert_eq!(stamp.split_whitespace().count(), 6);
    }

    #[test]
    fn test_timestamp_is_seed_driven() {
        let mut a = Lcg::seeded(3);
        let mut b = Lcg::seeded(3);
        assert_eq!(draw_timestamp(&mut a), draw_timestamp(&mut b));
    }
}
