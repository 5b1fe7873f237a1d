//! install-nothing - the package installer that doesn't.
//!
//! Renders a convincing apt/dnf/pacman install transcript driven by a
//! seeded generator, waits the way a real download would, and installs
//! exactly nothing.
#![allow(dead_code)]

mod config;
mod console;
mod pacing;
mod profiles;
mod progress;
mod rng;
mod speed;
mod units;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use config::{ColorMode, SimulationConfig, DEFAULT_SEED};
use console::Console;
use pacing::{NoopPacer, Pacer, SleepPacer};
use profiles::Manager;
use rng::Lcg;
use speed::SpeedProfile;

const MANAGER_VALUES: [&str; 6] = ["apt", "debian", "dnf", "fedora", "pacman", "arch"];
const COLOR_VALUES: [&str; 3] = ["auto", "always", "never"];

#[derive(Parser)]
#[command(name = "install-nothing")]
#[command(version)]
#[command(about = "Pretend to install packages, with full theatrics and zero side effects")]
#[command(
    after_help = "EXAMPLES:\n  install-nothing                        apt theater, default packages\n  install-nothing -m pacman -p ripgrep   one package, Arch style\n  install-nothing --seed 42 --fast       reproducible and instant\n  install-nothing -m fedora -y -v        dnf style, no prompt, diagnostics"
)]
struct Cli {
    /// Package manager to imitate (distro names work too)
    #[arg(short, long, default_value = "apt", value_parser = MANAGER_VALUES)]
    manager: String,

    /// Packages to "install"; repeatable, split on commas and spaces
    #[arg(short, long = "packages", value_name = "LIST")]
    packages: Vec<String>,

    /// Speed tier (slow/medium/fast) or a link speed in Mbps
    #[arg(short, long, default_value = "medium")]
    speed: String,

    /// Transcript seed: an integer or any string
    #[arg(long, default_value = DEFAULT_SEED, allow_hyphen_values = true)]
    seed: String,

    /// When to color output
    #[arg(long, default_value = "auto", value_name = "WHEN", value_parser = COLOR_VALUES)]
    color: String,

    /// Disable colors (same as --color never)
    #[arg(long, conflicts_with = "color")]
    no_color: bool,

    /// Suppress the transcript; the closing summary still prints
    #[arg(short, long)]
    quiet: bool,

    /// Print per-package draw diagnostics
    #[arg(short, long)]
    verbose: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long, visible_alias = "yes")]
    assume_yes: bool,

    /// Confirm afterwards that even less than nothing was done
    #[arg(long)]
    dry_run: bool,

    /// Zero all delays; seeded output is unchanged
    #[arg(long)]
    fast: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = build_config(&cli);
    console::apply_color_mode(cfg.color);

    let pacer: Box<dyn Pacer> = if cfg.zero_delay {
        Box::new(NoopPacer)
    } else {
        Box::new(SleepPacer)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut console = Console::new(&mut out, cfg.quiet, pacer);
    let mut rng = Lcg::seeded(cfg.seed_state);

    profiles::profile_for(cfg.manager).render(&cfg, &mut rng, &mut console)?;

    console.always("Done. Installed exactly nothing.")?;
    if cfg.dry_run {
        console.always("note: --dry-run requested, so even less than nothing was done.")?;
    }
    Ok(())
}

/// Map parsed flags onto the library's plain configuration.
///
/// Validation failures exit through clap so every argument error
/// reports on stderr and carries exit code 2.
fn build_config(cli: &Cli) -> SimulationConfig {
    let manager = match Manager::from_alias(&cli.manager) {
        Some(manager) => manager,
        None => usage_error(&format!("invalid manager '{}'", cli.manager)),
    };

    let speed = match SpeedProfile::parse(&cli.speed) {
        Ok(speed) => speed,
        Err(err) => usage_error(&err.to_string()),
    };

    let packages = match config::resolve_packages(&cli.packages) {
        Ok(packages) => packages,
        Err(err) => usage_error(&err.to_string()),
    };

    let color = if cli.no_color {
        ColorMode::Never
    } else {
        match cli.color.as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        }
    };

    SimulationConfig {
        manager,
        packages,
        speed,
        seed_state: rng::derive_state(&cli.seed),
        color,
        quiet: cli.quiet,
        verbose: cli.verbose,
        assume_yes: cli.assume_yes,
        dry_run: cli.dry_run,
        zero_delay: cli.fast,
    }
}

/// Report an argument error the way clap does: usage text on stderr,
/// exit code 2.
fn usage_error(msg: &str) -> ! {
    let mut cmd = Cli::command();
    cmd.error(clap::error::ErrorKind::ValueValidation, msg).exit()
}
