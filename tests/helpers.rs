//! Shared test utilities for install-nothing tests.
#![allow(dead_code)]

use std::process::{Command, Output};

use install_nothing::config::{ColorMode, SimulationConfig};
use install_nothing::console::Console;
use install_nothing::pacing::NoopPacer;
use install_nothing::profiles::{self, Manager};
use install_nothing::rng::{self, Lcg};
use install_nothing::speed::SpeedProfile;

/// Run the compiled binary with the given arguments and capture output.
pub fn run_bin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_install-nothing"))
        .args(args)
        .output()
        .expect("failed to run install-nothing")
}

/// Stdout as UTF-8 text.
pub fn stdout_str(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

/// Stderr as UTF-8 text.
pub fn stderr_str(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr should be UTF-8")
}

/// A small baseline configuration for in-memory rendering.
pub fn test_config(manager: Manager) -> SimulationConfig {
    SimulationConfig {
        manager,
        packages: vec!["nothing".to_string(), "vaporware-core".to_string()],
        speed: SpeedProfile::medium(),
        seed_state: rng::derive_state("install-nothing"),
        color: ColorMode::Auto,
        quiet: false,
        verbose: false,
        assume_yes: false,
        dry_run: false,
        zero_delay: true,
    }
}

/// Render a full transcript in memory with a silent pacer.
pub fn render_transcript(cfg: &SimulationConfig) -> String {
    let mut buf = Vec::new();
    {
        let mut console = Console::new(&mut buf, cfg.quiet, Box::new(NoopPacer));
        let mut rng = Lcg::seeded(cfg.seed_state);
        profiles::profile_for(cfg.manager)
            .render(cfg, &mut rng, &mut console)
            .expect("in-memory render should not fail");
    }
    String::from_utf8(buf).expect("transcript should be UTF-8")
}
