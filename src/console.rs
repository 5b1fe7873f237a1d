//! Terminal output funnel.
//!
//! Every transcript byte goes through one `Console`. This is where the
//! quiet flag is enforced and where pacing pauses are issued. Verbose
//! diagnostics and the closing summary deliberately bypass quiet:
//! quiet mutes the theater, not the receipts.

use std::io::Write;

use anyhow::Result;

use crate::config::ColorMode;
use crate::pacing::Pacer;

/// Output funnel for one run.
///
/// Writes to any `Write` sink so tests can render into memory; the
/// binary hands it locked stdout.
pub struct Console<'a> {
    out: &'a mut dyn Write,
    quiet: bool,
    pacer: Box<dyn Pacer>,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write, quiet: bool, pacer: Box<dyn Pacer>) -> Self {
        Self { out, quiet, pacer }
    }

    /// Print one scripted line. Suppressed by quiet mode.
    pub fn say(&mut self, line: &str) -> Result<()> {
        if !self.quiet {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    /// Print a partial line (no newline) and flush. Suppressed by quiet.
    ///
    /// Carries the self-overwriting progress bar and the confirmation
    /// prompt, both of which need to land before the next pause.
    pub fn chunk(&mut self, text: &str) -> Result<()> {
        if !self.quiet {
            write!(self.out, "{}", text)?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Print a verbose diagnostic line. Not suppressed by quiet.
    pub fn diag(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Print a line that must survive quiet mode, like the summary.
    pub fn always(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Pause between outputs. Quiet runs still pause; only the pacer
    /// decides whether time actually passes.
    pub fn pause(&mut self, ms: u64) {
        self.pacer.pause(ms);
    }
}

/// Apply a color mode process-wide before any output happens.
///
/// Auto is left to the `colored` crate, which already checks for a
/// terminal and honors `NO_COLOR`.
pub fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacing::NoopPacer;

    #[test]
    fn test_quiet_gates_narrative_but_not_diag_or_summary() {
        let mut buf = Vec::new();
        let mut console = Console::new(&mut buf, true, Box::new(NoopPacer));
        console.say("narrative").unwrap();
        console.chunk("partial").unwrap();
        console.diag("diagnostic").unwrap();
        console.always("summary").unwrap();
        drop(console);
        assert_eq!(String::from_utf8(buf).unwrap(), "diagnostic\nsummary\n");
    }

    #[test]
    fn test_loud_console_writes_everything_in_order() {
        let mut buf = Vec::new();
        let mut console = Console::new(&mut buf, false, Box::new(NoopPacer));
        console.say("one").unwrap();
        console.chunk("two").unwrap();
        console.say("").unwrap();
        console.always("three").unwrap();
        drop(console);
        assert_eq!(String::from_utf8(buf).unwrap(), "one\ntwo\nthree\n");
    }
}
