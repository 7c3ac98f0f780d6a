//! Availability check for the external tool.
//!
//! Before any subcommand runs, the tool is probed once with `--version`. The
//! probe is a capability ([`AvailabilityProbe`]) so callers and tests can swap
//! in anything that answers "is the tool usable?" without touching the real
//! search path.

use crate::config::PROBE_ARG;
use crate::error::{CoreError, CoreResult};

use super::{CommandRunner, ExternalCommand, OutputMode};

/// Answers whether the external tool can be used.
pub trait AvailabilityProbe {
    fn probe(&self) -> bool;
}

impl<F: Fn() -> bool> AvailabilityProbe for F {
    fn probe(&self) -> bool {
        self()
    }
}

/// Probes a tool by running `<tool> --version` through a [`CommandRunner`].
///
/// The tool counts as available only if the probe launches and exits with
/// status zero.
pub struct ToolProbe<'a, R: CommandRunner> {
    runner: &'a R,
    tool: &'a str,
    show_output: bool,
}

impl<'a, R: CommandRunner> ToolProbe<'a, R> {
    pub fn new(runner: &'a R, tool: &'a str) -> Self {
        Self {
            runner,
            tool,
            show_output: false,
        }
    }

    /// Lets the tool's version banner through to the console.
    #[must_use]
    pub fn show_output(mut self, show: bool) -> Self {
        self.show_output = show;
        self
    }

    /// The command this probe runs.
    pub fn command(&self) -> ExternalCommand {
        let mode = if self.show_output {
            OutputMode::Inherit
        } else {
            OutputMode::Silent
        };
        ExternalCommand::new(self.tool).arg(PROBE_ARG).output_mode(mode)
    }
}

impl<R: CommandRunner> AvailabilityProbe for ToolProbe<'_, R> {
    fn probe(&self) -> bool {
        let result = self.runner.run(&self.command());
        if !result.success() {
            log::debug!("Probe for '{}' failed: {}", self.tool, result);
        }
        result.success()
    }
}

/// Runs `probe` and turns a negative answer into
/// [`CoreError::DependencyNotFound`] naming `tool`.
pub fn ensure_available<P: AvailabilityProbe + ?Sized>(probe: &P, tool: &str) -> CoreResult<()> {
    if probe.probe() {
        log::debug!("Found dependency: {}", tool);
        Ok(())
    } else {
        log::warn!("Dependency '{}' not available.", tool);
        Err(CoreError::DependencyNotFound(tool.to_string()))
    }
}
