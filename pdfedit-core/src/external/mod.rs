// ============================================================================
// pdfedit-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with qpdf and the File System
//
// This module encapsulates everything that leaves the process: launching the
// external tool and creating directories. Both sit behind traits so the
// command builders and the session can be exercised without a real qpdf or a
// real filesystem.
//
// KEY COMPONENTS:
// - ExternalCommand: argument-vector description of one invocation
// - CommandRunner / ProcessRunner: launching commands and collecting status
// - ExecutionResult: exit status or launch-failure sentinel
// - FileSystem / StdFileSystem: directory creation for split output
// - availability: the `<tool> --version` probe
// - mocks: recording fakes for tests

use std::fmt;
use std::io;
use std::path::Path;
use std::process::ExitStatus;

use crate::error::{CoreError, CoreResult};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Availability probe for the external tool
pub mod availability;

/// Argument-vector command representation
pub mod command;

/// Recording fakes for runners and filesystems
#[cfg(test)]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use availability::{AvailabilityProbe, ToolProbe, ensure_available};
pub use command::{ExternalCommand, OutputMode};

// ============================================================================
// EXECUTION RESULT
// ============================================================================

/// Exit status reported when the external program could not be launched at
/// all (not found, not executable, fork failure).
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = 127;

/// Outcome of running one external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionResult {
    /// The program ran and exited with this code.
    Exited(i32),
    /// The program was terminated by this signal.
    Signaled(i32),
    /// The program could not be started.
    LaunchFailed,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        matches!(self, ExecutionResult::Exited(0))
    }

    /// The status this program should exit with after the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExecutionResult::Exited(code) => *code,
            ExecutionResult::Signaled(signal) => 128 + signal,
            ExecutionResult::LaunchFailed => LAUNCH_FAILURE_EXIT_CODE,
        }
    }

    fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ExecutionResult::Exited(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ExecutionResult::Signaled(signal);
            }
        }
        ExecutionResult::Exited(1)
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionResult::Exited(code) => write!(f, "exited with status {code}"),
            ExecutionResult::Signaled(signal) => write!(f, "was terminated by signal {signal}"),
            ExecutionResult::LaunchFailed => f.write_str("could not be launched"),
        }
    }
}

// ============================================================================
// COMMAND EXECUTION
// ============================================================================

/// Something that can execute an [`ExternalCommand`] and report its outcome.
///
/// Implementations block until the command has finished.
pub trait CommandRunner {
    fn run(&self, command: &ExternalCommand) -> ExecutionResult;
}

/// Runs commands as real child processes.
///
/// The child's stdin, stdout and stderr are inherited (stdout is discarded for
/// [`OutputMode::Silent`] commands), so whatever the tool prints reaches the
/// console unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &ExternalCommand) -> ExecutionResult {
        match command.get_output_mode() {
            OutputMode::Inherit => log::info!("Running: {}", command),
            OutputMode::Silent => log::debug!("Running: {}", command),
        }

        match command.to_command().status() {
            Ok(status) => {
                let result = ExecutionResult::from_status(status);
                log::debug!("{} finished with {}", command.program(), result);
                result
            }
            Err(e) => {
                if e.kind() == io::ErrorKind::NotFound {
                    log::warn!("Program '{}' not found.", command.program());
                } else {
                    log::error!("Failed to start '{}': {}", command.program(), e);
                }
                ExecutionResult::LaunchFailed
            }
        }
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &ExternalCommand) -> ExecutionResult {
        (**self).run(command)
    }
}

// ============================================================================
// FILE SYSTEM ACCESS
// ============================================================================

/// Trait for abstracting the filesystem writes this program makes.
///
/// The only write is creating the split output directory, but keeping it
/// behind a trait lets tests observe that it happens, and in which order
/// relative to command construction.
pub trait FileSystem {
    /// Creates `path` and any missing parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;
}

/// Standard implementation of FileSystem using the standard library.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        log::debug!("Creating directory {}", path.display());
        std::fs::create_dir_all(path).map_err(|e| {
            CoreError::PathError(format!(
                "Failed to create directory '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        (**self).create_dir_all(path)
    }
}
