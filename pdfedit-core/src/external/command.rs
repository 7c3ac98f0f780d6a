// ============================================================================
// pdfedit-core/src/external/command.rs
// ============================================================================
//
// EXTERNAL COMMAND: Argument-Vector Representation of a Tool Invocation
//
// An ExternalCommand is a program plus an ordered list of arguments. It is
// handed to a CommandRunner, which launches the program directly. No shell
// ever sees these arguments, so file names with spaces or metacharacters are
// passed through untouched.
//
// The Display impl renders a shell-quoted line that is only meant for logs
// and previews.

use std::fmt;
use std::process::{Command, Stdio};

use serde::Serialize;

/// Where the launched program's standard output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Child output flows straight to this process's console.
    #[default]
    Inherit,
    /// Child stdout is discarded; stderr is still inherited.
    Silent,
}

/// A fully assembled invocation of the external tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
    #[serde(skip)]
    output: OutputMode,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            output: OutputMode::Inherit,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output = mode;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn get_output_mode(&self) -> OutputMode {
        self.output
    }

    /// Converts into a `std::process::Command` with stdin and stderr
    /// inherited and stdout following the output mode.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());
        match self.output {
            OutputMode::Inherit => cmd.stdout(Stdio::inherit()),
            OutputMode::Silent => cmd.stdout(Stdio::null()),
        };
        cmd
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote_for_display(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote_for_display(arg))?;
        }
        Ok(())
    }
}

/// Quotes `arg` the way a POSIX shell would need it, for display only.
fn quote_for_display(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:%+=,@".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
