// ============================================================================
// pdfedit-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: Usage Text, Error Lines and Dry-Run Previews
//
// Usage goes to stdout, errors to stderr. In dry-run mode the session is
// handed a PreviewRunner and a NoopFileSystem so the usual pipeline runs
// without launching anything or touching the disk.

use console::style;
use pdfedit_core::{
    CommandRunner, CoreError, CoreResult, ExecutionResult, ExternalCommand, FileSystem, Operation,
};
use std::fmt;
use std::path::Path;

use crate::error::CliResult;

/// Program name used in usage lines.
pub const PROGRAM: &str = "pdfedit";

// ============================================================================
// USAGE AND ERRORS
// ============================================================================

/// The full usage text: one synopsis and one example per subcommand.
pub fn usage_text() -> String {
    let mut text = String::from("PDF Editor (qpdf wrapper)\nUsage:\n");
    for operation in Operation::ALL {
        text.push_str(&format!("  {} {}\n", PROGRAM, operation.synopsis()));
    }
    text.push_str("\nExamples:\n");
    for operation in Operation::ALL {
        text.push_str(&format!("  {} {}\n", PROGRAM, operation.example()));
    }
    text
}

pub fn print_usage() {
    print!("{}", usage_text());
}

/// Prints `error: <message>` to stderr, styled when stderr is a terminal.
pub fn print_error(message: impl fmt::Display) {
    eprintln!("{} {}", style("error:").red().bold().for_stderr(), message);
}

/// Reports an error that stopped a subcommand.
pub fn report_core_error(err: &CoreError) {
    print_error(err);
    if let Some(operation) = err.operation() {
        eprintln!("usage: {} {}", PROGRAM, operation.synopsis());
    }
    if err.wants_usage() {
        print_usage();
    }
}

// ============================================================================
// DRY-RUN PREVIEW
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewFormat {
    /// Shell-style line, quoted for display
    Text,
    /// `{"program": ..., "args": [...]}`
    Json,
}

/// Prints commands instead of running them.
#[derive(Debug, Clone, Copy)]
pub struct PreviewRunner {
    format: PreviewFormat,
}

impl PreviewRunner {
    pub fn new(format: PreviewFormat) -> Self {
        Self { format }
    }

    pub fn render(&self, command: &ExternalCommand) -> CliResult<String> {
        match self.format {
            PreviewFormat::Text => Ok(command.to_string()),
            PreviewFormat::Json => serde_json::to_string(command)
                .map_err(|e| CoreError::Io(std::io::Error::from(e))),
        }
    }
}

impl CommandRunner for PreviewRunner {
    fn run(&self, command: &ExternalCommand) -> ExecutionResult {
        match self.render(command) {
            Ok(line) => {
                println!("{}", line);
                ExecutionResult::Exited(0)
            }
            Err(e) => {
                log::error!("Failed to render command preview: {}", e);
                ExecutionResult::Exited(1)
            }
        }
    }
}

/// Reports directory creation without performing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFileSystem;

impl FileSystem for NoopFileSystem {
    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        log::info!("Would create directory: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfedit_core::error::usage_error;

    #[test]
    fn test_usage_lists_every_subcommand() {
        let text = usage_text();
        assert!(text.starts_with("PDF Editor (qpdf wrapper)\nUsage:\n"));
        for operation in Operation::ALL {
            assert!(text.contains(&format!("pdfedit {}", operation.synopsis())));
            assert!(text.contains(&format!("pdfedit {}", operation.example())));
        }
        assert!(text.contains("pdfedit rotate -o output.pdf -r <90|180|270> input.pdf"));
    }

    #[test]
    fn test_text_preview() {
        let runner = PreviewRunner::new(PreviewFormat::Text);
        let cmd = ExternalCommand::new("qpdf").args(["in put.pdf", "--rotate=+90:1-z", "out.pdf"]);
        assert_eq!(
            runner.render(&cmd).unwrap(),
            "qpdf 'in put.pdf' --rotate=+90:1-z out.pdf"
        );
    }

    #[test]
    fn test_json_preview() {
        let runner = PreviewRunner::new(PreviewFormat::Json);
        let cmd = ExternalCommand::new("qpdf").args(["--split-pages", "in.pdf", "out/page-%d.pdf"]);
        let value: serde_json::Value = serde_json::from_str(&runner.render(&cmd).unwrap()).unwrap();
        assert_eq!(value["program"], "qpdf");
        assert_eq!(value["args"][2], "out/page-%d.pdf");
    }

    #[test]
    fn test_preview_runner_reports_success() {
        let runner = PreviewRunner::new(PreviewFormat::Text);
        assert_eq!(runner.run(&ExternalCommand::new("qpdf")), ExecutionResult::Exited(0));
    }

    #[test]
    fn test_noop_file_system_creates_nothing() {
        let tmp = std::env::temp_dir().join("pdfedit-noop-should-not-exist");
        NoopFileSystem.create_dir_all(&tmp).unwrap();
        assert!(!tmp.exists());
    }

    #[test]
    fn test_report_core_error_does_not_panic() {
        report_core_error(&usage_error("too few arguments"));
    }
}
