// ============================================================================
// pdfedit-cli/src/commands/operation.rs
// ============================================================================
//
// OPERATION COMMAND: Runs merge, split, rotate or move
//
// All four subcommands share one path: build a CoreConfig from the global
// flags, pick real or preview side effects, and let the core Session do the
// rest. The return value is the process exit status.

use pdfedit_core::{CoreConfig, CoreConfigBuilder, Operation, ProcessRunner, Session, StdFileSystem};

use crate::cli::Cli;
use crate::error::exit_code_for;
use crate::terminal::{NoopFileSystem, PreviewFormat, PreviewRunner, report_core_error};

/// Core configuration derived from the global flags.
///
/// Dry runs skip the availability check since nothing is launched.
pub fn core_config(cli: &Cli) -> CoreConfig {
    CoreConfigBuilder::new()
        .tool(cli.qpdf.as_str())
        .check_tool(!cli.dry_run)
        .show_probe_output(cli.verbose)
        .build()
}

/// Runs one subcommand and returns the exit status for the process.
pub fn run_operation(cli: &Cli, operation: Operation, tokens: &[String]) -> i32 {
    let config = core_config(cli);
    log::debug!("Using external tool: {}", config.tool);

    let outcome = if cli.dry_run {
        let format = if cli.json {
            PreviewFormat::Json
        } else {
            PreviewFormat::Text
        };
        Session::new(config, PreviewRunner::new(format), NoopFileSystem).execute(operation, tokens)
    } else {
        Session::new(config, ProcessRunner, StdFileSystem).execute(operation, tokens)
    };

    match outcome {
        Ok(result) => result.exit_code(),
        Err(err) => {
            report_core_error(&err);
            exit_code_for(&err)
        }
    }
}
