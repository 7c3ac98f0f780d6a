// pdfedit-cli/src/main.rs
//
// Entry point for the pdfedit binary.
//
// Responsibilities:
// - Parsing global flags and the subcommand with clap.
// - Printing usage for a missing or unknown subcommand.
// - Initializing logging.
// - Handing the subcommand's tokens, as typed, to the core session.
// - Exiting with the status the session produced.

use clap::Parser;
use clap::error::{ContextKind, ErrorKind};
use pdfedit_cli::{Cli, FAILURE_EXIT_CODE, logging, run_operation, terminal};
use std::ffi::OsString;
use std::process;

fn main() {
    let argv: Vec<OsString> = std::env::args_os().collect();
    let cli = match Cli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
            ErrorKind::InvalidSubcommand => {
                match e.get(ContextKind::InvalidSubcommand) {
                    Some(name) => terminal::print_error(format!("unknown command '{}'", name)),
                    None => terminal::print_error("unknown command"),
                }
                terminal::print_usage();
                process::exit(FAILURE_EXIT_CODE);
            }
            _ => {
                // Global flag problems keep clap's own message
                let _ = e.print();
                process::exit(FAILURE_EXIT_CODE);
            }
        },
    };

    logging::init(cli.verbose);

    let status = match &cli.command {
        Some(command) => {
            let (operation, tokens) = command.invocation(&argv);
            run_operation(&cli, operation, &tokens)
        }
        None => {
            terminal::print_usage();
            FAILURE_EXIT_CODE
        }
    };

    process::exit(status);
}
