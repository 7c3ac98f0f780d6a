// pdfedit-cli/src/lib.rs
//
// Library portion of the pdfedit CLI application.
// Contains argument definitions, command logic and terminal output.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, OperationArgs};
pub use commands::run_operation;
pub use error::{CliResult, FAILURE_EXIT_CODE, exit_code_for};
