// ============================================================================
// pdfedit-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Exit Status Mapping for Core Errors
//
// Every CoreError that reaches the top level becomes a printed message and
// exit status 1. Tool failures are not errors; their own status is used.

use pdfedit_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Status for usage, validation, missing-tool and filesystem failures.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Process exit status for an error that stopped a subcommand.
pub fn exit_code_for(err: &CoreError) -> i32 {
    match err {
        CoreError::Usage(_)
        | CoreError::Validation { .. }
        | CoreError::DependencyNotFound(_)
        | CoreError::PathError(_)
        | CoreError::Io(_) => FAILURE_EXIT_CODE,
    }
}
