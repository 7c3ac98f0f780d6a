// ============================================================================
// pdfedit-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for pdfedit-core
//
// Every failure that stops an invocation before (or instead of) launching
// qpdf is a CoreError. A qpdf run that exits non-zero is NOT an error value:
// it is reported as an ExecutionResult and its status is propagated as-is.
//
// KEY COMPONENTS:
// - CoreError: usage, validation, dependency and filesystem failures
// - CoreResult: result alias used across the crate
// - Helper constructors for the common variants

use thiserror::Error;

use crate::operations::Operation;

/// Errors produced while preparing a qpdf invocation.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Too few arguments for a subcommand, or an unknown option.
    #[error("{0}")]
    Usage(String),

    /// A recognized subcommand with missing or out-of-range options.
    #[error("{message}")]
    Validation {
        operation: Operation,
        message: String,
    },

    /// The availability probe for the external tool failed.
    #[error("Failed to run {0}. Ensure {0} is installed and on PATH.")]
    DependencyNotFound(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pdfedit-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

pub fn usage_error(message: impl Into<String>) -> CoreError {
    CoreError::Usage(message.into())
}

pub fn validation_error(operation: Operation, message: impl Into<String>) -> CoreError {
    CoreError::Validation {
        operation,
        message: message.into(),
    }
}

impl CoreError {
    /// The subcommand this error belongs to, when it is tied to one.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            CoreError::Validation { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Whether the caller should follow the message with the usage text.
    pub fn wants_usage(&self) -> bool {
        matches!(self, CoreError::Usage(_))
    }
}
