//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Merge, split, rotate and move all run through the core session.
pub mod operation;

pub use operation::{core_config, run_operation};
