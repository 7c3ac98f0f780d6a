//! Core library for editing PDFs through the external `qpdf` tool.
//!
//! This crate scans subcommand options, builds qpdf argument vectors for
//! merging, splitting, rotating and reordering, checks that qpdf can be
//! launched, and runs it. It never reads or writes PDF content itself.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use pdfedit_core::{CoreConfig, Operation, ProcessRunner, Session, StdFileSystem};
//!
//! let session = Session::new(CoreConfig::default(), ProcessRunner, StdFileSystem);
//! let result = session
//!     .execute(Operation::Merge, &["-o", "merged.pdf", "a.pdf", "b.pdf"])
//!     .unwrap();
//! std::process::exit(result.exit_code());
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod operations;
pub mod options;
pub mod session;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use external::{
    AvailabilityProbe, CommandRunner, ExecutionResult, ExternalCommand, FileSystem,
    LAUNCH_FAILURE_EXIT_CODE, OutputMode, ProcessRunner, StdFileSystem, ToolProbe,
    ensure_available,
};
pub use operations::{Operation, Rotation};
pub use options::{Flag, ParsedOptions, scan_options};
pub use session::Session;
