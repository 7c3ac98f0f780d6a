//! Configuration structures and constants for the pdfedit-core library.
//!
//! This module holds the settings that shape how commands are built and run:
//! which program is launched and whether its availability is checked first.

mod builder;

pub use builder::CoreConfigBuilder;

// Default constants

/// Default external tool, resolved through the inherited search path.
pub const DEFAULT_TOOL: &str = "qpdf";

/// Argument used to probe the external tool for availability.
pub const PROBE_ARG: &str = "--version";

/// File name pattern handed to `qpdf --split-pages`. The `%d` is expanded by
/// qpdf itself to the page number.
pub const SPLIT_PAGE_PATTERN: &str = "page-%d.pdf";

/// Main configuration structure for the pdfedit-core library.
///
/// Created by the consumer of the library (e.g., pdfedit-cli) and passed to a
/// [`Session`](crate::session::Session).
///
/// # Examples
///
/// ```rust
/// use pdfedit_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .tool("/usr/local/bin/qpdf")
///     .check_tool(true)
///     .build();
/// assert_eq!(config.tool, "/usr/local/bin/qpdf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Program launched for every command, including the availability probe.
    pub tool: String,

    /// Whether to run the availability probe before any subcommand.
    pub check_tool: bool,

    /// Whether the probe's own output reaches the console.
    pub show_probe_output: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            check_tool: true,
            show_probe_output: false,
        }
    }
}
