// ============================================================================
// pdfedit-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Provides a fluent API for creating CoreConfig instances. Every field has a
// default, so `CoreConfigBuilder::new().build()` equals `CoreConfig::default()`.

use super::CoreConfig;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use pdfedit_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .tool("qpdf")
///     .check_tool(false)
///     .show_probe_output(true)
///     .build();
/// assert!(!config.check_tool);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the external tool program. Empty values keep the current tool.
    #[must_use]
    pub fn tool(mut self, tool: impl Into<String>) -> Self {
        let tool = tool.into();
        if !tool.trim().is_empty() {
            self.config.tool = tool;
        }
        self
    }

    /// Sets whether the availability probe runs before subcommands.
    #[must_use]
    pub fn check_tool(mut self, check: bool) -> Self {
        self.config.check_tool = check;
        self
    }

    /// Sets whether the probe output is shown on the console.
    #[must_use]
    pub fn show_probe_output(mut self, show: bool) -> Self {
        self.config.show_probe_output = show;
        self
    }

    /// Builds the CoreConfig instance.
    #[must_use]
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
