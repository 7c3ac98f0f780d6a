// ============================================================================
// pdfedit-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Backend for the `log` Facade
//
// Both crates log through `log` macros. This module installs the console
// backend once per process:
// - default level `info`
// - `debug` with --verbose
// - RUST_LOG overrides both
//
// Info lines carry the bare message; other levels get a colored prefix.

use console::{StyledObject, style};
use log::{Level, LevelFilter};
use std::io::Write;

/// Initialize the console logger.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let installed = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            if record.level() == Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(buf, "{} {}", level_label(record.level()), record.args())
            }
        })
        .try_init();

    if installed.is_ok() {
        log::debug!("Logger initialized with level: {}", level);
    }
}

fn level_label(level: Level) -> StyledObject<&'static str> {
    let label = match level {
        Level::Error => style("ERROR").red().bold(),
        Level::Warn => style("WARN").yellow(),
        Level::Info => style("INFO").green(),
        Level::Debug => style("DEBUG").blue(),
        Level::Trace => style("TRACE").magenta(),
    };
    label.for_stderr()
}
