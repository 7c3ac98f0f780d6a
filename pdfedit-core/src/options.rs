//! Option scanning for subcommand arguments.
//!
//! Every subcommand takes a handful of single-letter flags, each followed by
//! exactly one value, plus positional file names. [`scan_options`] walks the
//! tokens that follow the subcommand name and sorts them into
//! [`ParsedOptions`]. It has no side effects.
//!
//! Scanning rules:
//! - a recognized flag consumes the next token as its value, even if that
//!   token starts with `-`
//! - a repeated flag keeps its last value
//! - a recognized flag with nothing after it is a validation error of the
//!   subcommand
//! - `--` ends option scanning; every later token is positional
//! - any other token starting with `-` (except a lone `-`) is an unknown option

use std::fmt;

use crate::error::{CoreResult, usage_error, validation_error};
use crate::operations::Operation;

/// Flags understood by at least one subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// `-o`: output file or output directory
    Output,
    /// `-r`: rotation in degrees
    Rotation,
    /// `-p`: comma-separated page order
    Order,
}

impl Flag {
    /// The token that introduces this flag on the command line.
    pub fn token(self) -> &'static str {
        match self {
            Flag::Output => "-o",
            Flag::Rotation => "-r",
            Flag::Order => "-p",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "-o" => Some(Flag::Output),
            "-r" => Some(Flag::Rotation),
            "-p" => Some(Flag::Order),
            _ => None,
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Scanned flag values and positional inputs of one subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    pub output: Option<String>,
    pub rotation: Option<String>,
    pub order: Option<String>,
    pub inputs: Vec<String>,
}

impl ParsedOptions {
    /// The output value, if present and non-empty.
    pub fn output(&self) -> Option<&str> {
        non_empty(self.output.as_deref())
    }

    /// The rotation value, if present and non-empty.
    pub fn rotation(&self) -> Option<&str> {
        non_empty(self.rotation.as_deref())
    }

    /// The page order value, if present and non-empty.
    pub fn order(&self) -> Option<&str> {
        non_empty(self.order.as_deref())
    }

    fn slot(&mut self, flag: Flag) -> &mut Option<String> {
        match flag {
            Flag::Output => &mut self.output,
            Flag::Rotation => &mut self.rotation,
            Flag::Order => &mut self.order,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Scans `tokens` for the flags `operation` understands, collecting
/// everything else as positional inputs in the order encountered.
///
/// A recognized flag without a following value is a validation error of
/// `operation`. Any other dash-prefixed token is a usage error.
///
/// # Examples
///
/// ```rust
/// use pdfedit_core::Operation;
/// use pdfedit_core::options::scan_options;
///
/// let tokens: Vec<String> = ["-o", "out.pdf", "a.pdf", "b.pdf"]
///     .iter().map(|s| s.to_string()).collect();
/// let parsed = scan_options(&tokens, Operation::Merge).unwrap();
/// assert_eq!(parsed.output(), Some("out.pdf"));
/// assert_eq!(parsed.inputs, vec!["a.pdf", "b.pdf"]);
/// ```
pub fn scan_options<S: AsRef<str>>(tokens: &[S], operation: Operation) -> CoreResult<ParsedOptions> {
    let recognized = operation.flags();
    let mut parsed = ParsedOptions::default();
    let mut iter = tokens.iter().map(AsRef::as_ref);
    let mut options_ended = false;

    while let Some(token) = iter.next() {
        if options_ended {
            parsed.inputs.push(token.to_string());
            continue;
        }

        if token == "--" {
            options_ended = true;
            continue;
        }

        match Flag::from_token(token).filter(|flag| recognized.contains(flag)) {
            Some(flag) => {
                let value = iter
                    .next()
                    .ok_or_else(|| {
                        validation_error(operation, format!("option '{flag}' requires a value"))
                    })?;
                *parsed.slot(flag) = Some(value.to_string());
            }
            None if is_option_like(token) => {
                return Err(usage_error(format!("unknown option '{token}'")));
            }
            None => parsed.inputs.push(token.to_string()),
        }
    }

    log::debug!("Scanned options: {:?}", parsed);
    Ok(parsed)
}

fn is_option_like(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}
