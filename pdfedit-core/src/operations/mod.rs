//! qpdf command builders, one per subcommand.
//!
//! Each builder checks the scanned [`ParsedOptions`] against the constraints of
//! its subcommand and renders exactly one [`ExternalCommand`]. Page ranges and
//! rotation syntax are forwarded to qpdf with minimal translation; whether
//! they name real pages is for qpdf to decide.

use std::fmt;

use crate::error::CoreResult;
use crate::external::{ExternalCommand, FileSystem};
use crate::options::{Flag, ParsedOptions};

pub mod merge;
pub mod reorder;
pub mod rotate;
pub mod split;

pub use merge::build_merge;
pub use reorder::{build_move, transform_order};
pub use rotate::{Rotation, build_rotate};
pub use split::{build_split, split_output_pattern};

/// The user-facing subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Merge,
    Split,
    Rotate,
    /// Page reordering, spelled `move` on the command line.
    Move,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Merge,
        Operation::Split,
        Operation::Rotate,
        Operation::Move,
    ];

    /// Subcommand name as typed by the user.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Merge => "merge",
            Operation::Split => "split",
            Operation::Rotate => "rotate",
            Operation::Move => "move",
        }
    }

    /// Flags the option scanner recognizes for this subcommand.
    pub fn flags(self) -> &'static [Flag] {
        match self {
            Operation::Merge | Operation::Split => &[Flag::Output],
            Operation::Rotate => &[Flag::Output, Flag::Rotation],
            Operation::Move => &[Flag::Output, Flag::Order],
        }
    }

    /// Fewest tokens after the subcommand name that can possibly be valid.
    /// Anything shorter is a usage error, reported before scanning.
    pub fn min_tokens(self) -> usize {
        match self {
            Operation::Merge | Operation::Split => 3,
            Operation::Rotate | Operation::Move => 4,
        }
    }

    /// One-line synopsis, without the program name.
    pub fn synopsis(self) -> &'static str {
        match self {
            Operation::Merge => "merge -o output.pdf input1.pdf input2.pdf ...",
            Operation::Split => "split -o output_dir input.pdf",
            Operation::Rotate => "rotate -o output.pdf -r <90|180|270> input.pdf",
            Operation::Move => "move -o output.pdf -p <order> input.pdf",
        }
    }

    /// A worked example, without the program name.
    pub fn example(self) -> &'static str {
        match self {
            Operation::Merge => "merge -o merged.pdf a.pdf b.pdf",
            Operation::Split => "split -o out_pages book.pdf",
            Operation::Rotate => "rotate -o rotated.pdf -r 90 report.pdf",
            Operation::Move => "move -o reordered.pdf -p 3,1,2 report.pdf",
        }
    }

    /// Builds the external command for this subcommand.
    ///
    /// Only `split` touches `fs`; it creates the output directory before the
    /// command is assembled.
    pub fn build<F: FileSystem>(
        self,
        options: &ParsedOptions,
        tool: &str,
        fs: &F,
    ) -> CoreResult<ExternalCommand> {
        match self {
            Operation::Merge => build_merge(options, tool),
            Operation::Split => build_split(options, tool, fs),
            Operation::Rotate => build_rotate(options, tool),
            Operation::Move => build_move(options, tool),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the single positional input, or `None` if there are zero or
/// several.
pub(crate) fn single_input(options: &ParsedOptions) -> Option<&str> {
    match options.inputs.as_slice() {
        [input] if !input.is_empty() => Some(input.as_str()),
        _ => None,
    }
}
