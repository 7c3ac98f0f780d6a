// pdfedit-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.
//
// clap owns the global flags and the choice of subcommand. Everything after
// the subcommand name is collected verbatim and handed to the core option
// scanner, which applies the per-subcommand flag rules.

use clap::{Args, Parser, Subcommand};
use pdfedit_core::Operation;
use pdfedit_core::config::DEFAULT_TOOL;
use std::ffi::OsStr;

/// Ends option scanning for a subcommand.
const END_OF_OPTIONS: &str = "--";

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "pdfedit: merge, split, rotate and reorder PDFs",
    long_about = "Merges, splits, rotates and reorders PDF files by running qpdf. \
                  qpdf must be installed and reachable on PATH (or set with --qpdf)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// qpdf program to run. Can also be set via the PDFEDIT_QPDF environment variable.
    #[arg(long, value_name = "PATH", env = "PDFEDIT_QPDF", default_value = DEFAULT_TOOL)]
    pub qpdf: String,

    /// Enable debug logging and show qpdf's version banner during the startup check
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the qpdf command instead of running it (no startup check, no directories created)
    #[arg(long)]
    pub dry_run: bool,

    /// With --dry-run, print the command as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge two or more PDFs into one, in the order given
    #[command(
        disable_help_flag = true,
        override_usage = "pdfedit merge -o output.pdf input1.pdf input2.pdf ..."
    )]
    Merge(OperationArgs),

    /// Split a PDF into one file per page (output_dir/page-N.pdf)
    #[command(
        disable_help_flag = true,
        override_usage = "pdfedit split -o output_dir input.pdf"
    )]
    Split(OperationArgs),

    /// Rotate every page by 90, 180 or 270 degrees clockwise
    #[command(
        disable_help_flag = true,
        override_usage = "pdfedit rotate -o output.pdf -r <90|180|270> input.pdf"
    )]
    Rotate(OperationArgs),

    /// Reorder pages, e.g. -p 3,1,2
    #[command(
        visible_alias = "reorder",
        disable_help_flag = true,
        override_usage = "pdfedit move -o output.pdf -p <order> input.pdf"
    )]
    Move(OperationArgs),
}

/// Raw tokens following a subcommand name.
#[derive(Args, Debug, Clone, Default)]
pub struct OperationArgs {
    /// Flags (-o, -r, -p) and input files, scanned in order
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

impl Commands {
    /// The core operation and the tokens clap collected for it.
    pub fn operation(&self) -> (Operation, &[String]) {
        match self {
            Commands::Merge(args) => (Operation::Merge, &args.tokens),
            Commands::Split(args) => (Operation::Split, &args.tokens),
            Commands::Rotate(args) => (Operation::Rotate, &args.tokens),
            Commands::Move(args) => (Operation::Move, &args.tokens),
        }
    }

    /// The core operation and every token after the subcommand name, exactly
    /// as it appears in `argv`.
    ///
    /// clap consumes a `--` that directly follows the subcommand name. The
    /// collected tokens are always a suffix of `argv`, so if the argument just
    /// before that suffix is `--`, it is the consumed one and is put back.
    pub fn invocation<S: AsRef<OsStr>>(&self, argv: &[S]) -> (Operation, Vec<String>) {
        let (operation, tokens) = self.operation();
        let mut raw = Vec::with_capacity(tokens.len() + 1);

        let separator_consumed = argv
            .len()
            .checked_sub(tokens.len() + 1)
            .and_then(|index| argv.get(index))
            .is_some_and(|arg| arg.as_ref() == OsStr::new(END_OF_OPTIONS));
        if separator_consumed {
            raw.push(END_OF_OPTIONS.to_string());
        }

        raw.extend(tokens.iter().cloned());
        (operation, raw)
    }
}
