//! `split`: write every page of a PDF to its own file.

use std::path::Path;

use crate::config::SPLIT_PAGE_PATTERN;
use crate::error::{CoreResult, validation_error};
use crate::external::{ExternalCommand, FileSystem};
use crate::options::ParsedOptions;

use super::{Operation, single_input};

const REQUIREMENT: &str = "split requires -o output_dir and exactly one input PDF.";

/// Path pattern qpdf expands into one file per page inside `output_dir`.
pub fn split_output_pattern(output_dir: &str) -> String {
    Path::new(output_dir)
        .join(SPLIT_PAGE_PATTERN)
        .to_string_lossy()
        .into_owned()
}

/// Creates the output directory, then builds
/// `<tool> --split-pages <in> <dir>/page-%d.pdf`.
pub fn build_split<F: FileSystem>(
    options: &ParsedOptions,
    tool: &str,
    fs: &F,
) -> CoreResult<ExternalCommand> {
    let output_dir = options
        .output()
        .ok_or_else(|| validation_error(Operation::Split, REQUIREMENT))?;
    let input = single_input(options).ok_or_else(|| validation_error(Operation::Split, REQUIREMENT))?;

    fs.create_dir_all(Path::new(output_dir))?;

    Ok(ExternalCommand::new(tool)
        .arg("--split-pages")
        .arg(input)
        .arg(split_output_pattern(output_dir)))
}
