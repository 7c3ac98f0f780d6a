//! `merge`: concatenate several PDFs into a new one.

use crate::error::{CoreResult, validation_error};
use crate::external::ExternalCommand;
use crate::options::ParsedOptions;

use super::Operation;

const REQUIREMENT: &str = "merge requires -o output.pdf and at least two input PDFs.";

/// Builds `<tool> --empty --pages <in1> <in2> ... -- <out>`.
///
/// Inputs keep their scan order, which is the page order of the result.
pub fn build_merge(options: &ParsedOptions, tool: &str) -> CoreResult<ExternalCommand> {
    let output = options
        .output()
        .ok_or_else(|| validation_error(Operation::Merge, REQUIREMENT))?;
    if options.inputs.len() < 2 {
        return Err(validation_error(Operation::Merge, REQUIREMENT));
    }

    Ok(ExternalCommand::new(tool)
        .args(["--empty", "--pages"])
        .args(options.inputs.iter().cloned())
        .arg("--")
        .arg(output))
}
