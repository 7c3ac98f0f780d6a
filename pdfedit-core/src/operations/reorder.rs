//! `move`: rewrite a PDF with its pages in a caller-chosen order.

use crate::error::{CoreResult, validation_error};
use crate::external::ExternalCommand;
use crate::options::ParsedOptions;

use super::{Operation, single_input};

const REQUIREMENT: &str = "move requires -o output.pdf -p <order> and exactly one input PDF.";

/// Replaces every comma in a user-supplied order with a single space.
///
/// ```rust
/// assert_eq!(pdfedit_core::operations::transform_order("3,1,2"), "3 1 2");
/// ```
pub fn transform_order(order: &str) -> String {
    order.replace(',', " ")
}

/// Builds `<tool> --pages <in> <order tokens...> -- <out>`.
///
/// The transformed order is split on whitespace and each piece becomes its
/// own argument. Page numbers are not checked here.
pub fn build_move(options: &ParsedOptions, tool: &str) -> CoreResult<ExternalCommand> {
    let missing = || validation_error(Operation::Move, REQUIREMENT);
    let output = options.output().ok_or_else(missing)?;
    let input = single_input(options).ok_or_else(missing)?;
    let order = transform_order(options.order().ok_or_else(missing)?);

    let tokens: Vec<&str> = order.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(missing());
    }

    Ok(ExternalCommand::new(tool)
        .arg("--pages")
        .arg(input)
        .args(tokens)
        .arg("--")
        .arg(output))
}
