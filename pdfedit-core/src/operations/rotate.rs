//! `rotate`: turn every page clockwise by a quarter, half or three-quarter turn.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult, validation_error};
use crate::external::ExternalCommand;
use crate::options::ParsedOptions;

use super::{Operation, single_input};

const REQUIREMENT: &str = "rotate requires -o output.pdf -r <90|180|270> and exactly one input PDF.";
const BAD_ROTATION: &str = "rotation must be one of 90, 180, 270.";

/// qpdf page range covering every page.
const ALL_PAGES: &str = "1-z";

/// Supported rotation amounts, in degrees clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Quarter,
    Half,
    ThreeQuarter,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Quarter => 90,
            Rotation::Half => 180,
            Rotation::ThreeQuarter => 270,
        }
    }

    /// qpdf `--rotate` argument. The `+` makes the rotation relative to the
    /// page's current orientation.
    pub fn qpdf_arg(self) -> String {
        format!("--rotate=+{}:{}", self.degrees(), ALL_PAGES)
    }
}

impl FromStr for Rotation {
    type Err = CoreError;

    /// Accepts exactly `90`, `180` or `270`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "90" => Ok(Rotation::Quarter),
            "180" => Ok(Rotation::Half),
            "270" => Ok(Rotation::ThreeQuarter),
            _ => Err(validation_error(Operation::Rotate, BAD_ROTATION)),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Builds `<tool> --rotate=+<deg>:1-z <in> -- <out>`.
pub fn build_rotate(options: &ParsedOptions, tool: &str) -> CoreResult<ExternalCommand> {
    let missing = || validation_error(Operation::Rotate, REQUIREMENT);
    let output = options.output().ok_or_else(missing)?;
    let input = single_input(options).ok_or_else(missing)?;
    let rotation: Rotation = options.rotation().ok_or_else(missing)?.parse()?;

    Ok(ExternalCommand::new(tool)
        .arg(rotation.qpdf_arg())
        .arg(input)
        .arg("--")
        .arg(output))
}
