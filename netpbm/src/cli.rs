//! Command-line front end for `pnmfilter`
//!
//! ```text
//! pnmfilter [-n | -b <amount> | -p | -s | -g | -c] -o <a|b> <basename> <image.ppm>
//! ```
//!
//! The output is written to `<basename>.pgm` for grayscale/contrast and
//! `<basename>.ppm` otherwise.
//!
//! The output mode is a separate argument (`-o a`, `-o b`, or the long
//! forms `--output ascii` / `--output binary`). The fused spellings
//! `-oa` and `-ob` are not accepted.

use crate::{PipelineError, PipelineResult, output_encoding, process};
use argh::{FromArgValue, FromArgs};
use log::debug;
use netpbm_core::{DataMode, Encoding};
use netpbm_filter::Operation;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Output sample layout selected with `-o`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputMode(pub DataMode);

impl FromArgValue for OutputMode {
    fn from_arg_value(value: &str) -> Result<Self, String> {
        match value {
            "a" | "ascii" => Ok(OutputMode(DataMode::Ascii)),
            "b" | "binary" => Ok(OutputMode(DataMode::Binary)),
            other => Err(format!("unknown output mode {other:?}, expected a or b")),
        }
    }
}

#[derive(FromArgs, Debug)]
/// Apply one filter to a PPM image and write the result as PPM/PGM.
pub struct Args {
    /// negate every sample
    #[argh(switch, short = 'n')]
    pub negate: bool,

    /// brighten by the given (possibly negative) amount
    #[argh(option, short = 'b')]
    pub brighten: Option<i32>,

    /// sharpen
    #[argh(switch, short = 'p')]
    pub sharpen: bool,

    /// smooth with a 3x3 average
    #[argh(switch, short = 's')]
    pub smooth: bool,

    /// convert to grayscale
    #[argh(switch, short = 'g')]
    pub grayscale: bool,

    /// convert to grayscale and stretch contrast
    #[argh(switch, short = 'c')]
    pub contrast: bool,

    /// output mode: a (ascii) or b (binary)
    #[argh(option, short = 'o')]
    pub output: OutputMode,

    /// output file name without extension
    #[argh(positional)]
    pub basename: String,

    /// input image (P3 or P6)
    #[argh(positional)]
    pub input: PathBuf,
}

impl Args {
    /// The single requested filter.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Usage`] if more than one filter flag is given.
    pub fn operation(&self) -> PipelineResult<Operation> {
        let mut ops = Vec::new();
        if self.negate {
            ops.push(Operation::Negate);
        }
        if let Some(amount) = self.brighten {
            ops.push(Operation::Brighten(amount));
        }
        if self.sharpen {
            ops.push(Operation::Sharpen);
        }
        if self.smooth {
            ops.push(Operation::Smooth);
        }
        if self.grayscale {
            ops.push(Operation::Grayscale);
        }
        if self.contrast {
            ops.push(Operation::Contrast);
        }

        match ops.as_slice() {
            [] => Ok(Operation::None),
            [op] => Ok(*op),
            _ => Err(PipelineError::Usage(
                "only one filter may be applied per run".to_string(),
            )),
        }
    }

    /// Output encoding for the requested filter and mode.
    pub fn output_encoding(&self) -> PipelineResult<Encoding> {
        Ok(output_encoding(self.operation()?, self.output.0))
    }

    /// `<basename>.ppm` or `<basename>.pgm`.
    pub fn output_path(&self) -> PipelineResult<PathBuf> {
        let ext = self.output_encoding()?.extension();
        Ok(PathBuf::from(format!("{}.{}", self.basename, ext)))
    }
}

/// Run one invocation, returning the path written.
///
/// The input is fully decoded, filtered and encoded before the output
/// file is created.
pub fn run(args: &Args) -> PipelineResult<PathBuf> {
    let op = args.operation()?;
    let out_path = args.output_path()?;
    debug!("pnmfilter: {} -> {} ({})", args.input.display(), out_path.display(), op);

    let reader = BufReader::new(File::open(&args.input).map_err(netpbm_io::IoError::from)?);
    let mut encoded = Vec::new();
    process(reader, op, args.output.0, &mut encoded)?;

    std::fs::write(&out_path, encoded).map_err(netpbm_io::IoError::from)?;
    Ok(out_path)
}
