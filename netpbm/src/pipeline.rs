//! Single-shot transform: decode, filter, encode.

use crate::PipelineResult;
use log::info;
use netpbm_core::{DataMode, Encoding};
use netpbm_filter::{Operation, apply_filter};
use std::io::{BufRead, Write};

/// Output container for `op` written in `data` mode.
///
/// Grayscale and contrast produce gray containers (`P2`/`P5`); every
/// other operation produces color containers (`P3`/`P6`).
pub fn output_encoding(op: Operation, data: DataMode) -> Encoding {
    Encoding::from_parts(data, op.output_channels())
}

/// Decode `source`, apply `op`, and encode the result into `sink`.
///
/// Returns the encoding that was written. Nothing is written to `sink`
/// unless decoding and filtering both succeed.
pub fn process<R: BufRead, W: Write>(
    source: R,
    op: Operation,
    data: DataMode,
    sink: W,
) -> PipelineResult<Encoding> {
    let raster = netpbm_io::read_pnm(source)?;
    let input = raster.encoding();
    let raster = apply_filter(raster, op)?;

    let encoding = output_encoding(op, data);
    netpbm_io::write_pnm(&raster, encoding, sink)?;
    info!(
        "{} {}x{} -> {} via {}",
        input,
        raster.width(),
        raster.height(),
        encoding,
        op
    );
    Ok(encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_encoding() {
        assert_eq!(
            output_encoding(Operation::Grayscale, DataMode::Ascii),
            Encoding::AsciiGray
        );
        assert_eq!(
            output_encoding(Operation::Contrast, DataMode::Binary),
            Encoding::BinaryGray
        );
        assert_eq!(
            output_encoding(Operation::Smooth, DataMode::Ascii),
            Encoding::AsciiColor
        );
        assert_eq!(
            output_encoding(Operation::None, DataMode::Binary),
            Encoding::BinaryColor
        );
    }

    #[test]
    fn test_process_failure_writes_nothing() {
        let mut out = Vec::new();
        let result = process(
            &b"P6\n2 2\n255\n\x01"[..],
            Operation::Negate,
            DataMode::Binary,
            &mut out,
        );
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_process_ascii_to_binary() {
        let mut out = Vec::new();
        let enc = process(
            &b"P3\n# c\n1 1\n255\n1 2 3\n"[..],
            Operation::Brighten(10),
            DataMode::Binary,
            &mut out,
        )
        .unwrap();
        assert_eq!(enc, Encoding::BinaryColor);
        assert_eq!(out, b"P6\n# c\n1 1\n255\n\x0b\x0c\x0d");
    }
}
