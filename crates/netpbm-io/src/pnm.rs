//! PPM/PGM pixel data
//!
//! Reads ASCII (`P3`) and binary (`P6`) color containers, and writes all
//! four of `P2`, `P3`, `P5` and `P6`. The output signature is chosen by
//! the caller and is independent of the signature the raster was read
//! from.

use crate::header::{TokenReader, read_header, write_header};
use crate::{IoError, IoResult};
use log::{debug, trace};
use netpbm_core::{Channels, DataMode, Encoding, Raster, RgbPlanes};
use std::io::{BufRead, BufWriter, Read, Write};

/// Read a color netpbm image (`P3`/`P6`) from a reader.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the signature
///
/// # Returns
/// A color [`Raster`] tagged with the input encoding, carrying the
/// header's comment block and max-value text.
///
/// # Errors
/// [`IoError::MalformedHeader`] for a bad header, [`IoError::TruncatedData`]
/// if the source ends early, [`IoError::InvalidData`] for a non-integer
/// ASCII token.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Raster> {
    let header = read_header(&mut reader)?;
    debug!(
        "read_pnm: {} {}x{} max={} comment_lines={}",
        header.encoding,
        header.width,
        header.height,
        header.max_value,
        header.comment.as_deref().map_or(0, |c| c.lines().count())
    );

    let mut raster = Raster::new(
        header.encoding,
        header.width,
        header.height,
        &header.max_value,
    )?
    .with_comment(header.comment);

    let rgb = raster.rgb_mut()?;
    match header.encoding.data_mode() {
        DataMode::Ascii => read_ascii_rgb(&mut reader, rgb)?,
        DataMode::Binary => read_binary_rgb(&mut reader, rgb)?,
    }

    Ok(raster)
}

/// Parse three decimal tokens per pixel, row-major.
///
/// Values are stored modulo 256.
fn read_ascii_rgb<R: BufRead>(reader: &mut R, rgb: &mut RgbPlanes) -> IoResult<()> {
    let (w, h) = (rgb.width(), rgb.height());
    let expected = w as usize * h as usize * 3;
    let mut tokens = TokenReader::new(reader);
    let mut count = 0usize;

    let mut next_sample = |count: &mut usize| -> IoResult<u8> {
        let token = tokens.next_token()?.ok_or(IoError::TruncatedData {
            expected,
            actual: *count,
        })?;
        let value: i64 = token
            .parse()
            .map_err(|_| IoError::InvalidData(format!("non-integer sample {token:?}")))?;
        *count += 1;
        Ok(value as u8)
    };

    for y in 0..h {
        for x in 0..w {
            let r = next_sample(&mut count)?;
            let g = next_sample(&mut count)?;
            let b = next_sample(&mut count)?;
            rgb.set_rgb_unchecked(x, y, r, g, b);
        }
    }
    trace!("read_ascii_rgb: {count} samples");
    Ok(())
}

/// Read three raw bytes per pixel, row-major.
fn read_binary_rgb<R: Read>(reader: &mut R, rgb: &mut RgbPlanes) -> IoResult<()> {
    let (w, h) = (rgb.width(), rgb.height());
    let row_len = w as usize * 3;
    let expected = row_len * h as usize;
    let mut row = vec![0u8; row_len];

    for y in 0..h {
        let n = read_fully(reader, &mut row)?;
        if n < row_len {
            return Err(IoError::TruncatedData {
                expected,
                actual: y as usize * row_len + n,
            });
        }
        for (x, px) in row.chunks_exact(3).enumerate() {
            rgb.set_rgb_unchecked(x as u32, y, px[0], px[1], px[2]);
        }
    }
    Ok(())
}

/// Fill `buf` as far as the source allows, returning the byte count.
fn read_fully<R: Read>(reader: &mut R, buf: &mut [u8]) -> IoResult<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Write a raster as a netpbm container.
///
/// # Arguments
/// * `raster`   - The image to encode
/// * `encoding` - Output container; its channel mode must match the raster
/// * `writer`   - Destination writer
///
/// ASCII samples are written as decimal integers each followed by one
/// space, without line breaks. Binary samples are one byte each.
///
/// # Errors
/// [`IoError::EncodeError`] if `encoding` asks for gray output from a
/// color raster or vice versa.
pub fn write_pnm<W: Write>(raster: &Raster, encoding: Encoding, writer: W) -> IoResult<()> {
    if encoding.channel_mode() != raster.channel_mode() {
        return Err(IoError::EncodeError(format!(
            "cannot write {} raster as {}",
            raster.channel_mode(),
            encoding
        )));
    }

    let mut out = BufWriter::new(writer);
    write_header(
        &mut out,
        encoding,
        raster.comment(),
        raster.width(),
        raster.height(),
        raster.max_value(),
    )?;

    let (w, h) = (raster.width(), raster.height());
    match (raster.channels(), encoding.data_mode()) {
        (Channels::Color(rgb), DataMode::Ascii) => {
            for y in 0..h {
                for x in 0..w {
                    let (r, g, b) = rgb.get_rgb_unchecked(x, y);
                    write!(out, "{r} {g} {b} ")?;
                }
            }
        }
        (Channels::Color(rgb), DataMode::Binary) => {
            let mut row = Vec::with_capacity(w as usize * 3);
            for y in 0..h {
                row.clear();
                for x in 0..w {
                    let (r, g, b) = rgb.get_rgb_unchecked(x, y);
                    row.extend_from_slice(&[r, g, b]);
                }
                out.write_all(&row)?;
            }
        }
        (Channels::Gray(gray), DataMode::Ascii) => {
            for &v in gray.data() {
                write!(out, "{v} ")?;
            }
        }
        (Channels::Gray(gray), DataMode::Binary) => {
            out.write_all(gray.data())?;
        }
    }

    out.flush()?;
    trace!("write_pnm: {} {}x{}", encoding, w, h);
    Ok(())
}
