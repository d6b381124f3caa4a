//! Container header reading and writing
//!
//! Header layout:
//!
//! ```text
//! <signature>\n
//! [#comment line\n ...]
//! <width> <height>\n
//! <max_value>\n
//! ```
//!
//! Exactly one whitespace byte separates the max-value token from the
//! pixel data, which lets the binary variants locate their first sample.

use crate::{IoError, IoResult};
use netpbm_core::Encoding;
use std::io::{BufRead, Write};

/// Header fields read before any pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PnmHeader {
    /// Container encoding named by the signature
    pub encoding: Encoding,
    /// Comment lines joined by `\n`, each keeping its leading `#`
    pub comment: Option<String>,
    /// Columns
    pub width: u32,
    /// Rows
    pub height: u32,
    /// Max-value token, verbatim
    pub max_value: String,
}

/// Whitespace-delimited token reader over a buffered source.
///
/// Mirrors formatted stream extraction: leading whitespace is skipped,
/// trailing whitespace is left in the stream.
pub(crate) struct TokenReader<'a, R: BufRead> {
    inner: &'a mut R,
}

impl<'a, R: BufRead> TokenReader<'a, R> {
    pub(crate) fn new(inner: &'a mut R) -> Self {
        TokenReader { inner }
    }

    /// Next token, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> IoResult<Option<String>> {
        self.skip_whitespace()?;
        let mut token = Vec::new();
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let len = buf
                .iter()
                .position(|b| b.is_ascii_whitespace())
                .unwrap_or(buf.len());
            token.extend_from_slice(&buf[..len]);
            let done = len < buf.len();
            self.inner.consume(len);
            if done {
                break;
            }
        }
        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(String::from_utf8_lossy(&token).into_owned()))
        }
    }

    pub(crate) fn peek_byte(&mut self) -> IoResult<Option<u8>> {
        Ok(self.inner.fill_buf()?.first().copied())
    }

    /// Discard a single byte, if any remains.
    pub(crate) fn skip_byte(&mut self) -> IoResult<()> {
        if self.peek_byte()?.is_some() {
            self.inner.consume(1);
        }
        Ok(())
    }

    /// Read up to and including the next `\n`, returning the line without it.
    pub(crate) fn read_line(&mut self) -> IoResult<String> {
        let mut line = Vec::new();
        self.inner.read_until(b'\n', &mut line)?;
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    fn skip_whitespace(&mut self) -> IoResult<()> {
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                return Ok(());
            }
            let len = buf
                .iter()
                .position(|b| !b.is_ascii_whitespace())
                .unwrap_or(buf.len());
            let done = len < buf.len();
            self.inner.consume(len);
            if done {
                return Ok(());
            }
        }
    }
}

/// Read a container header, leaving `reader` at the first pixel byte.
///
/// Only color signatures (`P3`, `P6`) are accepted.
///
/// # Errors
///
/// Returns [`IoError::MalformedHeader`] for an unrecognized signature or
/// a missing/non-numeric width, height or max-value token.
pub fn read_header<R: BufRead>(reader: &mut R) -> IoResult<PnmHeader> {
    let mut tokens = TokenReader::new(reader);

    let signature = tokens
        .next_token()?
        .ok_or_else(|| IoError::MalformedHeader("missing signature".to_string()))?;
    let encoding = Encoding::from_signature(&signature)
        .filter(|enc| enc.is_readable())
        .ok_or_else(|| IoError::MalformedHeader(format!("unsupported signature {signature:?}")))?;
    tokens.skip_byte()?;

    let mut comment = String::new();
    while tokens.peek_byte()? == Some(b'#') {
        let line = tokens.read_line()?;
        if !comment.is_empty() {
            comment.push('\n');
        }
        comment.push_str(&line);
    }

    let width = parse_dimension(&mut tokens, "width")?;
    let height = parse_dimension(&mut tokens, "height")?;

    let max_value = tokens
        .next_token()?
        .ok_or_else(|| IoError::MalformedHeader("missing max value".to_string()))?;
    if max_value.parse::<u32>().is_err() {
        return Err(IoError::MalformedHeader(format!(
            "non-numeric max value {max_value:?}"
        )));
    }
    tokens.skip_byte()?;

    Ok(PnmHeader {
        encoding,
        comment: (!comment.is_empty()).then_some(comment),
        width,
        height,
        max_value,
    })
}

fn parse_dimension<R: BufRead>(tokens: &mut TokenReader<'_, R>, name: &str) -> IoResult<u32> {
    let token = tokens
        .next_token()?
        .ok_or_else(|| IoError::MalformedHeader(format!("missing {name}")))?;
    token
        .parse::<u32>()
        .map_err(|_| IoError::MalformedHeader(format!("non-numeric {name} {token:?}")))
}

/// Write a container header.
///
/// The comment block is written as stored; no `#` markers are added.
pub fn write_header<W: Write>(
    writer: &mut W,
    encoding: Encoding,
    comment: Option<&str>,
    width: u32,
    height: u32,
    max_value: &str,
) -> IoResult<()> {
    writeln!(writer, "{}", encoding.signature())?;
    if let Some(comment) = comment.filter(|c| !c.is_empty()) {
        writeln!(writer, "{comment}")?;
    }
    writeln!(writer, "{width} {height}")?;
    writeln!(writer, "{max_value}")?;
    Ok(())
}
