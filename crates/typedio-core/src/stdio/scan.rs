//! Whitespace-delimited token scanning.
//!
//! Follows the scanf conversion rules the runtime has always relied on:
//! leading whitespace is skipped, then bytes are taken up to the next
//! whitespace byte or EOF. The byte that ends the token is left unread, so
//! consecutive reads see `"42 7"` as `42` then `7`.
//!
//! All functions work on any [`BufRead`] and never read ahead past the
//! delimiter, which keeps a shared underlying stream positioned exactly
//! after the consumed token.

use std::io::{self, BufRead};

use crate::error::{ReadError, ValueKind};

/// Whitespace as classified by `isspace` in the C locale.
#[inline]
#[must_use]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Skip leading whitespace. Returns `false` if the input ended first.
fn skip_space<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<bool> {
    loop {
        let (skipped, exhausted) = {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                return Ok(false);
            }
            let skipped = buf.iter().take_while(|&&b| is_space(b)).count();
            (skipped, skipped == buf.len())
        };
        reader.consume(skipped);
        if !exhausted {
            return Ok(true);
        }
    }
}

/// Hand the bytes of the current token to `sink` chunk by chunk.
///
/// Returns the full token length. Stops at whitespace (left unread) or EOF.
fn drain_token<R, F>(reader: &mut R, mut sink: F) -> io::Result<usize>
where
    R: BufRead + ?Sized,
    F: FnMut(&[u8]),
{
    let mut total = 0usize;
    loop {
        let (run, delimited) = {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                return Ok(total);
            }
            let run = buf.iter().position(|&b| is_space(b)).unwrap_or(buf.len());
            sink(&buf[..run]);
            (run, run < buf.len())
        };
        reader.consume(run);
        total += run;
        if delimited {
            return Ok(total);
        }
    }
}

/// Read one token into an owned buffer.
pub fn read_token<R: BufRead + ?Sized>(
    reader: &mut R,
    kind: ValueKind,
) -> Result<Vec<u8>, ReadError> {
    if !skip_space(reader)? {
        return Err(ReadError::EndOfStream(kind));
    }
    let mut token = Vec::new();
    drain_token(reader, |chunk| token.extend_from_slice(chunk))?;
    Ok(token)
}

/// Read one token into `dst`, NUL-terminated, never writing past its end.
///
/// Returns the token length. A token that does not fit is truncated to
/// `dst.len() - 1` bytes (still NUL-terminated), its remainder is consumed,
/// and [`ReadError::Truncated`] is returned. At end of input `dst` holds the
/// empty string.
pub fn read_token_into<R: BufRead + ?Sized>(
    reader: &mut R,
    dst: &mut [u8],
) -> Result<usize, ReadError> {
    let capacity = dst.len();
    if !skip_space(reader)? {
        if let Some(first) = dst.first_mut() {
            *first = 0;
        }
        return Err(ReadError::EndOfStream(ValueKind::String));
    }

    let room = capacity.saturating_sub(1);
    let mut written = 0usize;
    let len = drain_token(reader, |chunk| {
        let take = chunk.len().min(room - written);
        dst[written..written + take].copy_from_slice(&chunk[..take]);
        written += take;
    })?;

    if capacity == 0 {
        return Err(ReadError::Truncated { len, capacity });
    }
    dst[written] = 0;
    if len > room {
        return Err(ReadError::Truncated { len, capacity });
    }
    Ok(len)
}

/// Read one line into `dst` with `fgets` semantics.
///
/// Copies at most `dst.len() - 1` bytes, stopping after a newline (which is
/// kept), and NUL-terminates. Bytes beyond the capacity stay in the stream
/// for the next read. Returns the number of bytes stored.
pub fn read_line_into<R: BufRead + ?Sized>(
    reader: &mut R,
    dst: &mut [u8],
) -> Result<usize, ReadError> {
    let capacity = dst.len();
    if capacity == 0 {
        return Err(ReadError::Truncated { len: 0, capacity });
    }
    let room = capacity - 1;
    let mut written = 0usize;

    while written < room {
        let (take, newline) = {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                break;
            }
            let limit = buf.len().min(room - written);
            let (take, newline) = match buf[..limit].iter().position(|&b| b == b'\n') {
                Some(pos) => (pos + 1, true),
                None => (limit, false),
            };
            dst[written..written + take].copy_from_slice(&buf[..take]);
            (take, newline)
        };
        reader.consume(take);
        written += take;
        if newline {
            break;
        }
    }

    dst[written] = 0;
    if written == 0 && room > 0 {
        return Err(ReadError::EndOfStream(ValueKind::String));
    }
    Ok(written)
}

/// Read one line into an owned buffer, newline included.
pub fn read_line<R: BufRead + ?Sized>(reader: &mut R) -> Result<Vec<u8>, ReadError> {
    let mut line = Vec::new();
    loop {
        match reader.read_until(b'\n', &mut line) {
            Ok(_) => break,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    if line.is_empty() {
        return Err(ReadError::EndOfStream(ValueKind::String));
    }
    Ok(line)
}

/// Parse a base-10 integer token: optional `+`/`-` followed by digits.
pub fn parse_integer(token: &[u8], kind: ValueKind) -> Result<i32, ReadError> {
    let text = std::str::from_utf8(token).map_err(|_| ReadError::malformed(kind, token))?;
    text.parse::<i32>().map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
            ReadError::out_of_range(kind, token)
        }
        _ => ReadError::malformed(kind, token),
    })
}

/// Parse a floating-point token as single precision.
///
/// Accepts an optional sign, decimal digits with an optional fraction and
/// exponent, and `inf`/`infinity`/`nan` in any case. Magnitudes beyond the
/// `f32` range become infinities, as `strtof` does.
pub fn parse_float(token: &[u8]) -> Result<f32, ReadError> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|text| text.parse::<f32>().ok())
        .ok_or_else(|| ReadError::malformed(ValueKind::Float, token))
}
