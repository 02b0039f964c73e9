//! The eight typed console operations over explicit stream handles.

use std::io::{self, BufRead, Write};

use crate::config::Flavor;
use crate::error::{ReadError, ValueKind};

use super::printf::{
    DEFAULT_PRECISION, format_bool, format_fixed, format_general, format_signed,
};
use super::scan;

/// A typed view over an input stream and an output stream.
///
/// Reads consume exactly one whitespace-delimited token per call (one line
/// for string reads in the [`Flavor::Inline`] flavor). Writes render one value
/// and hand it to the writer in a single `write_all`. Pending output is
/// flushed before every read so prompts appear before the program blocks on
/// input; a failed flush is ignored there and the read proceeds.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
    flavor: Flavor,
    scratch: Vec<u8>,
}

impl<R, W> Console<R, W> {
    /// Console with the default [`Flavor::Runtime`] conventions.
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_flavor(reader, writer, Flavor::Runtime)
    }

    pub fn with_flavor(reader: R, writer: W, flavor: Flavor) -> Self {
        Self {
            reader,
            writer,
            flavor,
            scratch: Vec::with_capacity(32),
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn set_flavor(&mut self, flavor: Flavor) {
        self.flavor = flavor;
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Recover the underlying streams.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    // -----------------------------------------------------------------------
    // Strings
    // -----------------------------------------------------------------------

    /// Read a string into an owned, growable buffer (no terminator).
    pub fn read_string(&mut self) -> Result<Vec<u8>, ReadError> {
        self.prepare_read();
        match self.flavor {
            Flavor::Runtime => scan::read_token(&mut self.reader, ValueKind::String),
            Flavor::Inline => scan::read_line(&mut self.reader),
        }
    }

    /// Read a string into `dst`, NUL-terminated, never writing past its end.
    ///
    /// Returns the number of bytes stored before the terminator. See
    /// [`scan::read_token_into`] and [`scan::read_line_into`] for the
    /// truncation rules of each flavor.
    pub fn read_string_into(&mut self, dst: &mut [u8]) -> Result<usize, ReadError> {
        self.prepare_read();
        match self.flavor {
            Flavor::Runtime => scan::read_token_into(&mut self.reader, dst),
            Flavor::Inline => scan::read_line_into(&mut self.reader, dst),
        }
    }

    /// Write the bytes verbatim.
    pub fn write_string(&mut self, value: &[u8]) -> io::Result<()> {
        self.scratch.clear();
        self.scratch.extend_from_slice(value);
        self.emit()
    }

    // -----------------------------------------------------------------------
    // Booleans
    // -----------------------------------------------------------------------

    /// Read an integer token; nonzero is `true`.
    pub fn read_bool(&mut self) -> Result<bool, ReadError> {
        self.read_int_token(ValueKind::Bool).map(|n| n != 0)
    }

    pub fn write_bool(&mut self, value: bool) -> io::Result<()> {
        self.scratch.clear();
        format_bool(value, &mut self.scratch);
        self.emit()
    }

    // -----------------------------------------------------------------------
    // Integers
    // -----------------------------------------------------------------------

    pub fn read_integer(&mut self) -> Result<i32, ReadError> {
        self.read_int_token(ValueKind::Integer)
    }

    pub fn write_integer(&mut self, value: i32) -> io::Result<()> {
        self.scratch.clear();
        format_signed(i64::from(value), &mut self.scratch);
        self.emit()
    }

    // -----------------------------------------------------------------------
    // Floats
    // -----------------------------------------------------------------------

    pub fn read_float(&mut self) -> Result<f32, ReadError> {
        self.prepare_read();
        let token = scan::read_token(&mut self.reader, ValueKind::Float)?;
        scan::parse_float(&token)
    }

    /// `%f` in the runtime flavor, `%g` in the inline flavor.
    pub fn write_float(&mut self, value: f32) -> io::Result<()> {
        self.scratch.clear();
        match self.flavor {
            Flavor::Runtime => {
                format_fixed(f64::from(value), DEFAULT_PRECISION, &mut self.scratch)
            }
            Flavor::Inline => {
                format_general(f64::from(value), DEFAULT_PRECISION, &mut self.scratch)
            }
        }
        self.emit()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn read_int_token(&mut self, kind: ValueKind) -> Result<i32, ReadError> {
        self.prepare_read();
        let token = scan::read_token(&mut self.reader, kind)?;
        scan::parse_integer(&token, kind)
    }

    /// Best-effort flush of pending output. A broken output stream must not
    /// stop input from being consumed; the next write reports the failure.
    fn prepare_read(&mut self) {
        let _ = self.writer.flush();
    }

    /// Hand the rendered scratch value to the writer, with the flavor's
    /// terminator.
    fn emit(&mut self) -> io::Result<()> {
        if matches!(self.flavor, Flavor::Inline) {
            self.scratch.push(b'\n');
        }
        self.writer.write_all(&self.scratch)
    }
}
