//! Read failure taxonomy.

use std::fmt;
use std::io;

use thiserror::Error;

/// The value kind a read operation was asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Bool,
    Integer,
    Float,
}

impl ValueKind {
    /// Stable lowercase name, used in diagnostics and fixture transcripts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a typed read did not produce a value.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Input ended before a token started.
    #[error("end of input while reading {0}")]
    EndOfStream(ValueKind),
    /// The token is not a literal of the requested kind.
    #[error("malformed {kind} token {token:?}")]
    Malformed { kind: ValueKind, token: String },
    /// The token is a well-formed literal that does not fit the target type.
    #[error("{kind} token {token:?} is out of range")]
    OutOfRange { kind: ValueKind, token: String },
    /// The token was longer than the destination buffer.
    ///
    /// The buffer still holds the NUL-terminated prefix; the remainder of the
    /// token has been consumed.
    #[error("token of {len} bytes truncated to fit a {capacity}-byte buffer")]
    Truncated { len: usize, capacity: usize },
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

impl ReadError {
    /// Short machine-friendly name of the failure class.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::EndOfStream(_) => "end_of_stream",
            Self::Malformed { .. } => "malformed",
            Self::OutOfRange { .. } => "out_of_range",
            Self::Truncated { .. } => "truncated",
            Self::Io(_) => "io",
        }
    }

    pub(crate) fn malformed(kind: ValueKind, token: &[u8]) -> Self {
        Self::Malformed {
            kind,
            token: String::from_utf8_lossy(token).into_owned(),
        }
    }

    pub(crate) fn out_of_range(kind: ValueKind, token: &[u8]) -> Self {
        Self::OutOfRange {
            kind,
            token: String::from_utf8_lossy(token).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_kind_and_token() {
        let err = ReadError::malformed(ValueKind::Integer, b"4x2");
        assert_eq!(err.to_string(), "malformed integer token \"4x2\"");
        assert_eq!(err.class(), "malformed");
    }

    #[test]
    fn eof_display() {
        let err = ReadError::EndOfStream(ValueKind::Float);
        assert_eq!(err.to_string(), "end of input while reading float");
        assert_eq!(err.class(), "end_of_stream");
    }

    #[test]
    fn io_errors_convert() {
        let err: ReadError = io::Error::other("boom").into();
        assert_eq!(err.class(), "io");
        assert!(err.to_string().starts_with("io: "));
    }
}
