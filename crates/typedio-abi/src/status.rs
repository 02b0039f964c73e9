//! Status codes returned by the checked entry points.

use std::ffi::c_int;

use typedio_core::ReadError;

/// Outcome of a checked call, as seen by C callers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedIoStatus {
    Ok = 0,
    EndOfStream = 1,
    Malformed = 2,
    OutOfRange = 3,
    Truncated = 4,
    IoError = 5,
    NullArgument = 6,
}

impl TypedIoStatus {
    /// The integer handed back across the C boundary.
    #[must_use]
    pub const fn code(self) -> c_int {
        self as c_int
    }

    /// Inverse of [`code`](Self::code); unknown codes yield `None`.
    #[must_use]
    pub const fn from_code(code: c_int) -> Option<Self> {
        Some(match code {
            0 => Self::Ok,
            1 => Self::EndOfStream,
            2 => Self::Malformed,
            3 => Self::OutOfRange,
            4 => Self::Truncated,
            5 => Self::IoError,
            6 => Self::NullArgument,
            _ => return None,
        })
    }
}

impl From<&ReadError> for TypedIoStatus {
    fn from(err: &ReadError) -> Self {
        match err {
            ReadError::EndOfStream(_) => Self::EndOfStream,
            ReadError::Malformed { .. } => Self::Malformed,
            ReadError::OutOfRange { .. } => Self::OutOfRange,
            ReadError::Truncated { .. } => Self::Truncated,
            ReadError::Io(_) => Self::IoError,
        }
    }
}

impl<T> From<&Result<T, ReadError>> for TypedIoStatus {
    fn from(result: &Result<T, ReadError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(err) => err.into(),
        }
    }
}
