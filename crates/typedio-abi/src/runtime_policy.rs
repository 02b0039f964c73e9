//! Failure policy for the legacy entry points.
//!
//! The legacy symbols have no error channel. In lenient mode a failed call
//! leaves its default value in place and the program carries on; in strict
//! mode the failure is reported on stderr and the process exits with
//! status 1. Callers must release the console lock before settling, since
//! exiting runs the `atexit` flush.

use std::io::{self, Write};

use typedio_core::{FailurePolicy, ReadError, runtime_config};

/// Exit status used by strict mode.
pub(crate) const STRICT_EXIT_STATUS: i32 = 1;

/// Resolve a read result to the value handed back to C.
pub(crate) fn settle_read<T: Default>(symbol: &str, result: Result<T, ReadError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            abort_if_strict(symbol, &err);
            T::default()
        }
    }
}

/// Resolve a write result; lenient mode drops the error.
pub(crate) fn settle_write(symbol: &str, result: io::Result<()>) {
    if let Err(err) = result {
        abort_if_strict(symbol, &err);
    }
}

fn abort_if_strict(symbol: &str, err: &dyn std::fmt::Display) {
    if runtime_config().policy == FailurePolicy::Strict {
        let _ = writeln!(io::stderr(), "typedio: {symbol}: {err}");
        std::process::exit(STRICT_EXIT_STATUS);
    }
}
