//! Typed console exports.
//!
//! The eight legacy symbols keep the calling convention compiled programs
//! already use: no error channel, default values on failure (or a strict
//! abort, see `runtime_policy`). The checked symbols report a
//! [`TypedIoStatus`] code instead and never abort.

use std::ffi::{CStr, c_char, c_float, c_int};

use typedio_core::runtime_config;

use crate::console_state::with_console;
use crate::runtime_policy::{settle_read, settle_write};
use crate::status::TypedIoStatus;

// ---------------------------------------------------------------------------
// Legacy symbols
// ---------------------------------------------------------------------------

abi_fn! {
    /// Read one string into `buf` and NUL-terminate it.
    ///
    /// At most `TYPEDIO_STRING_CAPACITY` bytes (default 256) are written,
    /// terminator included. A longer token is truncated and its remainder
    /// discarded. At end of input `buf` holds the empty string.
    ///
    /// # Safety
    ///
    /// `buf` must be null or valid for writes of the configured capacity.
    #[allow(non_snake_case)]
    fn getString(buf: *mut c_char) {
        if buf.is_null() {
            return;
        }
        let capacity = runtime_config().string_capacity;
        let dst = std::slice::from_raw_parts_mut(buf.cast::<u8>(), capacity);
        let result = with_console(|console| console.read_string_into(dst));
        settle_read("getString", result.map(drop));
    }
}

abi_fn! {
    /// Write a NUL-terminated string verbatim. A null pointer prints `(null)`.
    ///
    /// # Safety
    ///
    /// `s` must be null or point to a NUL-terminated string.
    #[allow(non_snake_case)]
    fn putString(s: *const c_char) {
        let bytes: &[u8] = if s.is_null() {
            b"(null)"
        } else {
            CStr::from_ptr(s).to_bytes()
        };
        let result = with_console(|console| console.write_string(bytes));
        settle_write("putString", result);
    }
}

abi_fn! {
    /// Read an integer token; returns 1 if nonzero, 0 otherwise.
    #[allow(non_snake_case)]
    fn getBool() -> c_int {
        let result = with_console(|console| console.read_bool());
        c_int::from(settle_read("getBool", result))
    }
}

abi_fn! {
    /// Write `true` for any nonzero value, `false` for zero.
    #[allow(non_snake_case)]
    fn putBool(value: c_int) {
        let result = with_console(|console| console.write_bool(value != 0));
        settle_write("putBool", result);
    }
}

abi_fn! {
    #[allow(non_snake_case)]
    fn getInteger() -> c_int {
        let result = with_console(|console| console.read_integer());
        settle_read("getInteger", result)
    }
}

abi_fn! {
    #[allow(non_snake_case)]
    fn putInteger(value: c_int) {
        let result = with_console(|console| console.write_integer(value));
        settle_write("putInteger", result);
    }
}

abi_fn! {
    #[allow(non_snake_case)]
    fn getFloat() -> c_float {
        let result = with_console(|console| console.read_float());
        settle_read("getFloat", result)
    }
}

abi_fn! {
    #[allow(non_snake_case)]
    fn putFloat(value: c_float) {
        let result = with_console(|console| console.write_float(value));
        settle_write("putFloat", result);
    }
}

// ---------------------------------------------------------------------------
// Checked symbols
// ---------------------------------------------------------------------------

abi_fn! {
    /// Read one string into `buf[..cap]`, NUL-terminated.
    ///
    /// Returns `Truncated` when the token did not fit; `buf` then holds the
    /// longest prefix that did and the rest of the token is consumed.
    ///
    /// # Safety
    ///
    /// `buf` must be null or valid for writes of `cap` bytes.
    #[allow(non_snake_case)]
    fn getStringN(buf: *mut c_char, cap: usize) -> c_int {
        if buf.is_null() {
            return TypedIoStatus::NullArgument.code();
        }
        let dst = std::slice::from_raw_parts_mut(buf.cast::<u8>(), cap);
        let result = with_console(|console| console.read_string_into(dst));
        TypedIoStatus::from(&result).code()
    }
}

abi_fn! {
    /// Read a boolean into `*out` (0 or 1). `*out` is untouched on failure.
    ///
    /// # Safety
    ///
    /// `out` must be null or valid for a write of one `int`.
    #[allow(non_snake_case)]
    fn getBoolChecked(out: *mut c_int) -> c_int {
        if out.is_null() {
            return TypedIoStatus::NullArgument.code();
        }
        match with_console(|console| console.read_bool()) {
            Ok(value) => {
                *out = c_int::from(value);
                TypedIoStatus::Ok.code()
            }
            Err(err) => TypedIoStatus::from(&err).code(),
        }
    }
}

abi_fn! {
    /// Read an integer into `*out`. `*out` is untouched on failure.
    ///
    /// # Safety
    ///
    /// `out` must be null or valid for a write of one `int`.
    #[allow(non_snake_case)]
    fn getIntegerChecked(out: *mut c_int) -> c_int {
        if out.is_null() {
            return TypedIoStatus::NullArgument.code();
        }
        match with_console(|console| console.read_integer()) {
            Ok(value) => {
                *out = value;
                TypedIoStatus::Ok.code()
            }
            Err(err) => TypedIoStatus::from(&err).code(),
        }
    }
}

abi_fn! {
    /// Read a float into `*out`. `*out` is untouched on failure.
    ///
    /// # Safety
    ///
    /// `out` must be null or valid for a write of one `float`.
    #[allow(non_snake_case)]
    fn getFloatChecked(out: *mut c_float) -> c_int {
        if out.is_null() {
            return TypedIoStatus::NullArgument.code();
        }
        match with_console(|console| console.read_float()) {
            Ok(value) => {
                *out = value;
                TypedIoStatus::Ok.code()
            }
            Err(err) => TypedIoStatus::from(&err).code(),
        }
    }
}

abi_fn! {
    /// Flush pending output of the process console.
    #[allow(non_snake_case)]
    fn typedioFlush() -> c_int {
        match with_console(|console| console.flush()) {
            Ok(()) => TypedIoStatus::Ok.code(),
            Err(_) => TypedIoStatus::IoError.code(),
        }
    }
}
