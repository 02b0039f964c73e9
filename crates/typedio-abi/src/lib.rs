// Exports take raw pointers from generated C code; each symbol documents
// its own pointer contract.
#![allow(clippy::missing_safety_doc)]
//! # typedio-abi
//!
//! `extern "C"` boundary of the typed console I/O runtime.
//!
//! Built as `libtypedio` (`cdylib` and `staticlib`) for compiled programs,
//! and as an `rlib` for Rust embedders and tests. Every symbol forwards to
//! the safe [`typedio_core::Console`] held in the process-wide state.
//!
//! # Architecture
//!
//! ```text
//! generated code -> ABI entry (this crate) -> process console -> stdin/stdout
//! ```
//!
//! The legacy symbols (`getString`, `putString`, `getBool`, `putBool`,
//! `getInteger`, `putInteger`, `getFloat`, `putFloat`) follow the configured
//! failure policy. The checked symbols (`getStringN`, `getBoolChecked`,
//! `getIntegerChecked`, `getFloatChecked`, `typedioFlush`) return a
//! [`TypedIoStatus`] code.

#[macro_use]
mod macros;

mod console_state;
mod runtime_policy;
pub mod status;
pub mod stdio_abi;

pub use console_state::{ProcessConsole, install_console, reset_console};
pub use status::TypedIoStatus;
