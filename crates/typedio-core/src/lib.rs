//! # typedio-core
//!
//! Safe Rust implementation of the typed console I/O runtime that compiled
//! programs link against.
//!
//! The source language has four value kinds (string, boolean, integer,
//! float) and every read or print statement lowers to one get/put pair per
//! kind. This crate implements those eight operations over explicitly passed
//! stream handles ([`Console`]); the `typedio-abi` crate binds them to the
//! process stdin/stdout behind the legacy C symbols.
//!
//! No `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod stdio;

pub use config::{
    FailurePolicy, Flavor, RuntimeConfig, clear_runtime_config, install_runtime_config,
    runtime_config,
};
pub use error::{ReadError, ValueKind};
pub use stdio::Console;
