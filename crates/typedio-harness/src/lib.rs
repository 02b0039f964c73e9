//! Conformance harness for the typed console I/O runtime.
//!
//! This crate provides:
//! - Fixtures: JSON call sequences with the stdin they read and the stdout
//!   and results they must produce
//! - A runner that replays each case against an in-memory console per flavor
//! - Reports in markdown and JSON, keyed by the fixture's SHA-256
//! - A structured JSONL log with a schema validator

#![forbid(unsafe_code)]

pub mod diff;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCall, FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
