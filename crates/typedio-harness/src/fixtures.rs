//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};
use typedio_core::Flavor;

use crate::error::HarnessError;

/// One runtime call inside a fixture case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureCall {
    /// Exported symbol name (`getInteger`, `putFloat`, `getStringN`, ...).
    pub function: String,
    /// Argument for put calls and the capacity of `getStringN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<serde_json::Value>,
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Behavior the case pins down.
    #[serde(default)]
    pub property: String,
    /// Flavor the case applies to: `runtime`, `inline` or `both`.
    #[serde(default = "default_flavor")]
    pub flavor: String,
    /// Bytes available on standard input.
    #[serde(default)]
    pub stdin: String,
    /// Calls, executed in order against one console.
    pub calls: Vec<FixtureCall>,
    /// Exact bytes expected on standard output.
    #[serde(default)]
    pub expected_stdout: String,
    /// Rendered result of every get call, in order (`42`, `true`,
    /// `err:end_of_stream`, ...).
    #[serde(default)]
    pub expected_results: Vec<String>,
}

fn default_flavor() -> String {
    String::from("both")
}

impl FixtureCase {
    /// Whether this case runs under `flavor`.
    #[must_use]
    pub fn applies_to(&self, flavor: Flavor) -> bool {
        let case = self.flavor.to_ascii_lowercase();
        case == "both" || case == flavor.as_str()
    }
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}
