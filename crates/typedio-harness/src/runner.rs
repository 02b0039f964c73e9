//! Test execution engine.

use std::io::{BufRead, Cursor, Write};

use typedio_core::{Console, Flavor, ReadError};

use crate::diff;
use crate::error::HarnessError;
use crate::fixtures::{FixtureCall, FixtureCase, FixtureSet};
use crate::verify::{Transcript, VerificationResult};

/// Runs a fixture set under one flavor and collects verification results.
pub struct TestRunner {
    /// Flavor every case is replayed under.
    pub flavor: Flavor,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(flavor: Flavor) -> Self {
        Self { flavor }
    }

    /// Run all matching fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .filter(|case| case.applies_to(self.flavor))
            .map(|case| self.verify_case(case))
            .collect()
    }

    fn verify_case(&self, case: &FixtureCase) -> VerificationResult {
        let expected = Transcript {
            stdout: case.expected_stdout.clone(),
            results: case.expected_results.clone(),
        }
        .render();
        let actual = match execute_case(case, self.flavor) {
            Ok(transcript) => transcript.render(),
            Err(err) => format!("unsupported:{err}\n"),
        };
        let passed = actual == expected;
        let diff = (!passed).then(|| diff::render_diff(&expected, &actual));
        let case_name = if case.flavor.eq_ignore_ascii_case("both") {
            format!("{} [{}]", case.name, self.flavor.as_str())
        } else {
            case.name.clone()
        };
        VerificationResult {
            case_name,
            property: case.property.clone(),
            flavor: self.flavor.as_str().to_string(),
            passed,
            expected,
            actual,
            diff,
        }
    }
}

/// Replay one case against a fresh in-memory console.
pub fn execute_case(case: &FixtureCase, flavor: Flavor) -> Result<Transcript, HarnessError> {
    let input = Cursor::new(case.stdin.as_bytes().to_vec());
    let mut console = Console::with_flavor(input, Vec::new(), flavor);
    let mut results = Vec::new();
    for call in &case.calls {
        if let Some(result) = execute_call(&mut console, call)? {
            results.push(result);
        }
    }
    let (_, stdout) = console.into_parts();
    Ok(Transcript {
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        results,
    })
}

/// Execute one call. Get calls yield their rendered result; put calls yield
/// `None`.
fn execute_call<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    call: &FixtureCall,
) -> Result<Option<String>, HarnessError> {
    let rendered = match call.function.as_str() {
        "getString" => render(console.read_string().map(|s| lossy(&s))),
        "getStringN" => {
            let capacity = usize::try_from(arg_u64(call)?).map_err(|_| bad_arg(call, "capacity"))?;
            let mut buf = vec![0u8; capacity];
            match console.read_string_into(&mut buf) {
                Ok(len) => lossy(&buf[..len]),
                Err(err @ ReadError::Truncated { .. }) => {
                    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
                    format!("err:{}:{}", err.class(), lossy(&buf[..len]))
                }
                Err(err) => format!("err:{}", err.class()),
            }
        }
        "getBool" => render(console.read_bool().map(|b| b.to_string())),
        "getInteger" => render(console.read_integer().map(|n| n.to_string())),
        "getFloat" => render(console.read_float().map(|f| f.to_string())),
        "putString" => {
            console.write_string(arg_str(call)?.as_bytes())?;
            return Ok(None);
        }
        "putBool" => {
            console.write_bool(arg_bool(call)?)?;
            return Ok(None);
        }
        "putInteger" => {
            let value = i32::try_from(arg_i64(call)?).map_err(|_| bad_arg(call, "i32 value"))?;
            console.write_integer(value)?;
            return Ok(None);
        }
        "putFloat" => {
            console.write_float(arg_f64(call)? as f32)?;
            return Ok(None);
        }
        "typedioFlush" => {
            console.flush()?;
            return Ok(None);
        }
        other => return Err(HarnessError::UnknownFunction(other.to_string())),
    };
    Ok(Some(rendered))
}

fn render(result: Result<String, ReadError>) -> String {
    match result {
        Ok(value) => value,
        Err(err) => format!("err:{}", err.class()),
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn bad_arg(call: &FixtureCall, expected: &str) -> HarnessError {
    HarnessError::BadArgument {
        function: call.function.clone(),
        message: format!("expected {expected} argument, got {:?}", call.arg),
    }
}

fn arg_str(call: &FixtureCall) -> Result<&str, HarnessError> {
    call.arg
        .as_ref()
        .and_then(|v| v.as_str())
        .ok_or_else(|| bad_arg(call, "string"))
}

fn arg_i64(call: &FixtureCall) -> Result<i64, HarnessError> {
    call.arg
        .as_ref()
        .and_then(|v| v.as_i64())
        .ok_or_else(|| bad_arg(call, "integer"))
}

fn arg_u64(call: &FixtureCall) -> Result<u64, HarnessError> {
    call.arg
        .as_ref()
        .and_then(|v| v.as_u64())
        .ok_or_else(|| bad_arg(call, "unsigned"))
}

fn arg_f64(call: &FixtureCall) -> Result<f64, HarnessError> {
    call.arg
        .as_ref()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| bad_arg(call, "number"))
}

/// Booleans accept JSON `true`/`false` or an integer (nonzero is true), as
/// the C `int` argument does.
fn arg_bool(call: &FixtureCall) -> Result<bool, HarnessError> {
    match call.arg.as_ref() {
        Some(serde_json::Value::Bool(b)) => Ok(*b),
        Some(v) => v
            .as_i64()
            .map(|n| n != 0)
            .ok_or_else(|| bad_arg(call, "boolean")),
        None => Err(bad_arg(call, "boolean")),
    }
}
