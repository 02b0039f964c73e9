//! Output comparison and verification.

use serde::{Deserialize, Serialize};

/// Observable effect of one fixture case: stdout bytes plus one rendered
/// result per get call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub stdout: String,
    pub results: Vec<String>,
}

impl Transcript {
    /// Line-oriented rendering used for comparison and diffs.
    ///
    /// Stdout and results are escaped onto one line each so embedded
    /// newlines stay visible.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("stdout: {:?}\n", self.stdout);
        for (i, result) in self.results.iter().enumerate() {
            out.push_str(&format!("result[{i}]: {}\n", result.escape_debug()));
        }
        out
    }
}

/// Result of verifying a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Name of the test case.
    pub case_name: String,
    /// Behavior the case pins down.
    pub property: String,
    /// Flavor the case ran under.
    pub flavor: String,
    /// Whether the case passed.
    pub passed: bool,
    /// Expected transcript.
    pub expected: String,
    /// Transcript produced by the runtime.
    pub actual: String,
    /// Diff if the case failed.
    pub diff: Option<String>,
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total cases run.
    pub total: usize,
    /// Cases passed.
    pub passed: usize,
    /// Cases failed.
    pub failed: usize,
    /// Individual results.
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            total,
            passed,
            failed,
            results,
        }
    }

    /// Returns true if all cases passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
