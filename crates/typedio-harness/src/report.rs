//! Report generation for conformance results.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::verify::VerificationSummary;

/// A conformance report for one fixture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Flavors tested (`runtime`, `inline`, or both joined by `+`).
    pub flavor: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Fixture file the results came from.
    pub fixture: String,
    /// SHA-256 of the fixture bytes, lowercase hex.
    pub fixture_sha256: String,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Flavor: {}\n", self.flavor));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Fixture: {}\n", self.fixture));
        out.push_str(&format!("- Fixture SHA-256: {}\n", self.fixture_sha256));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Property | Status |\n");
        out.push_str("|------|----------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("| {} | {} | {} |\n", r.case_name, r.property, status));
        }

        let failures: Vec<_> = self.summary.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for r in failures {
                out.push_str(&format!("\n### {}\n\n```diff\n", r.case_name));
                out.push_str(r.diff.as_deref().unwrap_or(""));
                out.push_str("```\n");
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

/// SHA-256 of `data` as lowercase hex.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::VerificationResult;

    fn report(results: Vec<VerificationResult>) -> ConformanceReport {
        ConformanceReport {
            title: "typed I/O conformance".into(),
            flavor: "runtime".into(),
            timestamp: "2026-10-01T00:00:00Z".into(),
            fixture: "typed_io.v1.json".into(),
            fixture_sha256: sha256_hex(b""),
            summary: VerificationSummary::from_results(results),
        }
    }

    #[test]
    fn sha256_known_vectors() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn markdown_lists_cases_and_failures() {
        let md = report(vec![
            VerificationResult {
                case_name: "ok_case".into(),
                property: "round trip".into(),
                flavor: "runtime".into(),
                passed: true,
                expected: String::new(),
                actual: String::new(),
                diff: None,
            },
            VerificationResult {
                case_name: "bad_case".into(),
                property: "six digits".into(),
                flavor: "runtime".into(),
                passed: false,
                expected: "stdout: \"1.000000\"\n".into(),
                actual: "stdout: \"1\"\n".into(),
                diff: Some("-a\n+b\n".into()),
            },
        ])
        .to_markdown();
        assert!(md.contains("| ok_case | round trip | PASS |"));
        assert!(md.contains("| bad_case | six digits | FAIL |"));
        assert!(md.contains("- Failed: 1"));
        assert!(md.contains("### bad_case\n\n```diff\n-a\n+b\n```"));
    }

    #[test]
    fn json_round_trips() {
        let json = report(Vec::new()).to_json();
        let back: ConformanceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.summary.total, 0);
        assert_eq!(back.fixture, "typed_io.v1.json");
    }
}
