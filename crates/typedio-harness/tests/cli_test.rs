//! End-to-end tests for the `typedio-harness` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use typedio_harness::report::sha256_hex;

const TIMESTAMP: &str = "2026-10-01T00:00:00Z";

fn unique_tmp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be after UNIX_EPOCH")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}-{}-{nanos}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn checked_in_fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/typed_io.v1.json")
}

fn harness(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typedio-harness"))
        .args(args)
        .output()
        .expect("typedio-harness should execute")
}

fn write_fixture(dir: &Path, cases: &str) -> PathBuf {
    let path = dir.join("fixture.json");
    let body = format!(
        r#"{{"version":"v1","family":"typed_io","captured_at":"{TIMESTAMP}","cases":{cases}}}"#
    );
    std::fs::write(&path, body).expect("write fixture");
    path
}

fn s(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

#[test]
fn verify_writes_json_report_and_valid_log() {
    let dir = unique_tmp_dir("typedio-cli-json");
    let fixture = checked_in_fixture();
    let report = dir.join("report.json");
    let log = dir.join("run.jsonl");

    let output = harness(&[
        "verify",
        "--fixture",
        s(&fixture),
        "--flavor",
        "runtime",
        "--report",
        s(&report),
        "--log",
        s(&log),
        "--timestamp",
        TIMESTAMP,
    ]);
    assert!(
        output.status.success(),
        "verify should pass: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let body = std::fs::read_to_string(&report).expect("report written");
    let json: serde_json::Value = serde_json::from_str(&body).expect("report is JSON");
    assert_eq!(json["flavor"].as_str(), Some("runtime"));
    assert_eq!(json["timestamp"].as_str(), Some(TIMESTAMP));
    assert_eq!(json["summary"]["failed"].as_u64(), Some(0));
    assert!(json["summary"]["total"].as_u64().unwrap_or(0) > 0);
    let bytes = std::fs::read(&fixture).expect("read fixture");
    assert_eq!(
        json["fixture_sha256"].as_str(),
        Some(sha256_hex(&bytes).as_str())
    );

    let validated = harness(&["validate-log", "--log", s(&log)]);
    assert!(
        validated.status.success(),
        "log should validate: {}",
        String::from_utf8_lossy(&validated.stderr)
    );
    assert!(String::from_utf8_lossy(&validated.stderr).contains("0 error(s)"));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn verify_defaults_to_markdown_and_both_flavors() {
    let dir = unique_tmp_dir("typedio-cli-md");
    let report = dir.join("report.md");

    let output = harness(&[
        "verify",
        "--fixture",
        s(&checked_in_fixture()),
        "--report",
        s(&report),
        "--timestamp",
        TIMESTAMP,
    ]);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let md = std::fs::read_to_string(&report).expect("report written");
    assert!(md.starts_with("# typedio conformance: typed_io\n"));
    assert!(md.contains("- Flavor: runtime+inline\n"));
    assert!(md.contains(&format!("- Timestamp: {TIMESTAMP}\n")));
    assert!(md.contains("- Failed: 0\n"));
    assert!(!md.contains("## Failures"));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn failing_case_exits_non_zero_and_reports_diff() {
    let dir = unique_tmp_dir("typedio-cli-fail");
    let fixture = write_fixture(
        &dir,
        r#"[{"name":"wrong_width","flavor":"runtime",
             "calls":[{"function":"putFloat","arg":0.5}],
             "expected_stdout":"0.5"}]"#,
    );
    let report = dir.join("report.md");

    let output = harness(&[
        "verify",
        "--fixture",
        s(&fixture),
        "--flavor",
        "runtime",
        "--report",
        s(&report),
    ]);
    assert!(!output.status.success(), "a failing case must fail the run");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FAIL wrong_width"), "{stderr}");
    assert!(stderr.contains("1 fixture case(s) failed"), "{stderr}");

    let md = std::fs::read_to_string(&report).expect("report still written");
    assert!(md.contains("## Failures"));
    assert!(md.contains("+stdout: \"0.500000\""));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn unknown_flavor_is_rejected() {
    let output = harness(&[
        "verify",
        "--fixture",
        s(&checked_in_fixture()),
        "--flavor",
        "sideways",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("UnknownFlavor"), "{stderr}");
    assert!(stderr.contains("sideways"), "{stderr}");
}

#[test]
fn empty_fixture_is_rejected() {
    let dir = unique_tmp_dir("typedio-cli-empty");
    let fixture = write_fixture(&dir, "[]");

    let output = harness(&["verify", "--fixture", s(&fixture)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("NoFixtures"), "{stderr}");

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn validate_log_flags_schema_violations() {
    let dir = unique_tmp_dir("typedio-cli-log");
    let log = dir.join("bad.jsonl");
    std::fs::write(
        &log,
        "{\"timestamp\":\"2026-10-01T00:00:00Z\",\"trace_id\":\"t\",\"level\":\"loud\",\"event\":\"x\"}\nnot json\n",
    )
    .expect("write log");

    let output = harness(&["validate-log", "--log", s(&log)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid level: 'loud'"), "{stderr}");
    assert!(stderr.contains("invalid JSON"), "{stderr}");
    assert!(stderr.contains("schema violation(s)"), "{stderr}");

    let _ = std::fs::remove_dir_all(dir);
}
