//! CLI entrypoint for the typed console I/O conformance harness.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use typedio_core::Flavor;
use typedio_harness::report::sha256_hex;
use typedio_harness::structured_log::{self, LogEmitter, LogEntry, LogLevel, Outcome};
use typedio_harness::{
    ConformanceReport, FixtureSet, HarnessError, TestRunner, VerificationResult,
    VerificationSummary,
};

/// Conformance tooling for the typed console I/O runtime.
#[derive(Debug, Parser)]
#[command(name = "typedio-harness")]
#[command(about = "Conformance testing harness for the typed console I/O runtime")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a fixture file against the runtime.
    Verify {
        /// Fixture JSON file.
        #[arg(long)]
        fixture: PathBuf,
        /// Flavor to run: `runtime`, `inline` or `both`.
        #[arg(long, default_value = "both")]
        flavor: String,
        /// Output report path (`.json` for JSON, markdown otherwise).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Validate a structured JSONL log against the schema.
    ValidateLog {
        /// JSONL log path.
        #[arg(long)]
        log: PathBuf,
    },
}

fn parse_flavors(raw: &str) -> Result<Vec<Flavor>, HarnessError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "runtime" => Ok(vec![Flavor::Runtime]),
        "inline" => Ok(vec![Flavor::Inline]),
        "both" => Ok(vec![Flavor::Runtime, Flavor::Inline]),
        _ => Err(HarnessError::UnknownFlavor(raw.to_string())),
    }
}

fn log_results(
    path: &Path,
    fixture: &Path,
    results: &[VerificationResult],
) -> Result<(), HarnessError> {
    let mut emitter = LogEmitter::to_file(path, "verify")?;
    emitter.emit_entry(
        LogEntry::new("", LogLevel::Info, "verify_start")
            .with_details(serde_json::json!({ "fixture": fixture.display().to_string() })),
    )?;
    for r in results {
        let (level, outcome) = if r.passed {
            (LogLevel::Info, Outcome::Pass)
        } else {
            (LogLevel::Error, Outcome::Fail)
        };
        let mut entry = LogEntry::new("", level, "case_result")
            .with_function(&r.case_name)
            .with_flavor(&r.flavor)
            .with_outcome(outcome);
        if let Some(diff) = &r.diff {
            entry = entry.with_details(serde_json::json!({ "diff": diff }));
        }
        emitter.emit_entry(entry)?;
    }
    emitter.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            flavor,
            report,
            log,
            timestamp,
        } => {
            let flavors = parse_flavors(&flavor)?;
            eprintln!("Verifying against {}", fixture.display());
            let bytes = std::fs::read(&fixture)?;
            let set = FixtureSet::from_json(&String::from_utf8_lossy(&bytes))?;
            if set.cases.is_empty() {
                return Err(HarnessError::NoFixtures(fixture.display().to_string()).into());
            }

            let mut results = Vec::new();
            for flavor in &flavors {
                results.extend(TestRunner::new(*flavor).run(&set));
            }

            if let Some(path) = &log {
                log_results(path, &fixture, &results)?;
            }

            let summary = VerificationSummary::from_results(results);
            let conformance = ConformanceReport {
                title: format!("typedio conformance: {}", set.family),
                flavor: flavors
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join("+"),
                timestamp: timestamp.unwrap_or_else(structured_log::now_utc),
                fixture: fixture.display().to_string(),
                fixture_sha256: sha256_hex(&bytes),
                summary,
            };

            if let Some(path) = &report {
                let body = if path.extension().and_then(|s| s.to_str()) == Some("json") {
                    conformance.to_json()
                } else {
                    conformance.to_markdown()
                };
                std::fs::write(path, body)?;
                eprintln!("Report written to {}", path.display());
            }

            let summary = &conformance.summary;
            eprintln!(
                "Results: {} passed, {} failed, {} total",
                summary.passed, summary.failed, summary.total
            );
            for r in summary.results.iter().filter(|r| !r.passed) {
                eprintln!("FAIL {}", r.case_name);
                if let Some(diff) = &r.diff {
                    eprintln!("{diff}");
                }
            }
            if !summary.all_passed() {
                return Err(format!("{} fixture case(s) failed", summary.failed).into());
            }
        }
        Command::ValidateLog { log } => {
            let (lines, errors) = structured_log::validate_log_file(&log)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!(
                "Validated {lines} line(s) in {}: {} error(s)",
                log.display(),
                errors.len()
            );
            if !errors.is_empty() {
                return Err(format!("{} schema violation(s)", errors.len()).into());
            }
        }
    }

    Ok(())
}
