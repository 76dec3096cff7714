//! Integration tests for the full analysis pipeline
//!
//! These tests build projects roots on disk with tempfile and run
//! discovery, per-session analysis, and aggregation end-to-end.

use sessionlens_core::keywords::KeywordSets;
use sessionlens_core::types::TaskComplexity;
use sessionlens_core::{process_projects, Report};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write one session file under `<root>/<project>/<name>.jsonl`
fn write_session(root: &Path, project: &str, name: &str, lines: &[&str]) {
    let dir = root.join(project);
    fs::create_dir_all(&dir).unwrap();
    let body = lines
        .iter()
        .map(|l| format!("{}\n", l))
        .collect::<String>();
    fs::write(dir.join(format!("{}.jsonl", name)), body).unwrap();
}

#[test]
fn test_end_to_end_single_session() {
    let root = TempDir::new().unwrap();
    write_session(
        root.path(),
        "demo",
        "session-1",
        &[
            r#"{"type":"summary","summary":"Fix the login bug"}"#,
            r#"{"message":{"content":"Called test-agent, issue resolved ✅"}}"#,
            r#"{"tool":"search"}"#,
        ],
    );

    let keywords = KeywordSets::default();
    let report = process_projects(root.path(), &keywords).unwrap();

    assert_eq!(report.total_sessions, 1);
    assert_eq!(report.patterns["debugging"], vec!["Fix the login bug"]);
    assert_eq!(report.agent_usage["test-agent"], 1);
    assert_eq!(report.tool_usage["search"], 1);
    assert!(report.error_patterns.is_empty());

    // score = 2*1 agents + 1 tool + 0 errors + 3/10 = 3 -> simple
    assert_eq!(
        report.complexity_distribution[&TaskComplexity::Simple],
        1
    );
    assert_eq!(report.success_rate, 100.0);

    // Data size matches the bytes written
    let expected_size = fs::metadata(root.path().join("demo/session-1.jsonl"))
        .unwrap()
        .len();
    assert_eq!(report.total_data_size, expected_size);
}

#[test]
fn test_multiple_sessions_aggregate() {
    let root = TempDir::new().unwrap();
    write_session(
        root.path(),
        "proj-a",
        "s1",
        &[
            r#"{"message":{"content":"review-agent working on the api endpoint"}}"#,
            r#"{"tool":"edit"}"#,
            r#"{"tool":"edit"}"#,
        ],
    );
    write_session(
        root.path(),
        "proj-b",
        "s2",
        &[
            r#"{"error":"TypeError: x"}"#,
            r#"{"error":"TypeError: y"}"#,
            r#"{"error":"Connection reset"}"#,
        ],
    );

    let keywords = KeywordSets::default();
    let report = process_projects(root.path(), &keywords).unwrap();

    assert_eq!(report.total_sessions, 2);
    assert_eq!(report.agent_usage["review-agent"], 1);
    assert_eq!(report.tool_usage["edit"], 2);
    assert_eq!(report.error_patterns["TypeError"], 2);
    assert_eq!(report.error_patterns["NetworkError"], 1);

    // One session with a success indicator ("working") out of two
    assert_eq!(report.success_rate, 50.0);

    let sum: u64 = report.complexity_distribution.values().sum();
    assert_eq!(sum, report.total_sessions);

    // Most common error recommendation names TypeError
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("Most common error type: TypeError")));
}

#[test]
fn test_empty_root_yields_empty_report() {
    let root = TempDir::new().unwrap();

    let keywords = KeywordSets::default();
    let report = process_projects(root.path(), &keywords).unwrap();

    assert_eq!(report.total_sessions, 0);
    assert_eq!(report.total_data_size, 0);
    assert_eq!(report.success_rate, 0.0);
    assert!(report.recommendations.is_empty());
    assert!(report.complexity_distribution.is_empty());
}

#[test]
fn test_missing_root_propagates() {
    let keywords = KeywordSets::default();
    let result = process_projects(Path::new("/nonexistent/sessionlens"), &keywords);
    assert!(result.is_err());
}

#[test]
fn test_report_round_trip() {
    let root = TempDir::new().unwrap();
    write_session(
        root.path(),
        "demo",
        "s1",
        &[
            r#"{"type":"summary","summary":"Implement search api"}"#,
            r#"{"message":{"content":"build-agent completed the task"}}"#,
            r#"{"tool":"bash"}"#,
            r#"{"error":"SyntaxError: oops"}"#,
        ],
    );

    let keywords = KeywordSets::default();
    let report = process_projects(root.path(), &keywords).unwrap();

    let json = serde_json::to_string_pretty(&report).unwrap();
    let reloaded: Report = serde_json::from_str(&json).unwrap();

    // Structural equality on everything except the generation timestamp
    assert_eq!(reloaded.total_sessions, report.total_sessions);
    assert_eq!(reloaded.total_data_size, report.total_data_size);
    assert_eq!(reloaded.patterns, report.patterns);
    assert_eq!(reloaded.agent_usage, report.agent_usage);
    assert_eq!(reloaded.tool_usage, report.tool_usage);
    assert_eq!(reloaded.error_patterns, report.error_patterns);
    assert_eq!(
        reloaded.complexity_distribution,
        report.complexity_distribution
    );
    assert_eq!(reloaded.success_rate, report.success_rate);
    assert_eq!(reloaded.recommendations, report.recommendations);
    assert_eq!(
        reloaded.metadata.processor_version,
        report.metadata.processor_version
    );
    assert_eq!(
        reloaded.metadata.projects_root,
        report.metadata.projects_root
    );
}
