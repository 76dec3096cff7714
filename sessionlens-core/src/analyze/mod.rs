//! Per-session analysis
//!
//! One session log file is analyzed in a single pass: each line is decoded
//! best-effort, then consulted for summaries, message content, tool usage,
//! and error signals. Line-level failures never abort the file - malformed
//! JSON is skipped silently, and any other per-line fault is reported
//! through tracing and skipped, leaving previously accumulated counters
//! intact.

pub mod complexity;
pub mod content;
pub mod errors;
pub mod record;

use crate::error::Result;
use crate::keywords::KeywordSets;
use crate::types::{RunAccumulator, SessionInsight};
use record::LogRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Analyze one session log file end-to-end.
///
/// Returns a fully populated [`SessionInsight`]; cross-session signals
/// (summary categories, error-category counts) are written into `acc`.
/// A file with zero parseable lines yields an insight with all-zero
/// counters and complexity `simple`.
///
/// Only the initial open can fail; per-line problems are recoverable.
pub fn analyze_session(
    path: &Path,
    keywords: &KeywordSets,
    acc: &mut RunAccumulator,
) -> Result<SessionInsight> {
    let session_id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    let mut insight = SessionInsight::new(session_id);

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    for (line_index, line_result) in reader.lines().enumerate() {
        let line = match line_result {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    line = line_index + 1,
                    error = %e,
                    "read error, skipping line"
                );
                continue;
            }
        };

        let record = match LogRecord::parse(&line) {
            Ok(Some(r)) => r,
            // Not valid JSON: skip silently
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    line = line_index + 1,
                    error = %e,
                    "unprocessable record, skipping line"
                );
                continue;
            }
        };

        insight.total_messages += 1;

        if record.record_type() == Some("summary") {
            let summary = record.summary().unwrap_or("");
            content::analyze_summary(summary, keywords, acc);
            insight.summaries.push(summary.to_string());
        }

        if let Some(text) = record.message_content() {
            content::analyze_content(text, keywords, &mut insight);
        }

        if let Some(tool) = record.tool() {
            *insight.tools_used.entry(tool.to_string()).or_insert(0) += 1;
        }

        if errors::looks_like_error(&record) {
            acc.record_error(errors::classify_error(&record));
            insight.errors_encountered.push(record.into_value());
        }
    }

    insight.task_complexity = complexity::estimate(&insight);

    Ok(insight)
}
