//! Domain types for session analysis and reporting.
//!
//! [`SessionInsight`] is the per-file extraction result, built in one pass
//! and consumed immediately by the aggregator. [`Report`] is the corpus-wide
//! result emitted once per run. [`RunAccumulator`] carries the cross-session
//! state (category patterns, error-category counts) that individual session
//! analyses contribute to; it is passed `&mut` through the pipeline rather
//! than living in ambient global state, so a run is testable in isolation.

use crate::analyze::errors::ErrorCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordinal task-complexity label derived from a session's counters.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskComplexity {
    #[default]
    Simple,
    Medium,
    Complex,
    VeryComplex,
}

impl TaskComplexity {
    /// Stable string form used in reports and display output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskComplexity::Simple => "simple",
            TaskComplexity::Medium => "medium",
            TaskComplexity::Complex => "complex",
            TaskComplexity::VeryComplex => "very_complex",
        }
    }
}

/// Extraction result for a single session log file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionInsight {
    /// Derived from the file's base name (not globally unique across roots)
    pub session_id: String,
    /// Count of successfully parsed records
    pub total_messages: u64,
    /// Extracted summary strings, in file order
    pub summaries: Vec<String>,
    /// Agent mention counts (lower-cased names)
    pub agents_used: HashMap<String, u64>,
    /// Tool usage counts
    pub tools_used: HashMap<String, u64>,
    /// Raw records flagged as errors
    pub errors_encountered: Vec<serde_json::Value>,
    /// Category tags detected in message content (duplicates allowed)
    pub patterns_detected: Vec<String>,
    /// Complexity label computed after the full pass
    pub task_complexity: TaskComplexity,
    /// First-100-character snippets of content with success keywords
    pub success_indicators: Vec<String>,
}

impl SessionInsight {
    /// Create a fresh insight for one session.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            ..Default::default()
        }
    }
}

/// Cross-session state accumulated over one run.
///
/// Session analyses write into this directly (summary category matches,
/// error-category counts); the aggregator reads it back when building the
/// final [`Report`]. Created fresh at the start of a run, discarded at the
/// end.
#[derive(Debug, Default)]
pub struct RunAccumulator {
    /// Category → summaries that matched that category's keywords
    pub patterns: HashMap<String, Vec<String>>,
    error_counts: [u64; ErrorCategory::ALL.len()],
}

impl RunAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified error occurrence.
    pub fn record_error(&mut self, category: ErrorCategory) {
        self.error_counts[category as usize] += 1;
    }

    /// Occurrence count for one category.
    pub fn error_count(&self, category: ErrorCategory) -> u64 {
        self.error_counts[category as usize]
    }

    /// True if any error has been recorded.
    pub fn has_errors(&self) -> bool {
        self.error_counts.iter().any(|&c| c > 0)
    }

    /// The most frequent error category, with its count.
    ///
    /// Ties break by classification order (TypeError first, Other last).
    pub fn most_common_error(&self) -> Option<(ErrorCategory, u64)> {
        let mut best: Option<(ErrorCategory, u64)> = None;
        for category in ErrorCategory::ALL {
            let count = self.error_count(category);
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((category, count));
            }
        }
        best
    }

    /// Error counts as a name → count map for the report.
    ///
    /// Only categories that actually occurred are included.
    pub fn error_patterns(&self) -> HashMap<String, u64> {
        ErrorCategory::ALL
            .into_iter()
            .filter(|c| self.error_count(*c) > 0)
            .map(|c| (c.as_str().to_string(), self.error_count(c)))
            .collect()
    }
}

/// Corpus-wide analysis report, serialized as the output document.
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    /// Number of session files analyzed
    pub total_sessions: u64,
    /// Combined size of analyzed files, in bytes
    pub total_data_size: u64,
    /// Task category → summaries matching that category
    pub patterns: HashMap<String, Vec<String>>,
    /// Agent name → total mention count
    pub agent_usage: HashMap<String, u64>,
    /// Tool name → total usage count
    pub tool_usage: HashMap<String, u64>,
    /// Error category → occurrence count
    pub error_patterns: HashMap<String, u64>,
    /// Complexity label → session count; sums to `total_sessions`
    pub complexity_distribution: HashMap<TaskComplexity, u64>,
    /// Percentage of sessions with at least one success indicator (0-100)
    pub success_rate: f64,
    /// Ordered recommendation strings
    pub recommendations: Vec<String>,
    /// Run metadata
    pub metadata: ReportMetadata,
}

/// Metadata attached to a generated report.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339)
    pub processed_at: DateTime<Utc>,
    /// Version of the processor that generated the report
    pub processor_version: String,
    /// Root directory the report was generated from
    pub projects_root: String,
}
