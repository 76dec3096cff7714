//! Corpus-wide aggregation and recommendation generation.
//!
//! The [`Aggregator`] folds one [`SessionInsight`] at a time into running
//! corpus totals, then combines them with the run-wide accumulator state
//! into the final [`Report`]. [`process_projects`] wires the full pipeline:
//! discovery, per-session analysis, aggregation.

use crate::analyze;
use crate::discover;
use crate::error::Result;
use crate::keywords::KeywordSets;
use crate::types::{Report, ReportMetadata, RunAccumulator, SessionInsight, TaskComplexity};
use chrono::Utc;
use std::collections::HashMap;
use std::path::Path;

/// Session count above which rule 3 recommends decomposing tasks,
/// as a fraction of all sessions (strict comparison).
const COMPLEX_SHARE_THRESHOLD: f64 = 0.3;

/// Success rate below which rule 4 recommends reviewing failures.
const LOW_SUCCESS_RATE: f64 = 70.0;

/// Folds per-session insights into corpus-wide totals.
#[derive(Debug, Default)]
pub struct Aggregator {
    total_sessions: u64,
    total_data_size: u64,
    agent_usage: HashMap<String, u64>,
    tool_usage: HashMap<String, u64>,
    complexity_distribution: HashMap<TaskComplexity, u64>,
    successful_sessions: u64,
}

impl Aggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one session's insight into the corpus totals.
    ///
    /// `file_size` is the session file's size in bytes, supplied by the
    /// discovery layer.
    pub fn fold(&mut self, insight: &SessionInsight, file_size: u64) {
        self.total_sessions += 1;
        self.total_data_size += file_size;

        for (agent, count) in &insight.agents_used {
            *self.agent_usage.entry(agent.clone()).or_insert(0) += count;
        }
        for (tool, count) in &insight.tools_used {
            *self.tool_usage.entry(tool.clone()).or_insert(0) += count;
        }

        *self
            .complexity_distribution
            .entry(insight.task_complexity)
            .or_insert(0) += 1;

        // A session counts toward the success rate if it produced at least
        // one non-empty success indicator
        if insight.success_indicators.iter().any(|s| !s.is_empty()) {
            self.successful_sessions += 1;
        }
    }

    /// Consume the aggregator and build the final report.
    pub fn finish(self, acc: RunAccumulator, projects_root: &Path) -> Report {
        let success_rate = if self.total_sessions > 0 {
            self.successful_sessions as f64 / self.total_sessions as f64 * 100.0
        } else {
            0.0
        };

        let recommendations = generate_recommendations(&self, &acc, success_rate);
        let error_patterns = acc.error_patterns();

        Report {
            total_sessions: self.total_sessions,
            total_data_size: self.total_data_size,
            patterns: acc.patterns,
            agent_usage: self.agent_usage,
            tool_usage: self.tool_usage,
            error_patterns,
            complexity_distribution: self.complexity_distribution,
            success_rate,
            recommendations,
            metadata: ReportMetadata {
                processed_at: Utc::now(),
                processor_version: env!("CARGO_PKG_VERSION").to_string(),
                projects_root: projects_root.display().to_string(),
            },
        }
    }
}

/// Apply the fixed, ordered recommendation rules to the aggregate state.
///
/// Each rule either appends one recommendation or is skipped; the output
/// order is the rule order.
fn generate_recommendations(
    agg: &Aggregator,
    acc: &RunAccumulator,
    success_rate: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let Some((agent, count)) = most_frequent(&agg.agent_usage) {
        recommendations.push(format!(
            "Most used agent: {} ({} times) - Consider optimizing this workflow",
            agent, count
        ));
    }

    if let Some((category, _)) = acc.most_common_error() {
        recommendations.push(format!(
            "Most common error type: {} - Implement preventive measures",
            category.as_str()
        ));
    }

    let complex_sessions = agg
        .complexity_distribution
        .get(&TaskComplexity::Complex)
        .copied()
        .unwrap_or(0)
        + agg
            .complexity_distribution
            .get(&TaskComplexity::VeryComplex)
            .copied()
            .unwrap_or(0);
    if complex_sessions as f64 > COMPLEX_SHARE_THRESHOLD * agg.total_sessions as f64 {
        recommendations.push(
            "High proportion of complex tasks - Consider breaking down into smaller tasks"
                .to_string(),
        );
    }

    if success_rate < LOW_SUCCESS_RATE {
        recommendations.push(format!(
            "Success rate is {:.1}% - Review failure patterns",
            success_rate
        ));
    }

    if let Some((tool, _)) = most_frequent(&agg.tool_usage) {
        recommendations.push(format!(
            "Most used tool: {} - Ensure optimal usage patterns",
            tool
        ));
    }

    recommendations
}

/// The highest-count entry; ties break toward the lexicographically
/// smaller name for determinism.
fn most_frequent(usage: &HashMap<String, u64>) -> Option<(&str, u64)> {
    usage
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(name, count)| (name.as_str(), *count))
}

/// Run the full pipeline over a projects root and build the report.
///
/// Discovers `<root>/*/*.jsonl`, analyzes each file in order, and folds
/// the results. Discovery failures propagate; per-line problems inside a
/// session are handled by the analyzer.
pub fn process_projects(root: &Path, keywords: &KeywordSets) -> Result<Report> {
    let files = discover::discover_sessions(root)?;
    tracing::info!(root = %root.display(), files = files.len(), "starting analysis");

    let mut acc = RunAccumulator::new();
    let mut agg = Aggregator::new();

    for file in &files {
        let insight = analyze::analyze_session(&file.path, keywords, &mut acc)?;
        tracing::debug!(
            session = %insight.session_id,
            messages = insight.total_messages,
            complexity = insight.task_complexity.as_str(),
            "session analyzed"
        );
        agg.fold(&insight, file.size);
    }

    Ok(agg.finish(acc, root))
}
