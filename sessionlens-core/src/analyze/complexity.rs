//! Task-complexity estimation.
//!
//! A pure scoring function over a session's aggregate counters. Distinct
//! agents weigh double, errors triple, and every ten messages add a point.

use crate::types::{SessionInsight, TaskComplexity};

/// Compute the raw complexity score from session counters.
pub fn complexity_score(
    distinct_agents: usize,
    distinct_tools: usize,
    error_count: usize,
    total_messages: u64,
) -> u64 {
    2 * distinct_agents as u64
        + distinct_tools as u64
        + 3 * error_count as u64
        + total_messages / 10
}

/// Map a raw score to its ordinal label.
pub fn label_for_score(score: u64) -> TaskComplexity {
    if score < 5 {
        TaskComplexity::Simple
    } else if score < 15 {
        TaskComplexity::Medium
    } else if score < 30 {
        TaskComplexity::Complex
    } else {
        TaskComplexity::VeryComplex
    }
}

/// Estimate a session's complexity label from its counters.
pub fn estimate(insight: &SessionInsight) -> TaskComplexity {
    label_for_score(complexity_score(
        insight.agents_used.len(),
        insight.tools_used.len(),
        insight.errors_encountered.len(),
        insight.total_messages,
    ))
}
