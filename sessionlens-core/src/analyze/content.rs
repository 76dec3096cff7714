//! Keyword-based content and summary analysis.
//!
//! All matching is case-insensitive substring matching against a lower-cased
//! copy of the text.

use crate::keywords::KeywordSets;
use crate::types::{RunAccumulator, SessionInsight};
use regex::Regex;
use std::sync::LazyLock;

/// Agent mentions look like `test-agent`, `review-agent`, etc.
static AGENT_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+-agent").expect("agent mention regex is valid"));

/// Success indicators keep only the first 100 characters of the content.
const SUCCESS_SNIPPET_CHARS: usize = 100;

/// Analyze one record's message content, enriching the session insight.
///
/// Detects agent mentions (counted lower-cased), success indicators
/// (truncated content snippets), and topical pattern tags. Multiple tags may
/// fire for one record; tags are appended without deduplication.
pub fn analyze_content(content: &str, keywords: &KeywordSets, insight: &mut SessionInsight) {
    if content.is_empty() {
        return;
    }

    let lower = content.to_lowercase();

    for mention in AGENT_MENTION.find_iter(&lower) {
        *insight
            .agents_used
            .entry(mention.as_str().to_string())
            .or_insert(0) += 1;
    }

    if keywords.success.iter().any(|k| lower.contains(k.as_str())) {
        insight
            .success_indicators
            .push(content.chars().take(SUCCESS_SNIPPET_CHARS).collect());
    }

    if lower.contains("error") && lower.contains("fix") {
        insight.patterns_detected.push("error_fixing".to_string());
    }
    if lower.contains("performance") {
        insight
            .patterns_detected
            .push("performance_optimization".to_string());
    }
    if lower.contains("security") {
        insight.patterns_detected.push("security_concern".to_string());
    }
}

/// Analyze one task summary, recording category matches in the run-wide
/// pattern store.
///
/// A summary may match several categories; each match appends the summary
/// verbatim to that category's list.
pub fn analyze_summary(summary: &str, keywords: &KeywordSets, acc: &mut RunAccumulator) {
    if summary.is_empty() {
        return;
    }

    let lower = summary.to_lowercase();
    for (category, words) in &keywords.categories {
        if words.iter().any(|w| lower.contains(w.as_str())) {
            acc.patterns
                .entry(category.clone())
                .or_default()
                .push(summary.to_string());
        }
    }
}
