//! Human-readable summary rendering for the terminal.

use sessionlens_core::types::Report;

const RULE: &str = "============================================================";

/// Number of top entries to show for agent and tool usage.
const TOP_N: usize = 5;

/// Render the report as a plain-text summary.
pub fn render(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(RULE);
    out.push('\n');
    out.push_str("SESSION LOG ANALYSIS SUMMARY\n");
    out.push_str(RULE);
    out.push('\n');

    out.push_str(&format!(
        "\nTotal Sessions Analyzed: {}\n",
        report.total_sessions
    ));
    out.push_str(&format!(
        "Total Data Size: {:.2} MB\n",
        report.total_data_size as f64 / (1024.0 * 1024.0)
    ));
    out.push_str(&format!("Success Rate: {:.1}%\n", report.success_rate));

    out.push_str("\nAGENT USAGE:\n");
    for (name, count) in top_entries(&report.agent_usage) {
        out.push_str(&format!("  - {}: {} times\n", name, count));
    }

    out.push_str("\nTOOL USAGE:\n");
    for (name, count) in top_entries(&report.tool_usage) {
        out.push_str(&format!("  - {}: {} times\n", name, count));
    }

    out.push_str("\nCOMPLEXITY DISTRIBUTION:\n");
    let mut labels: Vec<_> = report.complexity_distribution.iter().collect();
    labels.sort_by_key(|(label, _)| **label);
    for (label, count) in labels {
        let percentage = if report.total_sessions > 0 {
            *count as f64 / report.total_sessions as f64 * 100.0
        } else {
            0.0
        };
        out.push_str(&format!(
            "  - {}: {} sessions ({:.1}%)\n",
            label.as_str(),
            count,
            percentage
        ));
    }

    out.push_str("\nERROR PATTERNS:\n");
    let mut errors: Vec<_> = report.error_patterns.iter().collect();
    errors.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (category, count) in errors {
        out.push_str(&format!("  - {}: {} occurrences\n", category, count));
    }

    out.push_str("\nRECOMMENDATIONS:\n");
    for (i, rec) in report.recommendations.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, rec));
    }

    out.push('\n');
    out.push_str(RULE);
    out.push('\n');

    out
}

/// Top entries by count, descending; ties break by name.
fn top_entries(usage: &std::collections::HashMap<String, u64>) -> Vec<(&str, u64)> {
    let mut entries: Vec<_> = usage.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(TOP_N);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use sessionlens_core::types::{ReportMetadata, TaskComplexity};
    use std::collections::HashMap;

    fn sample_report() -> Report {
        Report {
            total_sessions: 2,
            total_data_size: 3 * 1024 * 1024,
            patterns: HashMap::new(),
            agent_usage: HashMap::from([
                ("test-agent".to_string(), 4),
                ("review-agent".to_string(), 1),
            ]),
            tool_usage: HashMap::from([("search".to_string(), 2)]),
            error_patterns: HashMap::from([("TypeError".to_string(), 3)]),
            complexity_distribution: HashMap::from([
                (TaskComplexity::Simple, 1),
                (TaskComplexity::Medium, 1),
            ]),
            success_rate: 50.0,
            recommendations: vec!["Do less".to_string()],
            metadata: ReportMetadata {
                processed_at: chrono::Utc::now(),
                processor_version: "test".to_string(),
                projects_root: "/tmp".to_string(),
            },
        }
    }

    #[test]
    fn test_render_sections() {
        let text = render(&sample_report());

        assert!(text.contains("Total Sessions Analyzed: 2"));
        assert!(text.contains("Total Data Size: 3.00 MB"));
        assert!(text.contains("Success Rate: 50.0%"));
        assert!(text.contains("  - test-agent: 4 times"));
        assert!(text.contains("  - simple: 1 sessions (50.0%)"));
        assert!(text.contains("  - TypeError: 3 occurrences"));
        assert!(text.contains("  1. Do less"));
    }

    #[test]
    fn test_agents_sorted_by_count() {
        let text = render(&sample_report());
        let test_pos = text.find("test-agent").unwrap();
        let review_pos = text.find("review-agent").unwrap();
        assert!(test_pos < review_pos);
    }
}
