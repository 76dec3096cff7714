//! Keyword tables driving the analysis heuristics.
//!
//! The tables live here (and in the config file) rather than in control
//! flow so they can be tuned without touching the analyzers. All matching
//! is done case-insensitively against lower-cased text, so keywords should
//! be written in lower case.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Keyword sets consulted during analysis.
///
/// Deserializable from the `[keywords]` section of the config file; missing
/// fields fall back to the built-in defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeywordSets {
    /// Content keywords that mark a record as a success indicator
    pub success: Vec<String>,
    /// Task category → summary keywords for that category
    pub categories: BTreeMap<String, Vec<String>>,
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self {
            success: strings(&["resolved", "fixed", "completed", "success", "working", "✅"]),
            categories: BTreeMap::from([
                (
                    "frontend".to_string(),
                    strings(&["ui", "react", "component", "style", "css"]),
                ),
                (
                    "backend".to_string(),
                    strings(&["api", "server", "endpoint", "database", "auth"]),
                ),
                (
                    "testing".to_string(),
                    strings(&["test", "spec", "coverage", "unit", "integration"]),
                ),
                (
                    "debugging".to_string(),
                    strings(&["fix", "error", "bug", "issue", "problem"]),
                ),
                (
                    "feature".to_string(),
                    strings(&["implement", "create", "add", "build", "develop"]),
                ),
                (
                    "refactor".to_string(),
                    strings(&["refactor", "optimize", "improve", "clean", "restructure"]),
                ),
            ]),
        }
    }
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let keywords = KeywordSets::default();
        assert_eq!(keywords.categories.len(), 6);
        assert!(keywords.success.contains(&"resolved".to_string()));
        assert!(keywords.categories["backend"].contains(&"api".to_string()));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let keywords: KeywordSets = toml::from_str(r#"success = ["shipped"]"#).unwrap();
        assert_eq!(keywords.success, vec!["shipped"]);
        // Categories untouched by the override keep their defaults
        assert_eq!(keywords.categories.len(), 6);
    }
}
