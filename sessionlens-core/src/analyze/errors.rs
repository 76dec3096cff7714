//! Error detection and classification.
//!
//! Both detection and classification operate on the record's compact JSON
//! serialization. This is a deliberate heuristic carried over from the
//! original tool: a record counts as an error if it has an `error` key or
//! if the string `Error` (case-sensitive) appears anywhere in its textual
//! form - which can false-positive on unrelated text such as a filename.

use crate::analyze::record::LogRecord;

/// Fixed error categories, in classification priority order.
///
/// The declaration order doubles as the tie-break order when reporting the
/// most frequent category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    TypeError,
    SyntaxError,
    ImportError,
    NetworkError,
    Other,
}

impl ErrorCategory {
    /// All categories, in classification priority order.
    pub const ALL: [ErrorCategory; 5] = [
        ErrorCategory::TypeError,
        ErrorCategory::SyntaxError,
        ErrorCategory::ImportError,
        ErrorCategory::NetworkError,
        ErrorCategory::Other,
    ];

    /// Stable string form used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::TypeError => "TypeError",
            ErrorCategory::SyntaxError => "SyntaxError",
            ErrorCategory::ImportError => "ImportError",
            ErrorCategory::NetworkError => "NetworkError",
            ErrorCategory::Other => "Other",
        }
    }
}

/// True if the record looks like it represents an error.
pub fn looks_like_error(record: &LogRecord) -> bool {
    record.has_error_field() || record.to_compact_json().contains("Error")
}

/// Classify an error record, first match wins.
pub fn classify_error(record: &LogRecord) -> ErrorCategory {
    let text = record.to_compact_json();

    if text.contains("TypeError") {
        ErrorCategory::TypeError
    } else if text.contains("SyntaxError") {
        ErrorCategory::SyntaxError
    } else if text.contains("ImportError") || text.contains("ModuleNotFound") {
        ErrorCategory::ImportError
    } else if text.contains("Network") || text.contains("Connection") {
        ErrorCategory::NetworkError
    } else {
        ErrorCategory::Other
    }
}
