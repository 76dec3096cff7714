//! # sessionlens-core
//!
//! Core library for sessionlens - a usage-insight extractor for AI coding
//! assistant session logs.
//!
//! This library provides:
//! - Best-effort JSONL record parsing for heterogeneous session logs
//! - Per-session analysis (agent/tool counters, error categories,
//!   task-complexity estimation)
//! - Corpus-wide aggregation with recommendation generation
//! - Configuration management and logging infrastructure
//!
//! ## Architecture
//!
//! Data flows through a single synchronous pass:
//! - **Discovery:** glob over `<projects root>/*/*.jsonl`
//! - **Analysis:** one [`SessionInsight`](types::SessionInsight) per file
//! - **Aggregation:** insights fold into one [`Report`](types::Report)
//!
//! ## Example
//!
//! ```rust,no_run
//! use sessionlens_core::{Config, process_projects};
//!
//! let config = Config::load().expect("failed to load config");
//! let report = process_projects(&config.projects_root(), &config.keywords)
//!     .expect("analysis failed");
//! println!("{} sessions analyzed", report.total_sessions);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use report::process_projects;
pub use types::*;

// Public modules
pub mod analyze;
pub mod config;
pub mod discover;
pub mod error;
pub mod keywords;
pub mod logging;
pub mod report;
pub mod types;
