//! Session file discovery
//!
//! Session logs live in per-project subdirectories of the projects root:
//! `<root>/<project>/<session>.jsonl`. Discovery returns paths together
//! with byte sizes so the aggregator can report the total data size without
//! re-reading files.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// A discovered session log file.
#[derive(Debug, Clone)]
pub struct SessionFile {
    /// Path to the `.jsonl` file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

/// Discover all session files under the projects root.
///
/// A missing or unreadable root is an error that propagates to the caller;
/// everything below discovery is handled with per-line resilience instead.
pub fn discover_sessions(root: &Path) -> Result<Vec<SessionFile>> {
    // Surface root access failures here; a bare glob over a missing
    // directory would silently yield an empty set.
    std::fs::metadata(root)?;

    let pattern = root.join("*/*.jsonl");
    let pattern = pattern.to_string_lossy();

    let mut files = Vec::new();
    for entry in glob::glob(&pattern).map_err(|e| {
        crate::error::Error::Config(format!("invalid glob pattern {}: {}", pattern, e))
    })? {
        let path = match entry {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        let size = match std::fs::metadata(&path) {
            Ok(m) => m.len(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };

        files.push(SessionFile { path, size });
    }

    // Stable processing order across platforms
    files.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_finds_jsonl_in_subdirs() {
        let root = TempDir::new().unwrap();
        let project = root.path().join("my-project");
        fs::create_dir(&project).unwrap();
        fs::write(project.join("session-1.jsonl"), "{}\n").unwrap();
        fs::write(project.join("notes.txt"), "ignored").unwrap();
        // Files directly under the root are not session logs
        fs::write(root.path().join("stray.jsonl"), "{}\n").unwrap();

        let files = discover_sessions(root.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("my-project/session-1.jsonl"));
        assert_eq!(files[0].size, 3);
    }

    #[test]
    fn test_discover_missing_root_is_error() {
        let root = PathBuf::from("/nonexistent/sessionlens-root");
        assert!(discover_sessions(&root).is_err());
    }

    #[test]
    fn test_discover_order_is_stable() {
        let root = TempDir::new().unwrap();
        for project in ["b-proj", "a-proj"] {
            let dir = root.path().join(project);
            fs::create_dir(&dir).unwrap();
            fs::write(dir.join("s.jsonl"), "{}\n").unwrap();
        }

        let files = discover_sessions(root.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].path.starts_with(root.path().join("a-proj")));
    }
}
