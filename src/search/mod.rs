//! Subdirectory search.
//!
//! Enumerates the immediate child directories of a base directory and
//! filters them by a case-insensitive substring match on the folder name.
//! There is no recursion and no index; every search re-reads the directory.

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// A single folder search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    /// Absolute path of the folder.
    pub path: PathBuf,
    /// Folder name (lossy UTF-8 form for non-UTF-8 names).
    pub name: String,
    /// Last-modified Unix timestamp, or -1 if unavailable.
    pub modified: i64,
}

/// Search the immediate subdirectories of `root` for names containing
/// `query` (case-insensitive). An empty query matches every subdirectory.
///
/// Returns an empty vec when `root` does not exist, is not a directory,
/// or has no matching children; the caller is responsible for telling the
/// user about empty results. Results are sorted by name, case-insensitively,
/// so result order is stable across platforms.
pub fn search_folders(root: &Path, query: &str) -> Vec<FolderEntry> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Cannot list {:?}: {}", root, e);
            return Vec::new();
        }
    };

    let query_lower = query.to_lowercase();
    let mut results: Vec<FolderEntry> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !matches_query(&name, &query_lower) {
                return None;
            }
            Some(FolderEntry {
                modified: modified_timestamp(&entry),
                path: entry.path(),
                name,
            })
        })
        .collect();

    results.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    results
}

/// Check whether a folder name contains the (already lowercased) query.
fn matches_query(name: &str, query_lower: &str) -> bool {
    query_lower.is_empty() || name.to_lowercase().contains(query_lower)
}

/// Last-modified time of a directory entry as a Unix timestamp.
fn modified_timestamp(entry: &std::fs::DirEntry) -> i64 {
    entry
        .metadata()
        .ok()
        .and_then(|meta| meta.modified().ok())
        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map(|dur| dur.as_secs() as i64)
        .unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn setup_base() -> tempfile::TempDir {
        let base = tempdir().unwrap();
        fs::create_dir(base.path().join("Alpha")).unwrap();
        fs::create_dir(base.path().join("beta")).unwrap();
        fs::create_dir(base.path().join("gamma-old")).unwrap();
        fs::write(base.path().join("not-a-folder.txt"), "x").unwrap();
        base
    }

    fn names(results: &[FolderEntry]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_all_subdirectories() {
        let base = setup_base();
        let results = search_folders(base.path(), "");
        assert_eq!(names(&results), vec!["Alpha", "beta", "gamma-old"]);
    }

    #[test]
    fn test_files_are_excluded() {
        let base = setup_base();
        let results = search_folders(base.path(), "txt");
        assert!(results.is_empty());
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let base = setup_base();
        // "a" matches all three: Alpha (case-insensitive), beta, gamma-old
        let results = search_folders(base.path(), "a");
        assert_eq!(names(&results), vec!["Alpha", "beta", "gamma-old"]);

        let results = search_folders(base.path(), "ALPHA");
        assert_eq!(names(&results), vec!["Alpha"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let base = setup_base();
        let results = search_folders(base.path(), "Z");
        assert!(results.is_empty());
    }

    #[test]
    fn test_nonexistent_root_returns_empty() {
        let results = search_folders(Path::new("/nonexistent/fop/test/root"), "");
        assert!(results.is_empty());
    }

    #[test]
    fn test_root_that_is_a_file_returns_empty() {
        let base = setup_base();
        let file = base.path().join("not-a-folder.txt");
        let results = search_folders(&file, "");
        assert!(results.is_empty());
    }

    #[test]
    fn test_results_are_sorted_by_name() {
        let base = tempdir().unwrap();
        for name in ["zulu", "Echo", "alpha", "Bravo"] {
            fs::create_dir(base.path().join(name)).unwrap();
        }
        let results = search_folders(base.path(), "");
        assert_eq!(names(&results), vec!["alpha", "Bravo", "Echo", "zulu"]);
    }

    #[test]
    fn test_entries_are_immediate_children_only() {
        let base = setup_base();
        fs::create_dir(base.path().join("Alpha").join("nested-alpha")).unwrap();
        let results = search_folders(base.path(), "nested");
        assert!(results.is_empty());
    }

    #[test]
    fn test_paths_point_at_existing_directories() {
        let base = setup_base();
        for entry in search_folders(base.path(), "") {
            assert!(entry.path.is_dir());
            assert_eq!(entry.path.parent(), Some(base.path()));
        }
    }

    #[test]
    fn test_modified_timestamp_is_populated() {
        let base = setup_base();
        let results = search_folders(base.path(), "Alpha");
        assert_eq!(results.len(), 1);
        assert!(results[0].modified > 0);
    }
}
