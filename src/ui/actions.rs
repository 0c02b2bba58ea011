//! Folder actions for the search UI.
//!
//! Provides the operations that can be performed on a selected search
//! result:
//! - Copy the folder's root-relative name to the clipboard
//! - Open the folder in the OS file manager

use std::path::{Path, MAIN_SEPARATOR};

use crate::{FopError, Result};

/// Strip the base-directory prefix (plus trailing separator) from a path.
///
/// Only an exact string prefix is stripped; there is no normalization of
/// separators or case. A path that does not start with `root` followed by
/// the platform separator is returned unchanged, so `/tmp/baseball` is not
/// mangled by a root of `/tmp/base`.
pub fn relative_name(path: &str, root: &str) -> String {
    let prefix = format!("{}{}", root, MAIN_SEPARATOR);
    path.strip_prefix(&prefix).unwrap_or(path).to_string()
}

/// Copy the folder's name, relative to the base directory, to the system
/// clipboard.
///
/// The clipboard receives plain text and prior contents are replaced.
///
/// # Errors
/// Returns `FopError::Clipboard` if the clipboard cannot be accessed or
/// written.
pub fn copy_folder_name(path: &Path, root: &Path) -> Result<()> {
    let name = relative_name(&path.to_string_lossy(), &root.to_string_lossy());
    tracing::info!("Copying folder name to clipboard: {}", name);

    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| FopError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(name)
        .map_err(|e| FopError::Clipboard(format!("Failed to set clipboard text: {}", e)))
}

/// Open a folder in the OS file manager.
///
/// # Errors
/// Returns `FopError::Open` if the folder no longer exists or the OS has
/// no handler for it.
pub fn open_folder(path: &Path) -> Result<()> {
    tracing::info!("Opening folder: {:?}", path);

    opener::open(path).map_err(|e| FopError::Open(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn join(root: &str, name: &str) -> String {
        format!("{}{}{}", root, MAIN_SEPARATOR, name)
    }

    #[test]
    fn test_relative_name_strips_root_prefix() {
        let root = if cfg!(windows) { r"C:\base" } else { "/tmp/base" };
        assert_eq!(relative_name(&join(root, "Foo"), root), "Foo");
    }

    #[test]
    fn test_relative_name_keeps_unrelated_path() {
        let path = if cfg!(windows) { r"D:\other\Foo" } else { "/other/Foo" };
        let root = if cfg!(windows) { r"C:\base" } else { "/tmp/base" };
        assert_eq!(relative_name(path, root), path);
    }

    #[test]
    fn test_relative_name_requires_separator_after_root() {
        // A sibling whose name merely extends the root is not under it.
        let path = if cfg!(windows) { r"C:\baseball" } else { "/tmp/baseball" };
        let root = if cfg!(windows) { r"C:\base" } else { "/tmp/base" };
        assert_eq!(relative_name(path, root), path);
    }

    #[test]
    fn test_relative_name_strips_only_first_level_prefix() {
        let root = if cfg!(windows) { r"C:\base" } else { "/tmp/base" };
        let nested = join(&join(root, "Foo"), "Bar");
        let expected = join("Foo", "Bar");
        assert_eq!(relative_name(&nested, root), expected);
    }

    #[test]
    fn test_open_nonexistent_folder() {
        let path = PathBuf::from("/nonexistent/fop/folder");
        // opener may or may not fail on a missing path depending on the
        // platform handler; this only checks that we don't panic.
        let _ = open_folder(&path);
    }

    // Clipboard tests are omitted: they need a display/clipboard manager
    // that is not available in CI.
}
