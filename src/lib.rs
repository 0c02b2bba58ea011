//! FolderOpen (fop) - Search and open subfolders of a base directory.
//!
//! This library provides the core functionality for the fop desktop utility:
//! configuration persistence, subdirectory search, and the egui search UI
//! with copy/open folder actions.

pub mod config;
pub mod search;
pub mod ui;

use thiserror::Error;

/// Fop error types covering all failure modes.
#[derive(Error, Debug)]
pub enum FopError {
    /// Configuration errors (locating, reading, or writing the config file)
    #[error("Config error: {0}")]
    Config(String),

    /// Clipboard errors (accessing or writing the system clipboard)
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// OS open errors (no handler, path gone, handler failed)
    #[error("Failed to open folder: {0}")]
    Open(String),

    /// I/O errors (filesystem operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using FopError
pub type Result<T> = std::result::Result<T, FopError>;
