//! Search UI components for the fop desktop application.
//!
//! Provides the egui-based search window with keyboard navigation,
//! folder actions (copy name, open), and the settings menu.

pub mod actions;
pub mod app;
pub mod icons;
pub mod results;

pub use app::FolderSearchApp;
