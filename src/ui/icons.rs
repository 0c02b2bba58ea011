//! Action-button icons with textual fallback.
//!
//! Icons are optional assets looked up at runtime next to the executable
//! (then in the working directory). A missing or unreadable icon degrades
//! to a plain labeled button with the same tooltip; it never aborts the
//! application.

use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui::{self, load::Bytes, ImageSource};

/// Icon edge length in points for action buttons.
const ICON_SIZE: f32 = 24.0;

/// Try to load an icon asset by file name (e.g. `"copy.png"`).
///
/// Returns `None` when the asset is absent, which callers map to a
/// text-button fallback.
pub fn load_action_icon(name: &str) -> Option<ImageSource<'static>> {
    let path = find_asset(name)?;
    match std::fs::read(&path) {
        Ok(bytes) => Some(ImageSource::Bytes {
            uri: Cow::Owned(format!("bytes://{}", name)),
            bytes: Bytes::Shared(Arc::from(bytes.into_boxed_slice())),
        }),
        Err(e) => {
            tracing::warn!("Icon {:?} exists but could not be read: {}", path, e);
            None
        }
    }
}

/// Locate an asset under `assets/` next to the executable, falling back
/// to the working directory.
fn find_asset(name: &str) -> Option<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join("assets").join(name));
        }
    }
    candidates.push(PathBuf::from("assets").join(name));

    let found = candidates.into_iter().find(|p| p.is_file());
    if found.is_none() {
        tracing::debug!("Icon not found: {}. Using fallback button.", name);
    }
    found
}

/// Render an action button: an image button when the icon loaded, a plain
/// labeled button otherwise. Both carry the same tooltip.
pub fn action_button(
    ui: &mut egui::Ui,
    icon: Option<&ImageSource<'static>>,
    label: &str,
    tooltip: &str,
) -> egui::Response {
    let response = match icon {
        Some(source) => ui.add(egui::Button::image(
            egui::Image::new(source.clone()).fit_to_exact_size(egui::vec2(ICON_SIZE, ICON_SIZE)),
        )),
        None => ui.button(label),
    };
    response.on_hover_text(tooltip)
}
