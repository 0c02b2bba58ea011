//! Search results list view.
//!
//! Renders the matched folders with virtual scrolling and reports click
//! and double-click interactions back to the application.

use eframe::egui::{self, ScrollArea, Sense};

use crate::search::FolderEntry;

/// Row interactions reported by a single frame of the results list.
#[derive(Debug, Default, Clone, Copy)]
pub struct RowInteraction {
    /// Row that was clicked (selection change).
    pub clicked: Option<usize>,
    /// Row that was double-clicked (open request).
    pub activated: Option<usize>,
}

/// View for displaying folder search results.
pub struct ResultsView;

impl ResultsView {
    /// Display the results list.
    pub fn show(ui: &mut egui::Ui, results: &[FolderEntry], selected: usize) -> RowInteraction {
        let mut interaction = RowInteraction::default();

        if results.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No results. Search for a folder name.");
            });
            return interaction;
        }

        let row_height = 24.0;
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, row_height, results.len(), |ui, row_range| {
                for i in row_range {
                    if let Some(entry) = results.get(i) {
                        let is_selected = i == selected;

                        let response = ui.horizontal(|ui| {
                            if is_selected {
                                let rect = ui.available_rect_before_wrap();
                                ui.painter().rect_filled(
                                    rect,
                                    0.0,
                                    ui.visuals().selection.bg_fill,
                                );
                            }

                            // Folder name (prominent)
                            ui.strong(&entry.name);

                            ui.add_space(10.0);

                            // Full path (dimmed)
                            ui.weak(entry.path.to_string_lossy().as_ref());

                            // Right-aligned modified date
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.weak(format_date(entry.modified));
                                },
                            );
                        });

                        let row = ui.interact(
                            response.response.rect,
                            egui::Id::new(("folder-row", i)),
                            Sense::click(),
                        );
                        if row.double_clicked() {
                            interaction.activated = Some(i);
                        } else if row.clicked() {
                            interaction.clicked = Some(i);
                        }
                    }
                }
            });

        interaction
    }
}

/// Format a Unix timestamp as a date string.
///
/// Format: "2024-01-15 14:30"
pub fn format_date(timestamp: i64) -> String {
    use chrono::{Local, TimeZone};

    if timestamp <= 0 {
        return "---".to_string();
    }

    match Local.timestamp_opt(timestamp, 0) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        _ => "---".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_invalid() {
        assert_eq!(format_date(0), "---");
        assert_eq!(format_date(-1), "---");
    }

    #[test]
    fn test_format_date_valid() {
        // Exact output depends on local timezone; just check the shape.
        let result = format_date(1705276800);
        assert!(!result.is_empty());
        assert_ne!(result, "---");
    }
}
