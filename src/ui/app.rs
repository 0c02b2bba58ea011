//! Main search application window.
//!
//! Implements eframe::App for the folder search UI: query field, results
//! list with keyboard navigation, copy/open actions, and the settings menu
//! for picking the default directory. Everything runs synchronously on the
//! UI thread; a search is a single local directory listing.

use eframe::egui::{self, ImageSource};

use crate::config::Config;
use crate::search::{self, FolderEntry};
use crate::ui::actions;
use crate::ui::icons;
use crate::ui::results::ResultsView;

/// The main folder search application.
pub struct FolderSearchApp {
    /// Application configuration (owns the default directory).
    config: Config,
    /// Current search query text.
    query: String,
    /// Folder results from the last search.
    results: Vec<FolderEntry>,
    /// Currently selected result index.
    selected_index: usize,
    /// Status bar message.
    status: String,
    /// Copy-action icon, if the asset could be loaded.
    copy_icon: Option<ImageSource<'static>>,
    /// Open-action icon, if the asset could be loaded.
    open_icon: Option<ImageSource<'static>>,
    /// Whether this is the first frame (for initial focus).
    first_frame: bool,
}

impl FolderSearchApp {
    /// Create a new folder search application.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::load();
        tracing::info!("Default directory: {:?}", config.default_directory);

        Self {
            config,
            query: String::new(),
            results: Vec::new(),
            selected_index: 0,
            status: "Ready".to_string(),
            copy_icon: icons::load_action_icon("copy.png"),
            open_icon: icons::load_action_icon("open.png"),
            first_frame: true,
        }
    }

    /// Run a search against the configured default directory.
    fn run_search(&mut self) {
        self.results = search::search_folders(&self.config.default_directory, &self.query);
        self.selected_index = 0;

        if self.results.is_empty() {
            self.status = "No folders found matching the search criteria.".to_string();
        } else {
            self.status = format!("{} folders", self.results.len());
        }
    }

    /// The currently selected folder entry, if any.
    fn selected_entry(&self) -> Option<&FolderEntry> {
        self.results.get(self.selected_index)
    }

    /// Copy the selected folder's root-relative name to the clipboard.
    fn copy_selected(&mut self) {
        let Some(entry) = self.selected_entry() else {
            self.status = "No folder selected to copy.".to_string();
            return;
        };

        match actions::copy_folder_name(&entry.path, &self.config.default_directory) {
            Ok(()) => self.status = "Folder name copied to clipboard.".to_string(),
            Err(e) => {
                tracing::error!("Failed to copy folder name: {}", e);
                self.status = format!("Failed to copy: {}", e);
            }
        }
    }

    /// Open the selected folder in the OS file manager.
    fn open_selected(&mut self) {
        let Some(entry) = self.selected_entry() else {
            self.status = "No folder selected to open.".to_string();
            return;
        };

        if let Err(e) = actions::open_folder(&entry.path) {
            tracing::error!("Failed to open folder: {}", e);
            self.status = "Unable to open the folder.".to_string();
        }
    }

    /// Open a folder at a specific result index (mouse double-click).
    fn open_at(&mut self, index: usize) {
        self.selected_index = index;
        self.open_selected();
    }

    /// Show the folder-choose dialog and persist a newly picked default
    /// directory.
    fn choose_default_directory(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_directory(&self.config.default_directory)
            .pick_folder();

        if let Some(dir) = picked {
            tracing::info!("Default directory changed to {:?}", dir);
            self.config.default_directory = dir;
            self.config.persist();
            self.run_search();
        }
    }

    /// Handle keyboard navigation and the Enter-to-open shortcut.
    ///
    /// Enter is left to the query field while it has focus; there it
    /// re-runs the search instead of opening a folder.
    fn handle_keyboard(&mut self, ctx: &egui::Context, query_has_focus: bool) {
        let mut open_requested = false;

        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowDown) && !self.results.is_empty() {
                self.selected_index = (self.selected_index + 1).min(self.results.len() - 1);
            }

            if i.key_pressed(egui::Key::ArrowUp) {
                self.selected_index = self.selected_index.saturating_sub(1);
            }

            if i.key_pressed(egui::Key::Enter) && !query_has_focus {
                open_requested = true;
            }
        });

        if open_requested {
            self.open_selected();
        }
    }
}

impl eframe::App for FolderSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Settings", |ui| {
                    if ui.button("Set Default Directory…").clicked() {
                        ui.close_menu();
                        self.choose_default_directory();
                    }
                });
            });
        });

        // Action buttons and status bar
        egui::TopBottomPanel::bottom("action_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Selected Folder:");
                match self.selected_entry() {
                    Some(entry) => ui.strong(&entry.name),
                    None => ui.weak("none"),
                };

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if icons::action_button(
                        ui,
                        self.open_icon.as_ref(),
                        "Open",
                        "Open selected folder",
                    )
                    .clicked()
                    {
                        self.open_selected();
                    }
                    if icons::action_button(
                        ui,
                        self.copy_icon.as_ref(),
                        "Copy",
                        "Copy selected folder name to clipboard",
                    )
                    .clicked()
                    {
                        self.copy_selected();
                    }
                });
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(&self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak("Enter:open  \u{2191}\u{2193}:select");
                });
            });
        });

        // Search field and results
        let mut query_has_focus = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Search for:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.query)
                        .desired_width(ui.available_width() - 70.0)
                        .hint_text("Folder name substring..."),
                );

                if self.first_frame {
                    response.request_focus();
                    self.first_frame = false;
                }

                if response.changed() {
                    self.run_search();
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.run_search();
                }
                query_has_focus = response.has_focus();

                if ui.button("Search").clicked() {
                    self.run_search();
                }
            });

            ui.separator();

            let interaction = ResultsView::show(ui, &self.results, self.selected_index);
            if let Some(index) = interaction.activated {
                self.open_at(index);
            } else if let Some(index) = interaction.clicked {
                self.selected_index = index;
            }
        });

        self.handle_keyboard(ctx, query_has_focus);
    }
}
