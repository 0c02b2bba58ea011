//! fop - Search and open folder UI.
//!
//! This binary provides the user-facing search window:
//! - Search-as-you-type over the immediate subfolders of the default
//!   directory
//! - Keyboard navigation (Up/Down/Enter)
//! - Folder actions (copy relative name, open in file manager)
//! - Settings menu for picking the default directory
//!
//! Logs go to stderr and, when the platform data directory is writable,
//! to a daily-rolling file under `<data_local_dir>/logs/`.

use eframe::egui;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fop::config;
use fop::ui::FolderSearchApp;

/// Initialize tracing with an optional rolling file appender.
///
/// The returned guard must stay alive for the file writer to flush.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = || {
        tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "fop=info".to_string()),
        )
    };

    let log_dir = config::log_directory();
    if let Some(dir) = log_dir {
        if std::fs::create_dir_all(&dir).is_ok() {
            let file_appender = tracing_appender::rolling::daily(&dir, "fop.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(env_filter())
                .with(tracing_subscriber::fmt::layer())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
            return Some(guard);
        }
        eprintln!("Failed to create log directory {:?}, logging to stderr only", dir);
    }

    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();
    None
}

/// Main entry point for the fop search UI.
fn main() -> eframe::Result<()> {
    let _log_guard = init_logging();

    info!("fop starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 380.0])
            .with_min_inner_size([420.0, 260.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Search and Open Folder",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);

            Ok(Box::new(FolderSearchApp::new(cc)))
        }),
    )
}
