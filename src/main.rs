// Agent Directory GUI - Main Entry Point
// Native dashboard listing the EduFinder agents with search and filtering

mod clipboard;
mod config;
mod state;
mod ui;

use eframe::egui;
use std::time::Duration;

use clipboard::{ClipboardBackend, EguiClipboard};
use config::AppConfig;
use state::{AppState, CATALOG};
use ui::render_app_layout;

fn main() -> eframe::Result<()> {
    let config = AppConfig::from_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!(
        agents = CATALOG.len(),
        width = config.window.width,
        height = config.window.height,
        "Starting agent directory"
    );

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("EduFinder Agents")
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    let toast_secs = config.notifications.toast_secs;
    eframe::run_native(
        "EduFinder Agents",
        options,
        Box::new(move |cc| {
            let clipboard = EguiClipboard::new(cc.egui_ctx.clone());
            Box::new(AgentDirectoryApp::new(clipboard, toast_secs))
        }),
    )
}

/// Main application struct
/// Owns the view state and the clipboard handle
struct AgentDirectoryApp<C: ClipboardBackend> {
    /// Application state (catalog, filter, notifications)
    state: AppState,
    /// Host clipboard
    clipboard: C,
}

impl<C: ClipboardBackend> AgentDirectoryApp<C> {
    /// Create a new application instance over the shared catalog
    fn new(clipboard: C, toast_secs: f64) -> Self {
        Self {
            state: AppState::new(&CATALOG, toast_secs),
            clipboard,
        }
    }
}

impl<C: ClipboardBackend> eframe::App for AgentDirectoryApp<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.state.notifications.prune(now);

        render_app_layout(ctx, &mut self.state, &mut self.clipboard);

        // Keep frames coming until the last toast expires
        if !self.state.notifications.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_creation() {
        let app = AgentDirectoryApp::new(EguiClipboard::detached(), 2.5);
        assert_eq!(app.state.result_summary().to_string(), "4 of 4");
        assert!(app.state.filter.is_default());
    }

    #[test]
    fn test_detached_copy_degrades_to_failure_toast() {
        let mut app = AgentDirectoryApp::new(EguiClipboard::detached(), 2.5);
        let copied = app
            .state
            .copy_address(&mut app.clipboard, state::AgentKey::Main, 0.0);
        assert!(!copied);
        assert_eq!(app.state.notifications.len(), 1);
    }
}
