// Application state management
// Contains the catalog handle, filter inputs, notifications, and UI state

use std::fmt;

use crate::clipboard::ClipboardBackend;
use crate::state::catalog::{AgentKey, AgentRecord, Catalog};
use crate::state::filter::{Category, FilterState};
use crate::state::notifications::{Notifications, ToastKind};

/// Counts behind the "N of M" result line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.shown, self.total)
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Shared, read-only agent catalog
    pub catalog: &'static Catalog,
    /// Current search and category inputs
    pub filter: FilterState,
    /// Live clipboard acknowledgments
    pub notifications: Notifications,
    /// UI state preferences
    pub ui_state: UiState,
}

/// UI-specific state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Whether the ports section is visible
    pub ports_visible: bool,
    /// Whether the quick actions row is visible
    pub quick_actions_visible: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            ports_visible: true,
            quick_actions_visible: true,
        }
    }
}

impl AppState {
    /// Create state over a catalog; toasts live for `toast_lifetime` seconds
    pub fn new(catalog: &'static Catalog, toast_lifetime: f64) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            notifications: Notifications::new(toast_lifetime),
            ui_state: UiState::default(),
        }
    }

    /// Records passing the current filter, in catalog order
    pub fn visible_agents(&self) -> Vec<&'static AgentRecord> {
        self.filter.apply(self.catalog.records())
    }

    /// Shown and total counts for the current filter
    pub fn result_summary(&self) -> ResultSummary {
        ResultSummary {
            shown: self.visible_agents().len(),
            total: self.catalog.len(),
        }
    }

    /// Replace the search query
    /// Returns true if the query changed
    pub fn set_query(&mut self, query: &str) -> bool {
        if self.filter.query == query {
            return false;
        }
        self.filter.query = query.to_string();
        tracing::debug!(query = %self.filter.query, "Search query changed");
        true
    }

    /// Select a category
    /// Returns true if the category changed
    pub fn set_category(&mut self, category: Category) -> bool {
        if self.filter.category == category {
            return false;
        }
        self.filter.category = category;
        tracing::debug!(category = ?category, "Category filter changed");
        true
    }

    /// Restore the default filter
    pub fn reset_filters(&mut self) {
        if !self.filter.is_default() {
            tracing::debug!("Filters cleared");
        }
        self.filter = FilterState::default();
    }

    /// Copy an agent's address and queue an acknowledgment
    /// Returns true if the clipboard accepted the text; failures never escape
    pub fn copy_address(
        &mut self,
        clipboard: &mut dyn ClipboardBackend,
        key: AgentKey,
        now: f64,
    ) -> bool {
        let Some(record) = self.catalog.get(key) else {
            return false;
        };
        match clipboard.write_text(&record.address) {
            Ok(()) => {
                tracing::info!(agent = %key, "Address queued for clipboard");
                self.notifications.push(
                    ToastKind::Success,
                    format!("Sent {} address to clipboard", key.display_name()),
                    now,
                );
                true
            }
            Err(e) => {
                tracing::warn!(agent = %key, error = %e, "Clipboard write failed");
                self.notifications
                    .push(ToastKind::Failure, format!("Copy failed: {}", e), now);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardError, EguiClipboard};
    use eframe::egui;
    use crate::state::catalog::CATALOG;

    /// Records writes, optionally refusing them
    struct RecordingClipboard {
        writes: Vec<String>,
        fail: bool,
    }

    impl ClipboardBackend for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("permission denied".to_string()));
            }
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    fn state() -> AppState {
        AppState::new(&CATALOG, 2.0)
    }

    #[test]
    fn test_app_state_creation() {
        let state = state();
        assert!(state.filter.is_default());
        assert_eq!(state.visible_agents().len(), 4);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_result_summary_no_match() {
        let mut state = state();
        assert!(state.set_query("zzz-no-match"));
        assert!(state.visible_agents().is_empty());
        assert_eq!(state.result_summary().to_string(), "0 of 4");
    }

    #[test]
    fn test_set_query_reports_change() {
        let mut state = state();
        assert!(state.set_query("main"));
        assert!(!state.set_query("main"));
        assert_eq!(state.result_summary(), ResultSummary { shown: 1, total: 4 });
    }

    #[test]
    fn test_set_category_and_reset() {
        let mut state = state();
        assert!(state.set_category(Category::Insights));
        assert!(!state.set_category(Category::Insights));
        assert_eq!(state.visible_agents()[0].key, AgentKey::Enhanced);

        state.set_query("agent");
        state.reset_filters();
        assert!(state.filter.is_default());
        assert_eq!(state.result_summary().to_string(), "4 of 4");
    }

    #[test]
    fn test_copy_success_shows_one_toast() {
        let mut state = state();
        let mut clipboard = RecordingClipboard { writes: Vec::new(), fail: false };

        assert!(state.copy_address(&mut clipboard, AgentKey::Materials, 0.0));
        assert_eq!(clipboard.writes, vec![CATALOG.get(AgentKey::Materials).unwrap().address.clone()]);
        assert_eq!(state.notifications.len(), 1);
        let toast = state.notifications.iter().next().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Sent materials agent address to clipboard");
    }

    #[test]
    fn test_copy_failure_is_recovered() {
        let mut state = state();
        state.set_query("curr");
        let mut clipboard = RecordingClipboard { writes: Vec::new(), fail: true };

        assert!(!state.copy_address(&mut clipboard, AgentKey::Curriculum, 0.0));
        assert!(clipboard.writes.is_empty());
        let toast = state.notifications.iter().next().unwrap();
        assert_eq!(toast.kind, ToastKind::Failure);
        assert!(toast.message.contains("denied"));

        // Filtering is untouched by the failed copy
        assert_eq!(state.filter.query, "curr");
        assert_eq!(state.visible_agents().len(), 1);
    }

    #[test]
    fn test_second_copy_in_one_frame_is_refused() {
        let ctx = egui::Context::default();
        let mut clipboard = EguiClipboard::new(ctx.clone());
        let mut state = state();

        let output = ctx.run(egui::RawInput::default(), |_| {
            assert!(state.copy_address(&mut clipboard, AgentKey::Main, 0.0));
            assert!(!state.copy_address(&mut clipboard, AgentKey::Enhanced, 0.0));
        });

        let main = CATALOG.get(AgentKey::Main).unwrap();
        assert_eq!(output.platform_output.copied_text, main.address);
        let kinds: Vec<ToastKind> = state.notifications.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Failure]);
    }
}
