//! Clipboard access
//!
//! The host clipboard sits behind [`ClipboardBackend`] so the copy action can
//! be driven without a window. Errors are recovered by the caller and turned
//! into notifications; nothing here panics.

use eframe::egui;
use thiserror::Error;

/// Errors that can occur while writing to the clipboard
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// Clipboard capability is absent or the host refused the write
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// Nothing to copy
    #[error("Nothing to copy")]
    EmptyText,
}

/// Something that can place text on the system clipboard
pub trait ClipboardBackend {
    /// Request that `text` be placed on the clipboard
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard provided by the egui platform integration
///
/// The text is queued in the frame output and written by eframe once the
/// frame ends, so the call never blocks input handling. Only one write can
/// be pending per frame; a second one is refused rather than overwriting it.
#[derive(Clone)]
pub struct EguiClipboard {
    ctx: Option<egui::Context>,
}

impl EguiClipboard {
    /// Clipboard bound to a running egui context
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx: Some(ctx) }
    }

    /// Clipboard with no host behind it; every write fails
    #[allow(dead_code)] // Used by headless runs and tests
    pub fn detached() -> Self {
        Self { ctx: None }
    }
}

impl ClipboardBackend for EguiClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::EmptyText);
        }
        let ctx = self
            .ctx
            .as_ref()
            .ok_or_else(|| ClipboardError::Unavailable("no egui context attached".to_string()))?;
        let pending = ctx.output(|output| !output.copied_text.is_empty());
        if pending {
            return Err(ClipboardError::Unavailable(
                "another copy is already pending this frame".to_string(),
            ));
        }
        ctx.output_mut(|output| output.copied_text = text.to_string());
        Ok(())
    }
}
