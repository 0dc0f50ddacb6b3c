//! Clipboard access for copying item text.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to set clipboard text: {0}")]
    Write(#[source] arboard::Error),
}

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
        Ok(Self { clipboard })
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(ClipboardError::Write)
    }
}
