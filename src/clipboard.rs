//! Clipboard access for copying the generated summary.

use arboard::Clipboard;

/// Write-only clipboard sink.
pub trait ClipboardWriter: Send {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// System clipboard backed by `arboard`.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for ClipboardHandler {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to set clipboard text: {}", e))
    }
}
