//! System clipboard backed by `arboard`, enabled with the `clipboard` feature.

use crate::traits::Clipboard;

/// Writes to the platform clipboard.
///
/// If the clipboard cannot be opened (headless session, missing display
/// server) every write is dropped with a warning instead of failing.
pub struct SystemClipboard {
    manager: Option<arboard::Clipboard>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        let manager = match arboard::Clipboard::new() {
            Ok(manager) => Some(manager),
            Err(e) => {
                log::warn!("system clipboard unavailable: {e}");
                None
            }
        };
        Self { manager }
    }
}

impl Clipboard for SystemClipboard {
    fn set(&mut self, text: String) {
        let Some(manager) = self.manager.as_mut() else {
            log::warn!("clipboard write dropped, no system clipboard");
            return;
        };
        if let Err(e) = manager.set_text(text) {
            log::warn!("clipboard write failed: {e}");
        }
    }
}
