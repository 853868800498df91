//! System clipboard access
//!
//! Write-only: code blocks push their raw text here on explicit user action.
//! Failures are returned to the caller, which turns them into a transient
//! notice instead of letting them escape into the UI.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),
    #[error("failed to write to clipboard: {0}")]
    Write(#[source] arboard::Error),
}

/// Something that accepts copied text
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Platform clipboard, acquired on first use
///
/// The handle is kept for the life of the viewer because some platforms
/// (X11) drop the selection when the owning handle goes away.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(ClipboardError::Unavailable)?,
        };

        // On failure the handle is dropped and re-acquired next time
        clipboard.set_text(text).map_err(ClipboardError::Write)?;
        self.inner = Some(clipboard);

        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// In-memory clipboard for headless tests
    #[derive(Default)]
    pub struct MemoryClipboard {
        pub contents: Option<String>,
        pub writes: usize,
        pub fail: bool,
    }

    impl ClipboardSink for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Write(arboard::Error::ClipboardOccupied));
            }
            self.contents = Some(text.to_string());
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_memory_clipboard_records_writes() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.set_text("a").unwrap();
        clipboard.set_text("b").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("b"));
        assert_eq!(clipboard.writes, 2);
    }

    #[test]
    fn test_memory_clipboard_failure_is_an_error() {
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        let err = clipboard.set_text("a").unwrap_err();
        assert!(err.to_string().starts_with("failed to write to clipboard"));
        assert!(clipboard.contents.is_none());
    }
}
