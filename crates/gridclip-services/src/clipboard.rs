//! Clipboard sinks.

use crate::error::{ExportError, ExportResult};

/// Destination of finished export text
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> ExportResult<()>;
}

/// System clipboard via `arboard`.
///
/// The platform handle is opened per write since it is not `Send` everywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> ExportResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;

        clipboard
            .set_text(text)
            .map_err(|e| ExportError::Clipboard(e.to_string()))?;

        Ok(())
    }
}
