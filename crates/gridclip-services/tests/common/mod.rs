//! Common test utilities and mocks

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use gridclip_core::{CellCoordinate, Modifiers, PointerEvent};
use gridclip_services::{
    ClipboardSink, ExportError, ExportResult, GridSelection, RenderedGrid, RowExportRequest,
    RowExportSource,
};

/// Mock row export endpoint that records every request.
pub struct MockRowSource {
    pub response: String,
    pub should_fail: bool,
    pub requests: Arc<parking_lot::Mutex<Vec<RowExportRequest>>>,
}

impl MockRowSource {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            should_fail: false,
            requests: Arc::new(parking_lot::Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn request_log(&self) -> Vec<RowExportRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl RowExportSource for MockRowSource {
    async fn fetch_rows(&self, request: &RowExportRequest) -> ExportResult<String> {
        self.requests.lock().push(request.clone());
        if self.should_fail {
            Err(ExportError::RemoteFailed("connection refused".into()))
        } else {
            Ok(self.response.clone())
        }
    }
}

/// Clipboard that keeps every write in memory
#[derive(Default)]
pub struct MockClipboard {
    pub writes: Vec<String>,
    pub should_fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            writes: Vec::new(),
            should_fail: true,
        }
    }

    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl ClipboardSink for MockClipboard {
    fn write_text(&mut self, text: &str) -> ExportResult<()> {
        if self.should_fail {
            return Err(ExportError::Clipboard("clipboard unavailable".into()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Four-column grid with rows 0..=5 rendered; columns 3 and 4 match the
/// values the range-selection scenarios expect
pub fn sample_grid() -> RenderedGrid {
    let mut grid = RenderedGrid::new(["col1", "col2", "col3", "col4"]);
    grid.set_row(0, [Some("1"), Some("2.5"), Some("foo"), Some("2000-01-01")]);
    grid.set_row(1, [Some("2"), Some("3.5"), Some("foo"), None]);
    grid.set_row(2, [Some("3"), Some("4.5"), Some("foo"), None]);
    grid.set_row(3, [Some("4"), Some("5.5"), Some("foo"), Some("2000-01-01")]);
    grid.set_row(4, [Some("5"), Some("6.5"), Some("foo"), None]);
    grid.set_row(5, [Some("6"), Some("7.5"), Some("foo"), Some("")]);
    grid
}

pub fn cell(key: &str) -> CellCoordinate {
    key.parse().expect("well-formed cell key")
}

pub fn shift_click(selection: &mut GridSelection, key: &str) {
    selection.handle_pointer(&PointerEvent::click(cell(key), Modifiers::SHIFT));
}

pub fn shift_hover(selection: &mut GridSelection, key: &str) {
    selection.handle_pointer(&PointerEvent::hover(cell(key), Modifiers::SHIFT));
}

pub fn ctrl_click(selection: &mut GridSelection, key: &str) {
    selection.handle_pointer(&PointerEvent::click(cell(key), Modifiers::CTRL));
}
