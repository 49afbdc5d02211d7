//! The copy-range popup: previews export text and owns the header toggle.

use gridclip_core::{CellRegion, SelectionMode};

use crate::clipboard::ClipboardSink;
use crate::error::{ExportError, ExportResult};
use crate::export::{Delimiters, ExportOptions, RowExportRequest, render_cell_region};
use crate::grid::GridSource;
use crate::remote::RowExportSource;
use crate::selection::{GridSelection, SelectionTicket};

/// What an export view renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportSource {
    /// Rendered locally from on-screen values
    Cells(CellRegion),
    /// Formatted by the backend
    Rows(RowExportRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// Waiting for the backend
    Loading,
    Ready,
    /// The backend request failed; `load` may be retried
    Failed(String),
}

/// Result of [`CopyRangeView::copy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text written to the clipboard and the selection reset
    Copied { bytes: usize },
    /// The selection changed since the view opened; nothing was written
    Discarded,
    /// The selection in this mode has nothing to copy
    NothingToCopy(SelectionMode),
}

/// Result of [`CopyRangeView::apply_response`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    Applied,
    /// Arrived after the selection moved on and was dropped
    Discarded,
}

/// Export text for one selection, plus the header toggle
#[derive(Debug, Clone)]
pub struct CopyRangeView {
    ticket: SelectionTicket,
    source: ExportSource,
    include_headers: bool,
    delimiters: Delimiters,
    final_text: String,
    status: ExportStatus,
}

impl CopyRangeView {
    pub(crate) fn for_cells(
        ticket: SelectionTicket,
        region: CellRegion,
        grid: &dyn GridSource,
        options: &ExportOptions,
    ) -> Self {
        let final_text =
            render_cell_region(&region, grid, options.include_headers, &options.delimiters);
        Self {
            ticket,
            source: ExportSource::Cells(region),
            include_headers: options.include_headers,
            delimiters: options.delimiters.clone(),
            final_text,
            status: ExportStatus::Ready,
        }
    }

    pub(crate) fn for_rows(
        ticket: SelectionTicket,
        request: RowExportRequest,
        options: &ExportOptions,
    ) -> Self {
        Self {
            ticket,
            source: ExportSource::Rows(request),
            include_headers: options.include_headers,
            delimiters: options.delimiters.clone(),
            final_text: String::new(),
            status: ExportStatus::Loading,
        }
    }

    pub fn ticket(&self) -> SelectionTicket {
        self.ticket
    }

    pub fn source(&self) -> &ExportSource {
        &self.source
    }

    pub fn status(&self) -> &ExportStatus {
        &self.status
    }

    pub fn include_headers(&self) -> bool {
        self.include_headers
    }

    /// Text that `copy` would write, once ready
    pub fn final_text(&self) -> Option<&str> {
        match self.status {
            ExportStatus::Ready => Some(&self.final_text),
            _ => None,
        }
    }

    /// Flip the header toggle and re-render. Row exports are formatted by the
    /// backend, so the toggle has no effect on them.
    pub fn toggle_headers(&mut self, grid: &dyn GridSource) -> bool {
        self.set_include_headers(!self.include_headers, grid);
        self.include_headers
    }

    pub fn set_include_headers(&mut self, include_headers: bool, grid: &dyn GridSource) {
        let ExportSource::Cells(region) = &self.source else {
            return;
        };
        self.include_headers = include_headers;
        self.final_text = render_cell_region(region, grid, include_headers, &self.delimiters);
    }

    /// The backend request still owed, if any
    pub fn pending_request(&self) -> Option<&RowExportRequest> {
        match (&self.source, &self.status) {
            (ExportSource::Rows(request), ExportStatus::Loading | ExportStatus::Failed(_)) => {
                Some(request)
            }
            _ => None,
        }
    }

    /// Apply a backend response, unless the selection moved on meanwhile.
    ///
    /// A failed response marks the view failed and is returned as the error;
    /// the selection itself is never touched here.
    pub fn apply_response(
        &mut self,
        selection: &GridSelection,
        response: ExportResult<String>,
    ) -> ExportResult<ResponseOutcome> {
        if !selection.is_current(self.ticket) {
            tracing::debug!(
                generation = self.ticket.generation(),
                current = selection.generation(),
                "discarding stale row export response"
            );
            return Ok(ResponseOutcome::Discarded);
        }

        match response {
            Ok(text) => {
                self.final_text = text;
                self.status = ExportStatus::Ready;
                Ok(ResponseOutcome::Applied)
            }
            Err(err) => {
                tracing::warn!(error = %err, "row export failed");
                self.status = ExportStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Fetch row export text from the backend. Does nothing for cell ranges
    /// or once the text is ready.
    pub async fn load(
        &mut self,
        selection: &GridSelection,
        remote: &dyn RowExportSource,
    ) -> ExportResult<ResponseOutcome> {
        let Some(request) = self.pending_request().cloned() else {
            return Ok(ResponseOutcome::Applied);
        };
        self.status = ExportStatus::Loading;
        let response = remote.fetch_rows(&request).await;
        self.apply_response(selection, response)
    }

    /// Write the text to the clipboard and reset the selection.
    ///
    /// A view opened for an older selection writes nothing. If the clipboard
    /// write fails the selection is kept so the user can retry.
    pub fn copy(
        &self,
        selection: &mut GridSelection,
        clipboard: &mut dyn ClipboardSink,
    ) -> ExportResult<CopyOutcome> {
        if !selection.is_current(self.ticket) {
            tracing::debug!("discarding copy for a stale selection");
            return Ok(CopyOutcome::Discarded);
        }

        let text = self.final_text().ok_or(ExportError::NotReady)?;
        clipboard.write_text(text)?;
        selection.finish_export(self.ticket);

        tracing::info!(
            mode = ?self.ticket.mode(),
            bytes = text.len(),
            include_headers = self.include_headers,
            "copied selection to clipboard"
        );
        Ok(CopyOutcome::Copied { bytes: text.len() })
    }
}
