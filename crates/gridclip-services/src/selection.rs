//! Per-grid selection owner.

use gridclip_core::{PointerEvent, PointerOutcome, SelectionMode, SelectionState};

use crate::clipboard::ClipboardSink;
use crate::error::ExportResult;
use crate::export::{ExportOptions, RowExportRequest};
use crate::grid::GridSource;
use crate::remote::RowExportSource;
use crate::view::{CopyOutcome, CopyRangeView};

/// Identifies the selection an export view was opened for.
///
/// Every change to the selection bumps the generation, so a ticket taken
/// before the change no longer matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SelectionTicket {
    generation: u64,
    mode: SelectionMode,
}

impl SelectionTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }
}

/// The selection of one grid instance
#[derive(Clone, Debug, Default)]
pub struct GridSelection {
    state: SelectionState,
    generation: u64,
}

impl GridSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply a pointer event to the selection
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> PointerOutcome {
        let outcome = self.state.apply(event);
        if outcome.changed() {
            self.generation += 1;
        }
        outcome
    }

    /// Drop the selection, e.g. on Escape
    pub fn clear(&mut self) {
        if !self.state.is_empty() {
            self.state.clear();
            self.generation += 1;
            tracing::debug!(generation = self.generation, "selection cleared");
        }
    }

    pub fn ticket(&self) -> SelectionTicket {
        SelectionTicket {
            generation: self.generation,
            mode: self.state.mode(),
        }
    }

    /// Whether `ticket` still describes the current selection
    pub fn is_current(&self, ticket: SelectionTicket) -> bool {
        ticket.generation == self.generation && ticket.mode == self.state.mode()
    }

    /// Open an export view for the active selection.
    ///
    /// Cell ranges are rendered immediately. Row ranges come back in
    /// [`crate::ExportStatus::Loading`] and must be loaded from the backend.
    /// Returns `None` when nothing exportable is selected.
    pub fn open_export(&self, grid: &dyn GridSource, options: &ExportOptions) -> Option<CopyRangeView> {
        let ticket = self.ticket();
        match &self.state {
            SelectionState::Empty => None,
            SelectionState::CellRange { .. } => {
                let region = self.state.cell_region()?;
                Some(CopyRangeView::for_cells(ticket, region, grid, options))
            }
            SelectionState::RowRange { .. } => {
                let interval = self.state.row_interval()?;
                let request = RowExportRequest::new(interval, grid.visible_columns());
                Some(CopyRangeView::for_rows(ticket, request, options))
            }
            SelectionState::CtrlRows { rows } => {
                tracing::debug!(rows = rows.len(), "ctrl-picked rows have no export format");
                None
            }
        }
    }

    /// Reset after the clipboard accepted the export of `ticket`
    pub(crate) fn finish_export(&mut self, ticket: SelectionTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state.clear();
        self.generation += 1;
        true
    }

    /// Export the active selection in one step, as an explicit copy command does
    pub async fn export_now(
        &mut self,
        grid: &dyn GridSource,
        remote: &dyn RowExportSource,
        clipboard: &mut dyn ClipboardSink,
        options: &ExportOptions,
    ) -> ExportResult<CopyOutcome> {
        let Some(mut view) = self.open_export(grid, options) else {
            return Ok(CopyOutcome::NothingToCopy(self.state.mode()));
        };
        view.load(self, remote).await?;
        view.copy(self, clipboard)
    }
}
