//! Integration tests for selection export
//!
//! Drives `GridSelection` with pointer events the way the grid does, then
//! exports through `CopyRangeView` using the mock endpoint and clipboard.

mod common;

use gridclip_core::{
    Modifiers, PointerEvent, PointerOutcome, RangePhase, SelectionMode, SelectionState,
};
use gridclip_services::{
    CopyOutcome, ExportError, ExportOptions, ExportSource, ExportStatus, GridSelection,
    ResponseOutcome, RowExportRequest, RowExportSource,
};
use pretty_assertions::assert_eq;

use common::{
    MockClipboard, MockRowSource, cell, ctrl_click, sample_grid, shift_click, shift_hover,
};

// ============ Cell range export ============

#[test]
fn cell_range_export_and_header_toggle() {
    let grid = sample_grid();
    let mut selection = GridSelection::new();

    shift_click(&mut selection, "3|3");
    shift_hover(&mut selection, "4|5");
    let outcome = selection.handle_pointer(&PointerEvent::click(cell("4|5"), Modifiers::SHIFT));
    assert_eq!(outcome, PointerOutcome::Finalized);
    assert_eq!(
        selection.state(),
        &SelectionState::CellRange {
            anchor: cell("3|3"),
            focus: cell("4|5"),
            phase: RangePhase::Finalized,
        }
    );

    let mut view = selection
        .open_export(&grid, &ExportOptions::default())
        .expect("cell range is exportable");
    assert_eq!(view.final_text(), Some("foo\t2000-01-01\nfoo\t\nfoo\t\n"));

    assert!(view.toggle_headers(&grid));
    assert_eq!(
        view.final_text(),
        Some("col3\tcol4\nfoo\t2000-01-01\nfoo\t\nfoo\t\n")
    );

    let mut clipboard = MockClipboard::new();
    let outcome = view.copy(&mut selection, &mut clipboard).unwrap();
    assert_eq!(
        outcome,
        CopyOutcome::Copied {
            bytes: "col3\tcol4\nfoo\t2000-01-01\nfoo\t\nfoo\t\n".len()
        }
    );
    assert_eq!(
        clipboard.last(),
        Some("col3\tcol4\nfoo\t2000-01-01\nfoo\t\nfoo\t\n")
    );
    assert!(selection.state().is_empty());
}

#[test]
fn toggling_headers_twice_restores_text() {
    let grid = sample_grid();
    let mut selection = GridSelection::new();
    shift_click(&mut selection, "4|5");
    shift_click(&mut selection, "1|0");

    let mut view = selection
        .open_export(&grid, &ExportOptions::default())
        .unwrap();
    let original = view.final_text().unwrap().to_string();

    view.toggle_headers(&grid);
    assert_ne!(view.final_text().unwrap(), original);
    view.toggle_headers(&grid);
    assert_eq!(view.final_text().unwrap(), original);
    assert!(!view.include_headers());
}

#[test]
fn headers_on_by_default_from_options() {
    let grid = sample_grid();
    let mut selection = GridSelection::new();
    shift_click(&mut selection, "1|0");
    shift_click(&mut selection, "2|0");

    let options = ExportOptions {
        include_headers: true,
        ..ExportOptions::default()
    };
    let view = selection.open_export(&grid, &options).unwrap();
    assert_eq!(view.final_text(), Some("col1\tcol2\n1\t2.5\n"));
}

#[test]
fn export_text_same_for_repeated_opens() {
    let grid = sample_grid();
    let mut selection = GridSelection::new();
    shift_click(&mut selection, "2|2");
    shift_click(&mut selection, "3|4");

    let first = selection.open_export(&grid, &ExportOptions::default()).unwrap();
    let second = selection.open_export(&grid, &ExportOptions::default()).unwrap();
    assert_eq!(first.final_text(), second.final_text());
    assert_eq!(first.ticket(), second.ticket());
}

#[test]
fn pending_range_can_be_copied_by_command() {
    let grid = sample_grid();
    let mut selection = GridSelection::new();
    shift_click(&mut selection, "3|1");
    shift_hover(&mut selection, "3|2");
    assert_eq!(selection.state().phase(), Some(RangePhase::Pending));

    let view = selection
        .open_export(&grid, &ExportOptions::default())
        .unwrap();
    let mut clipboard = MockClipboard::new();
    view.copy(&mut selection, &mut clipboard).unwrap();
    assert_eq!(clipboard.last(), Some("foo\nfoo\n"));
    assert!(selection.state().is_empty());
}

// ============ Row range export ============

#[tokio::test]
async fn row_range_export_uses_remote_text_verbatim() {
    let grid = sample_grid();
    let remote = MockRowSource::new("COPIED_TEXT");
    let mut selection = GridSelection::new();

    shift_click(&mut selection, "0|1");
    assert_eq!(selection.state(), &SelectionState::row_range(1));
    shift_hover(&mut selection, "0|2");
    assert_eq!(
        selection.state(),
        &SelectionState::RowRange {
            anchor: 1,
            focus: 2,
            phase: RangePhase::Pending,
        }
    );
    let outcome = selection.handle_pointer(&PointerEvent::click(cell("0|2"), Modifiers::SHIFT));
    assert_eq!(outcome, PointerOutcome::Finalized);

    let mut view = selection
        .open_export(&grid, &ExportOptions::default())
        .unwrap();
    assert_eq!(view.status(), &ExportStatus::Loading);
    assert_eq!(view.final_text(), None);

    let applied = view.load(&selection, &remote).await.unwrap();
    assert_eq!(applied, ResponseOutcome::Applied);
    assert_eq!(view.final_text(), Some("COPIED_TEXT"));

    assert_eq!(remote.request_count(), 1);
    let request = &remote.request_log()[0];
    assert_eq!(request.start_row, 1);
    assert_eq!(request.end_row, 2);
    assert_eq!(
        request.columns_literal().unwrap(),
        r#"["col1","col2","col3","col4"]"#
    );

    let mut clipboard = MockClipboard::new();
    view.copy(&mut selection, &mut clipboard).unwrap();
    assert_eq!(clipboard.last(), Some("COPIED_TEXT"));
    assert!(selection.state().is_empty());
}

#[tokio::test]
async fn row_range_request_is_normalized() {
    let grid = sample_grid();
    let remote = MockRowSource::new("rows");
    let mut selection = GridSelection::new();
    shift_click(&mut selection, "0|9");
    shift_click(&mut selection, "0|4");

    let mut view = selection
        .open_export(&grid, &ExportOptions::default())
        .unwrap();
    match view.source() {
        ExportSource::Rows(request) => {
            assert_eq!((request.start_row, request.end_row), (4, 9));
        }
        other => panic!("expected a row export, got {other:?}"),
    }
    view.load(&selection, &remote).await.unwrap();
    assert_eq!(remote.request_log()[0].interval().len(), 6);
}

#[tokio::test]
async fn header_toggle_ignored_for_row_range() {
    let grid = sample_grid();
    let remote = MockRowSource::new("a,b\n1,2\n");
    let mut selection = GridSelection::new();
    shift_click(&mut selection, "0|1");
    shift_click(&mut selection, "0|3");

    let mut view = selection
        .open_export(&grid, &ExportOptions::default())
        .unwrap();
    view.load(&selection, &remote).await.unwrap();

    assert!(!view.toggle_headers(&grid));
    assert_eq!(view.final_text(), Some("a,b\n1,2\n"));
}

#[tokio::test]
async fn ready_view_does_not_refetch() {
    let grid = sample_grid();
    let remote = MockRowSource::new("rows");
    let mut selection = GridSelection::new();
    shift_click(&mut selection, "0|1");
    shift_click(&mut selection, "0|2");

    let mut view = selection
        .open_export(&grid, &ExportOptions::default())
        .unwrap();
    view.load(&selection, &remote).await.unwrap();
    view.load(&selection, &remote).await.unwrap();
    assert_eq!(remote.request_count(), 1);
}

#[tokio::test]
async fn remote_failure_keeps_selection_for_retry() {
    let grid = sample_grid();
    let failing = MockRowSource::new("").with_failure();
    let mut selection = GridSelection::new();
    shift_click(&mut selection, "0|1");
    shift_click(&mut selection, "0|2");
    let before = selection.state().clone();

    let mut view = selection
        .open_export(&grid, &ExportOptions::default())
        .unwrap();
    let err = view.load(&selection, &failing).await.unwrap_err();
    assert!(matches!(err, ExportError::RemoteFailed(_)));
    assert!(matches!(view.status(), ExportStatus::Failed(_)));
    assert_eq!(selection.state(), &before);

    let mut clipboard = MockClipboard::new();
    let err = view.copy(&mut selection, &mut clipboard).unwrap_err();
    assert!(matches!(err, ExportError::NotReady));
    assert!(clipboard.writes.is_empty());
    assert_eq!(selection.state(), &before);

    let working = MockRowSource::new("RETRIED");
    view.load(&selection, &working).await.unwrap();
    view.copy(&mut selection, &mut clipboard).unwrap();
    assert_eq!(clipboard.last(), Some("RETRIED"));
    assert!(selection.state().is_empty());
}

// ============ Stale response guard ============

#[tokio::test]
async fn stale_response_after_reset_is_discarded() {
    let grid = sample_grid();
    let remote = MockRowSource::new("LATE");
    let mut selection = GridSelection::new();
    shift_click(&mut selection, "0|1");
    shift_click(&mut selection, "0|2");

    let mut view = selection
        .open_export(&grid, &ExportOptions::default())
        .unwrap();
    let request: RowExportRequest = view.pending_request().cloned().unwrap();

    // The user cancels while the request is in flight
    selection.clear();
    let response = remote.fetch_rows(&request).await;

    let outcome = view.apply_response(&selection, response).unwrap();
    assert_eq!(outcome, ResponseOutcome::Discarded);
    assert_eq!(view.final_text(), None);

    let mut clipboard = MockClipboard::new();
    assert_eq!(
        view.copy(&mut selection, &mut clipboard).unwrap(),
        CopyOutcome::Discarded
    );
    assert!(clipboard.writes.is_empty());
}

#[tokio::test]
async fn stale_response_after_mode_change_is_discarded() {
    let grid = sample_grid();
    let remote = MockRowSource::new("LATE");
    let mut selection = GridSelection::new();
    shift_click(&mut selection, "0|1");
    shift_click(&mut selection, "0|2");

    let mut view = selection
        .open_export(&grid, &ExportOptions::default())
        .unwrap();
    let request = view.pending_request().cloned().unwrap();

    shift_click(&mut selection, "2|2");
    let response = remote.fetch_rows(&request).await;
    assert_eq!(
        view.apply_response(&selection, response).unwrap(),
        ResponseOutcome::Discarded
    );

    let mut clipboard = MockClipboard::new();
    assert_eq!(
        view.copy(&mut selection, &mut clipboard).unwrap(),
        CopyOutcome::Discarded
    );
    assert_eq!(selection.state(), &SelectionState::cell_range(cell("2|2")));
}

#[test]
fn copy_from_reset_selection_is_discarded() {
    let grid = sample_grid();
    let mut selection = GridSelection::new();
    shift_click(&mut selection, "1|1");
    shift_click(&mut selection, "2|2");

    let view = selection
        .open_export(&grid, &ExportOptions::default())
        .unwrap();
    let mut clipboard = MockClipboard::new();
    view.copy(&mut selection, &mut clipboard).unwrap();
    assert_eq!(clipboard.writes.len(), 1);

    // A second copy from the same view finds the selection already reset
    assert_eq!(
        view.copy(&mut selection, &mut clipboard).unwrap(),
        CopyOutcome::Discarded
    );
    assert_eq!(clipboard.writes.len(), 1);
}

// ============ Degenerate selections ============

#[test]
fn empty_selection_has_nothing_to_export() {
    let grid = sample_grid();
    let selection = GridSelection::new();
    assert!(selection.open_export(&grid, &ExportOptions::default()).is_none());
}

#[test]
fn ctrl_rows_have_no_export_format() {
    let grid = sample_grid();
    let mut selection = GridSelection::new();
    ctrl_click(&mut selection, "0|1");
    ctrl_click(&mut selection, "0|2");
    assert!(selection.open_export(&grid, &ExportOptions::default()).is_none());
    assert_eq!(
        selection.state().ctrl_row_list().unwrap().to_vec(),
        vec![1, 2]
    );
}

#[test]
fn clipboard_failure_keeps_selection() {
    let grid = sample_grid();
    let mut selection = GridSelection::new();
    shift_click(&mut selection, "1|1");
    shift_click(&mut selection, "2|2");
    let before = selection.state().clone();

    let view = selection
        .open_export(&grid, &ExportOptions::default())
        .unwrap();
    let mut clipboard = MockClipboard::failing();
    let err = view.copy(&mut selection, &mut clipboard).unwrap_err();
    assert!(matches!(err, ExportError::Clipboard(_)));
    assert_eq!(selection.state(), &before);
}

// ============ export_now ============

#[tokio::test]
async fn export_now_covers_every_exportable_mode() {
    let grid = sample_grid();
    let remote = MockRowSource::new("ROWS");
    let options = ExportOptions::default();

    let mut cells = GridSelection::new();
    shift_click(&mut cells, "3|0");
    shift_click(&mut cells, "4|0");
    let mut clipboard = MockClipboard::new();
    let outcome = cells
        .export_now(&grid, &remote, &mut clipboard, &options)
        .await
        .unwrap();
    assert!(matches!(outcome, CopyOutcome::Copied { .. }));
    assert_eq!(clipboard.last(), Some("foo\t2000-01-01\n"));
    assert!(cells.state().is_empty());

    let mut rows = GridSelection::new();
    shift_click(&mut rows, "0|2");
    rows.export_now(&grid, &remote, &mut clipboard, &options)
        .await
        .unwrap();
    assert_eq!(clipboard.last(), Some("ROWS"));
    assert!(rows.state().is_empty());
}

#[tokio::test]
async fn export_now_on_empty_is_a_no_op() {
    let grid = sample_grid();
    let remote = MockRowSource::new("ROWS");
    let mut selection = GridSelection::new();
    let mut clipboard = MockClipboard::new();

    let outcome = selection
        .export_now(&grid, &remote, &mut clipboard, &ExportOptions::default())
        .await
        .unwrap();
    assert_eq!(outcome, CopyOutcome::NothingToCopy(SelectionMode::Empty));
    assert!(clipboard.writes.is_empty());
    assert_eq!(remote.request_count(), 0);
}

#[tokio::test]
async fn export_now_leaves_ctrl_rows_untouched() {
    let grid = sample_grid();
    let remote = MockRowSource::new("ROWS");
    let mut selection = GridSelection::new();
    ctrl_click(&mut selection, "0|3");
    let mut clipboard = MockClipboard::new();

    let outcome = selection
        .export_now(&grid, &remote, &mut clipboard, &ExportOptions::default())
        .await
        .unwrap();
    assert_eq!(outcome, CopyOutcome::NothingToCopy(SelectionMode::CtrlRows));
    assert!(clipboard.writes.is_empty());
    assert!(selection.state().contains_row(3));
}

// ============ Generation tracking ============

#[test]
fn ignored_events_keep_the_ticket_valid() {
    let mut selection = GridSelection::new();
    shift_click(&mut selection, "1|1");
    let ticket = selection.ticket();

    selection.handle_pointer(&PointerEvent::hover(cell("0|4"), Modifiers::SHIFT));
    selection.handle_pointer(&PointerEvent::hover(cell("2|2"), Modifiers::NONE));
    assert!(selection.is_current(ticket));

    shift_hover(&mut selection, "2|2");
    assert!(!selection.is_current(ticket));
}
