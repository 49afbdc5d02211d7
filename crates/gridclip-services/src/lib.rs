//! gridclip services layer
//!
//! Turns a finalized grid selection into clipboard text. This crate sits
//! between the host UI and `gridclip-core`:
//!
//! ```text
//! UI Layer (grid renderer, export popup)
//!     ↓
//! Service Layer (gridclip-services) ← This crate
//!     ↓
//! Domain Layer (gridclip-core)
//! ```
//!
//! # Export paths
//!
//! - Cell ranges are rendered locally from the values the grid has on screen
//!   ([`render_cell_region`]).
//! - Row ranges may cover rows that were never loaded, so they are formatted
//!   by the backend through a [`RowExportSource`].
//!
//! [`GridSelection`] owns the selection of one grid and hands out
//! [`CopyRangeView`]s. A view only writes to the clipboard while the
//! selection it was opened for is still current.

mod clipboard;
mod error;
mod export;
mod grid;
pub mod logging;
mod remote;
mod selection;
mod settings;
mod view;

pub use clipboard::{ClipboardSink, SystemClipboard};
pub use error::{ExportError, ExportResult};
pub use export::{Delimiters, ExportOptions, RowExportRequest, render_cell_region};
pub use grid::{GridSource, RenderedGrid};
pub use remote::{HttpRowExportSource, RowExportSource};
pub use selection::{GridSelection, SelectionTicket};
pub use settings::{GridClipSettings, RemoteSettings};
pub use view::{CopyOutcome, CopyRangeView, ExportSource, ExportStatus, ResponseOutcome};
