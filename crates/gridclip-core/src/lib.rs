//! gridclip core - selection model for virtualized data grids
//!
//! This crate holds the pure, synchronous half of grid selection. It defines:
//!
//! - `CellCoordinate` - the `"<column>|<row>"` key attached to rendered cells
//! - `SelectionState` - the single active selection mode (cell range, row range
//!   or ctrl-picked rows)
//! - `PointerEvent` - typed click/hover events interpreted against the state
//! - `CellRegion` / `RowInterval` - canonical rectangles and row intervals
//!
//! Nothing here performs I/O. Reading rendered values, talking to the backend
//! and writing to the clipboard live in `gridclip-services`.

mod coordinate;
mod ctrl_rows;
mod error;
mod interpreter;
mod normalize;
mod state;

pub use coordinate::*;
pub use ctrl_rows::CtrlRows;
pub use error::*;
pub use interpreter::*;
pub use normalize::*;
pub use state::*;
