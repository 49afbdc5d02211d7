//! Pointer event interpretation.
//!
//! The UI layer builds one [`PointerEvent`] per click or hover from the cell
//! key on the event target and the modifier keys held. [`SelectionState::apply`]
//! turns the event into a state transition and reports what happened so the
//! host knows when to open the export view.

use serde::{Deserialize, Serialize};

use crate::coordinate::CellCoordinate;
use crate::error::GridResult;
use crate::state::{RangePhase, SelectionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Click,
    Hover,
}

/// Modifier keys held while the event fired
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };
}

/// A discrete pointer event resolved against a rendered cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerEvent {
    pub coordinate: CellCoordinate,
    pub kind: PointerKind,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn click(coordinate: CellCoordinate, modifiers: Modifiers) -> Self {
        Self {
            coordinate,
            kind: PointerKind::Click,
            modifiers,
        }
    }

    pub fn hover(coordinate: CellCoordinate, modifiers: Modifiers) -> Self {
        Self {
            coordinate,
            kind: PointerKind::Hover,
            modifiers,
        }
    }

    /// Build an event from the `"<column>|<row>"` key found on the event target
    pub fn from_cell_key(key: &str, kind: PointerKind, modifiers: Modifiers) -> GridResult<Self> {
        Ok(Self {
            coordinate: key.parse()?,
            kind,
            modifiers,
        })
    }
}

/// Result of applying a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerOutcome {
    /// The event did not qualify; state is unchanged
    Ignored,
    /// A new range selection began
    Started,
    /// The focus of a pending range moved
    Extended,
    /// A range was closed and is ready for export
    Finalized,
    /// A row was added to or removed from the ctrl-picked rows
    Toggled { row: usize, selected: bool },
    /// An unmodified click replaced the previous selection with a fresh one
    Restarted,
}

impl PointerOutcome {
    /// Whether the selection changed
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

impl SelectionState {
    /// Apply a pointer event.
    ///
    /// Coordinates are trusted as given; bounds belong to the renderer.
    pub fn apply(&mut self, event: &PointerEvent) -> PointerOutcome {
        let outcome = match event.kind {
            PointerKind::Hover => self.apply_hover(event),
            PointerKind::Click => self.apply_click(event),
        };

        if outcome.changed() {
            tracing::trace!(
                coordinate = %event.coordinate,
                kind = ?event.kind,
                shift = event.modifiers.shift,
                ctrl = event.modifiers.ctrl,
                ?outcome,
                mode = ?self.mode(),
                "selection updated"
            );
        }

        outcome
    }

    /// Shift-hover moves the focus of a pending range of the matching kind.
    ///
    /// Once finalized, a range keeps its focus while further shift-hovers
    /// arrive. Grids that keep dragging the range end on every hover until the
    /// next click differ here; the export view opened on finalize shows the
    /// text that will be copied.
    fn apply_hover(&mut self, event: &PointerEvent) -> PointerOutcome {
        if !event.modifiers.shift {
            return PointerOutcome::Ignored;
        }

        let coordinate = event.coordinate;
        match self {
            Self::CellRange {
                focus,
                phase: RangePhase::Pending,
                ..
            } if !coordinate.is_row_header() => {
                if *focus == coordinate {
                    return PointerOutcome::Ignored;
                }
                *focus = coordinate;
                PointerOutcome::Extended
            }
            Self::RowRange {
                focus,
                phase: RangePhase::Pending,
                ..
            } if coordinate.is_row_header() => {
                if *focus == coordinate.row {
                    return PointerOutcome::Ignored;
                }
                *focus = coordinate.row;
                PointerOutcome::Extended
            }
            _ => PointerOutcome::Ignored,
        }
    }

    fn apply_click(&mut self, event: &PointerEvent) -> PointerOutcome {
        let coordinate = event.coordinate;

        if event.modifiers.shift {
            return self.apply_shift_click(coordinate);
        }

        if event.modifiers.ctrl {
            if !coordinate.is_row_header() {
                return PointerOutcome::Ignored;
            }
            return match self {
                Self::CtrlRows { rows } => {
                    let selected = rows.toggle(coordinate.row);
                    PointerOutcome::Toggled {
                        row: coordinate.row,
                        selected,
                    }
                }
                _ => {
                    *self = Self::ctrl_rows(coordinate.row);
                    PointerOutcome::Toggled {
                        row: coordinate.row,
                        selected: true,
                    }
                }
            };
        }

        if self.is_empty() {
            return PointerOutcome::Ignored;
        }

        *self = Self::fresh_range(coordinate);
        PointerOutcome::Restarted
    }

    fn apply_shift_click(&mut self, coordinate: CellCoordinate) -> PointerOutcome {
        match self {
            Self::RowRange { focus, phase, .. } if coordinate.is_row_header() => {
                *focus = coordinate.row;
                *phase = RangePhase::Finalized;
                PointerOutcome::Finalized
            }
            Self::CellRange { focus, phase, .. } if !coordinate.is_row_header() => {
                *focus = coordinate;
                *phase = RangePhase::Finalized;
                PointerOutcome::Finalized
            }
            _ => {
                *self = Self::fresh_range(coordinate);
                PointerOutcome::Started
            }
        }
    }

    fn fresh_range(coordinate: CellCoordinate) -> Self {
        if coordinate.is_row_header() {
            Self::row_range(coordinate.row)
        } else {
            Self::cell_range(coordinate)
        }
    }
}
