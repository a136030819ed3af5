//! Drag gesture state machine.
//!
//! A `DragSession` follows one drag at a time: it starts on a drag source,
//! tracks which drop target is hovered, and ends on a drop or a cancel.
//! A drop on a drop target reports exactly one move through the callback
//! passed to [`DragSession::handle`], synchronously.

use log::trace;

use super::role::{DragPayload, Role};
use crate::types::{Grid, Location};

/// Opacity of the source tile while it is being dragged.
pub const DRAGGING_OPACITY: f32 = 0.5;

/// A single drag and drop input event, addressed to a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// The pointer picked up the tile at a location.
    DragStart(Location),
    /// A drag moved over a cell.
    DragEnter(Location),
    /// A drag left a cell.
    DragLeave(Location),
    /// The dragged tile was released over a cell.
    Drop(Location),
    /// The drag ended outside any cell.
    Cancel,
}

/// Drag state for one grid view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    payload: Option<DragPayload>,
    hovered: Option<Location>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    /// The payload of the drag in progress.
    pub fn payload(&self) -> Option<DragPayload> {
        self.payload
    }

    /// The drop target currently hovered by the drag.
    pub fn hovered(&self) -> Option<Location> {
        self.hovered
    }

    /// Apply a gesture against the grid as currently rendered.
    ///
    /// Returns the callback's result when the gesture completed a move,
    /// `None` otherwise. The drag always ends on `Drop` and `Cancel`.
    pub fn handle<F, R>(&mut self, grid: &Grid, gesture: Gesture, on_move: F) -> Option<R>
    where
        F: FnOnce(Location, Location) -> R,
    {
        trace!("gesture {:?}", gesture);

        match gesture {
            Gesture::DragStart(location) => {
                if self.payload.is_some() {
                    trace!("drag already active, ignoring start at {}", location);
                    return None;
                }
                match role_at(grid, location) {
                    Some(Role::DragSource(source)) => {
                        self.payload = Some(source.begin());
                        self.hovered = None;
                    }
                    _ => trace!("no drag source at {}", location),
                }
                None
            }
            Gesture::DragEnter(location) => {
                if self.payload.is_some() {
                    self.hovered = role_at(grid, location)
                        .and_then(|role| role.as_drop_target())
                        .map(|target| target.location);
                }
                None
            }
            Gesture::DragLeave(location) => {
                if self.hovered == Some(location) {
                    self.hovered = None;
                }
                None
            }
            Gesture::Drop(location) => {
                self.hovered = None;
                let payload = self.payload.take()?;
                match role_at(grid, location).and_then(|role| role.as_drop_target()) {
                    Some(target) => Some(target.accept(payload, on_move)),
                    None => {
                        trace!("drop at {} is not a drop target", location);
                        None
                    }
                }
            }
            Gesture::Cancel => {
                self.payload = None;
                self.hovered = None;
                None
            }
        }
    }

    /// Opacity for the tile at a location: dimmed while it is being dragged.
    pub fn opacity(&self, location: Location) -> f32 {
        match self.payload {
            Some(payload) if payload.location == location => DRAGGING_OPACITY,
            _ => 1.0,
        }
    }

    /// Whether the tile at a location is the hovered drop target.
    pub fn is_highlighted(&self, location: Location) -> bool {
        self.payload.is_some() && self.hovered == Some(location)
    }
}

fn role_at(grid: &Grid, location: Location) -> Option<Role> {
    grid.get(location).map(|tile| Role::for_tile(tile, location))
}
