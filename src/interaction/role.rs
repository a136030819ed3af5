//! Drag and drop roles.

use serde::Serialize;

use crate::types::{Location, Tile};

/// What a drag gesture carries: the location it started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DragPayload {
    pub location: Location,
}

/// A tile that can be picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DragSource {
    pub location: Location,
}

impl DragSource {
    /// Start a drag from this tile.
    pub fn begin(&self) -> DragPayload {
        DragPayload {
            location: self.location,
        }
    }
}

/// A tile that accepts drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DropTarget {
    pub location: Location,
}

impl DropTarget {
    /// Accept a dropped payload, reporting the move `(from, to)` exactly once.
    ///
    /// A payload from this target's own location is still reported.
    pub fn accept<F, R>(&self, payload: DragPayload, on_move: F) -> R
    where
        F: FnOnce(Location, Location) -> R,
    {
        on_move(payload.location, self.location)
    }
}

/// The interaction role of a rendered tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "kebab-case")]
pub enum Role {
    DragSource(DragSource),
    DropTarget(DropTarget),
}

impl Role {
    /// Tiles with an icon are drag sources; everything else is a drop target.
    pub fn for_tile(tile: &Tile, location: Location) -> Self {
        if tile.has_icon() {
            Role::DragSource(DragSource { location })
        } else {
            Role::DropTarget(DropTarget { location })
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Role::DragSource(source) => source.location,
            Role::DropTarget(target) => target.location,
        }
    }

    /// Kebab-case role name, as used in serialized output.
    pub fn name(&self) -> &'static str {
        match self {
            Role::DragSource(_) => "drag-source",
            Role::DropTarget(_) => "drop-target",
        }
    }

    pub fn is_drag_source(&self) -> bool {
        matches!(self, Role::DragSource(_))
    }

    pub fn as_drop_target(&self) -> Option<DropTarget> {
        match self {
            Role::DropTarget(target) => Some(*target),
            Role::DragSource(_) => None,
        }
    }
}
