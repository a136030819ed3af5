//! Drag and drop interaction.
//!
//! Every rendered tile takes one of two roles, chosen from its contents:
//! tiles with an icon are drag sources, all others are drop targets.
//! Dropping a dragged tile on a drop target reports a move
//! `(from, to)` to the owner of the grid.

mod role;
mod session;

pub use role::{DragPayload, DragSource, DropTarget, Role};
pub use session::{DragSession, Gesture, DRAGGING_OPACITY};
