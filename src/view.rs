//! Grid editor: the owner of the current grid.
//!
//! The `Editor` holds the single current `Grid` and the drag state. Each
//! render produces one `CellView` per grid entry; each gesture goes
//! through the drag session, and a completed drop replaces the grid
//! before `dispatch` returns, so the next render always sees a fully
//! swapped grid.

use log::debug;
use serde::Serialize;

use crate::error::Result;
use crate::interaction::{DragSession, Gesture, Role};
use crate::parser::parse_template;
use crate::types::{Grid, Legend, Location, Tile};

/// One rendered grid cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    /// Stable per-cell key (`row.col`).
    pub key: String,
    pub location: Location,
    pub tile: Tile,
    #[serde(serialize_with = "serialize_role_name")]
    pub role: Role,
    /// 0.5 while this tile is being dragged, 1.0 otherwise.
    pub opacity: f32,
    /// Whether a drag is hovering over this drop target.
    pub highlighted: bool,
}

/// Owns the current grid and applies moves to it.
#[derive(Debug, Clone)]
pub struct Editor {
    grid: Grid,
    session: DragSession,
    moves: usize,
}

impl Editor {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            session: DragSession::new(),
            moves: 0,
        }
    }

    /// Build an editor from a template.
    pub fn from_template(source: &str, legend: &Legend) -> Result<Self> {
        Ok(Self::new(parse_template(source, legend)?))
    }

    /// The current grid. Cloning it is cheap and the clone stays valid
    /// after later moves.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Number of moves applied so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Produce one view per grid cell, row-major.
    pub fn render(&self) -> Vec<CellView> {
        self.grid
            .iter_cells()
            .map(|(location, tile)| CellView {
                key: location.to_string(),
                location,
                tile: tile.clone(),
                role: Role::for_tile(tile, location),
                opacity: self.session.opacity(location),
                highlighted: self.session.is_highlighted(location),
            })
            .collect()
    }

    /// Plain text rendering: one line per row, icon or `.` per cell.
    pub fn render_text(&self) -> String {
        self.grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|tile| tile.icon().unwrap_or("."))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .map(|line| line + "\n")
            .collect()
    }

    /// Feed a gesture to the drag session.
    ///
    /// Returns `true` when the gesture completed a move, in which case the
    /// grid has already been replaced.
    pub fn dispatch(&mut self, gesture: Gesture) -> Result<bool> {
        let rendered = self.grid.clone();
        let Editor {
            grid,
            session,
            moves,
        } = self;

        match session.handle(&rendered, gesture, |from, to| {
            apply_move(grid, moves, from, to)
        }) {
            Some(applied) => applied.map(|()| true),
            None => Ok(false),
        }
    }

    /// Swap the tiles at two locations and make the result current.
    pub fn move_tile(&mut self, source: Location, destination: Location) -> Result<()> {
        apply_move(&mut self.grid, &mut self.moves, source, destination)
    }
}

fn serialize_role_name<S: serde::Serializer>(role: &Role, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(role.name())
}

fn apply_move(grid: &mut Grid, moves: &mut usize, source: Location, destination: Location) -> Result<()> {
    *grid = grid.swap(source, destination)?;
    *moves += 1;
    debug!("move {}: {} -> {}", moves, source, destination);
    Ok(())
}
