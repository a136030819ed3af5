//! The tile grid.
//!
//! A `Grid` is a fixed-size, row-major matrix of tiles. It is never
//! mutated in place: every update returns a new `Grid` and leaves the
//! receiver untouched, so any clone held elsewhere stays a valid snapshot.
//! Storage is shared between snapshots and only copied when written.
//!
//! # Example
//!
//! ```
//! use tilegrid::{Grid, Location};
//!
//! let grid = Grid::from_template("x .").unwrap();
//! let moved = grid.swap(Location::new(0, 0), Location::new(0, 1)).unwrap();
//!
//! assert!(moved.get(Location::new(0, 0)).unwrap().is_empty());
//! assert!(grid.get(Location::new(0, 0)).unwrap().has_icon());
//! ```

use std::sync::Arc;

use log::debug;
use serde::Serialize;

use super::{Legend, Location, Tile};
use crate::error::{GridError, Result};

/// A fixed-size matrix of tiles with immutable point updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cells: `cells[row * width + col]`.
    cells: Arc<Vec<Tile>>,
}

impl Grid {
    /// Create a grid of empty tiles.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let count = cell_count(width, height)?;
        Self::from_cells(width, height, vec![Tile::empty(); count])
    }

    /// Create a grid from row-major cells.
    ///
    /// A grid with no columns or no rows has no cells, and is 0x0.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Tile>) -> Result<Self> {
        if cells.len() != cell_count(width, height)? {
            return Err(GridError::Parse {
                message: format!(
                    "{} cell(s) cannot fill a {}x{} grid",
                    cells.len(),
                    width,
                    height
                ),
                help: None,
            });
        }

        let (width, height) = if cells.is_empty() { (0, 0) } else { (width, height) };

        Ok(Self {
            width,
            height,
            cells: Arc::new(cells),
        })
    }

    /// Create a grid from rows, which must all be the same length.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(GridError::Parse {
                message: format!("row {} has {} cell(s), expected {}", index, row.len(), width),
                help: Some("Every row of a grid must have the same number of cells".to_string()),
            });
        }

        Self::from_cells(width, height, rows.into_iter().flatten().collect())
    }

    /// Parse a template using the built-in legend.
    pub fn from_template(source: &str) -> Result<Self> {
        crate::parser::parse_template(source, &Legend::default())
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether a location lies inside the grid.
    pub fn contains(&self, location: Location) -> bool {
        location.row < self.height && location.col < self.width
    }

    /// Get the tile at a location.
    pub fn get(&self, location: Location) -> Option<&Tile> {
        self.index(location).ok().map(|i| &self.cells[i])
    }

    /// Get the tile at a location, failing if it is out of bounds.
    pub fn tile(&self, location: Location) -> Result<&Tile> {
        let index = self.index(location)?;
        Ok(&self.cells[index])
    }

    /// Return a new grid with one cell replaced.
    pub fn with_tile(&self, location: Location, tile: Tile) -> Result<Grid> {
        let index = self.index(location)?;

        let mut cells = Arc::clone(&self.cells);
        Arc::make_mut(&mut cells)[index] = tile;

        Ok(Grid {
            width: self.width,
            height: self.height,
            cells,
        })
    }

    /// Swap the contents of two cells, returning the new grid.
    ///
    /// The destination receives the source tile and the source receives
    /// whatever the destination held, including emptiness. Swapping a cell
    /// with itself returns an equal grid.
    pub fn swap(&self, source: Location, destination: Location) -> Result<Grid> {
        let old_value = self.tile(source)?.clone();
        let new_value = self.tile(destination)?.clone();

        let one_replaced = self.with_tile(source, new_value)?;
        let both_replaced = one_replaced.with_tile(destination, old_value)?;

        debug!("swapped {} <-> {}", source, destination);
        Ok(both_replaced)
    }

    /// Iterate over all locations in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Location::new(row, col)))
    }

    /// Iterate over all cells with their locations.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Location, &Tile)> + '_ {
        self.locations().zip(self.cells.iter())
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Count cells holding a non-empty tile.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|tile| !tile.is_empty()).count()
    }

    /// Whether two grids share the same underlying storage.
    pub fn shares_storage(&self, other: &Grid) -> bool {
        Arc::ptr_eq(&self.cells, &other.cells)
    }

    /// Summary for JSON export.
    pub fn metadata(&self) -> GridMetadata {
        let tiles = self
            .iter_cells()
            .filter(|(_, tile)| !tile.is_empty())
            .map(|(location, tile)| PlacedTile {
                location: [location.row, location.col],
                tile: tile.clone(),
            })
            .collect();

        GridMetadata {
            size: [self.width, self.height],
            tiles,
        }
    }

    fn index(&self, location: Location) -> Result<usize> {
        if self.contains(location) {
            Ok(location.row * self.width + location.col)
        } else {
            Err(GridError::OutOfBounds {
                location,
                width: self.width,
                height: self.height,
            })
        }
    }
}

fn cell_count(width: usize, height: usize) -> Result<usize> {
    width.checked_mul(height).ok_or_else(|| GridError::Parse {
        message: format!("a {}x{} grid has too many cells", width, height),
        help: None,
    })
}

/// Metadata about a grid, for JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct GridMetadata {
    /// Cell dimensions [cols, rows].
    pub size: [usize; 2],

    /// Non-empty tiles, in row-major order.
    pub tiles: Vec<PlacedTile>,
}

/// A non-empty tile and where it sits.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedTile {
    /// [row, col].
    pub location: [usize; 2],

    #[serde(flatten)]
    pub tile: Tile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    fn marker() -> Tile {
        Tile::new("X", Colour::GRAY)
    }

    fn sample() -> Grid {
        Grid::from_rows(vec![
            vec![marker(), Tile::empty(), Tile::empty()],
            vec![Tile::empty(), Tile::new("O", Colour::YELLOW), Tile::empty()],
        ])
        .unwrap()
    }

    #[test]
    fn test_new_grid_is_empty_tiles() {
        let grid = Grid::new(3, 2).unwrap();

        assert_eq!(grid.size(), (3, 2));
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = Grid::from_rows(vec![vec![Tile::empty(); 2], vec![Tile::empty(); 3]]);

        let err = result.unwrap_err().to_string();
        assert!(err.contains("row 1 has 3 cell(s), expected 2"));
    }

    #[test]
    fn test_from_cells_rejects_wrong_count() {
        assert!(Grid::from_cells(2, 2, vec![Tile::empty(); 3]).is_err());
    }

    #[test]
    fn test_get_and_bounds() {
        let grid = sample();

        assert_eq!(grid.get(Location::new(0, 0)), Some(&marker()));
        assert_eq!(grid.get(Location::new(2, 0)), None);
        assert_eq!(grid.get(Location::new(0, 3)), None);
        assert!(grid.contains(Location::new(1, 2)));
        assert!(!grid.contains(Location::new(1, 3)));
    }

    #[test]
    fn test_tile_out_of_bounds_error() {
        let grid = sample();

        let err = grid.tile(Location::new(5, 1)).unwrap_err();
        assert!(matches!(
            err,
            GridError::OutOfBounds {
                location: Location { row: 5, col: 1 },
                width: 3,
                height: 2,
            }
        ));
    }

    #[test]
    fn test_with_tile_leaves_original_untouched() {
        let grid = sample();
        let updated = grid.with_tile(Location::new(0, 2), marker()).unwrap();

        assert_eq!(grid.get(Location::new(0, 2)), Some(&Tile::empty()));
        assert_eq!(updated.get(Location::new(0, 2)), Some(&marker()));
        assert!(!grid.shares_storage(&updated));
    }

    #[test]
    fn test_clone_shares_storage() {
        let grid = sample();
        let snapshot = grid.clone();

        assert!(grid.shares_storage(&snapshot));
    }

    #[test]
    fn test_swap_with_empty() {
        let grid = sample();
        let moved = grid.swap(Location::new(0, 0), Location::new(0, 1)).unwrap();

        assert_eq!(moved.get(Location::new(0, 0)), Some(&Tile::empty()));
        assert_eq!(moved.get(Location::new(0, 1)), Some(&marker()));
    }

    #[test]
    fn test_swap_two_occupied_cells() {
        let grid = sample();
        let moved = grid.swap(Location::new(0, 0), Location::new(1, 1)).unwrap();

        assert_eq!(moved.get(Location::new(0, 0)).and_then(Tile::icon), Some("O"));
        assert_eq!(moved.get(Location::new(1, 1)).and_then(Tile::icon), Some("X"));
    }

    #[test]
    fn test_swap_is_own_inverse() {
        let grid = sample();

        for a in grid.locations() {
            for b in grid.locations() {
                let there = grid.swap(a, b).unwrap();
                let back = there.swap(b, a).unwrap();
                assert_eq!(back, grid, "swap {} <-> {} did not invert", a, b);
            }
        }
    }

    #[test]
    fn test_self_swap_is_identity() {
        let grid = sample();

        for a in grid.locations() {
            assert_eq!(grid.swap(a, a).unwrap(), grid);
        }
    }

    #[test]
    fn test_swap_touches_only_two_cells() {
        let grid = sample();
        let a = Location::new(0, 0);
        let b = Location::new(1, 2);
        let moved = grid.swap(a, b).unwrap();

        for (location, tile) in grid.iter_cells() {
            if location != a && location != b {
                assert_eq!(moved.get(location), Some(tile));
            }
        }
    }

    #[test]
    fn test_swap_out_of_bounds() {
        let grid = sample();

        assert!(grid.swap(Location::new(0, 0), Location::new(2, 0)).is_err());
        assert!(grid.swap(Location::new(0, 9), Location::new(0, 0)).is_err());
    }

    #[test]
    fn test_rows_and_cells() {
        let grid = sample();

        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1].icon(), Some("O"));

        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[4].0, Location::new(1, 1));
    }

    #[test]
    fn test_empty_grid_rows() {
        let grid = Grid::new(0, 0).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 0);
        assert_eq!(grid.locations().count(), 0);
    }

    #[test]
    fn test_size_overflow_is_error() {
        assert!(matches!(
            Grid::from_cells(usize::MAX, 2, Vec::new()),
            Err(GridError::Parse { .. })
        ));
        assert!(Grid::new(2, usize::MAX).is_err());
    }

    #[test]
    fn test_rows_without_cells_are_zero_by_zero() {
        let grid = Grid::from_rows(vec![vec![], vec![]]).unwrap();

        assert_eq!(grid.size(), (0, 0));
        assert_eq!(grid.height(), grid.rows().count());
        assert_eq!(Grid::new(0, 5).unwrap().size(), (0, 0));
        assert_eq!(Grid::new(4, 0).unwrap().size(), (0, 0));
    }

    #[test]
    fn test_metadata_serialize() {
        let json = serde_json::to_string(&sample().metadata()).unwrap();

        assert!(json.contains("\"size\":[3,2]"));
        assert!(json.contains(r##"{"location":[0,0],"icon":"X","bg":"#808080"}"##));
        assert!(json.contains(r##"{"location":[1,1],"icon":"O","bg":"#FFFF00"}"##));
    }
}
