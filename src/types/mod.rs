//! Core domain types for tilegrid.
//!
//! This module contains the grid model:
//! - `Location` - zero-based grid coordinates
//! - `Tile` - cell contents (icon and background colour)
//! - `Colour` - RGBA colour values
//! - `Legend` - template glyph to tile mapping
//! - `Grid` - the immutable-update tile matrix

mod colour;
mod grid;
mod legend;
mod location;
mod tile;

pub use colour::Colour;
pub use grid::{Grid, GridMetadata, PlacedTile};
pub use legend::{Legend, EMPTY_GLYPH, MARKER_GLYPH};
pub use location::Location;
pub use tile::Tile;
