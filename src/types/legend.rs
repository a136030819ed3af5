//! Glyph legend for grid templates.
//!
//! The legend maps each template character to the tile it stands for.
//! Characters without an entry fall back to the empty tile rather than
//! failing.

use std::collections::HashMap;

use super::{Colour, Tile};

/// Template glyph for an empty cell.
pub const EMPTY_GLYPH: char = '.';

/// Template glyph for the default marked tile.
pub const MARKER_GLYPH: char = 'x';

/// Mapping from template glyphs to tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    entries: HashMap<char, Tile>,
}

impl Legend {
    /// A legend with no entries; every glyph maps to the empty tile.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace an entry, returning the previous tile.
    pub fn insert(&mut self, glyph: char, tile: Tile) -> Option<Tile> {
        self.entries.insert(glyph, tile)
    }

    /// Builder form of [`Legend::insert`].
    pub fn with(mut self, glyph: char, tile: Tile) -> Self {
        self.insert(glyph, tile);
        self
    }

    /// Get the tile for a glyph, if it has an entry.
    pub fn get(&self, glyph: char) -> Option<&Tile> {
        self.entries.get(&glyph)
    }

    /// Check if a glyph has an entry.
    pub fn contains(&self, glyph: char) -> bool {
        self.entries.contains_key(&glyph)
    }

    /// Resolve a glyph to a tile. Unknown glyphs resolve to the empty tile.
    pub fn lookup(&self, glyph: char) -> Tile {
        self.get(glyph).cloned().unwrap_or_default()
    }

    /// All glyphs with an entry, sorted.
    pub fn glyphs(&self) -> Vec<char> {
        let mut glyphs: Vec<char> = self.entries.keys().copied().collect();
        glyphs.sort();
        glyphs
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The built-in legend: `.` is empty, `x` is an `X` on gray.
impl Default for Legend {
    fn default() -> Self {
        Self::empty()
            .with(EMPTY_GLYPH, Tile::empty())
            .with(MARKER_GLYPH, Tile::new("X", Colour::GRAY))
    }
}
