//! Tile contents.

use serde::Serialize;

use super::Colour;

/// The attributes held by a single grid cell.
///
/// A tile with no attributes is an empty cell. Only tiles carrying an
/// icon can be picked up and dragged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Tile {
    /// Display icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Background colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<Colour>,
}

impl Tile {
    /// The empty tile.
    pub const fn empty() -> Self {
        Self {
            icon: None,
            bg: None,
        }
    }

    /// Create a tile with an icon on a background colour.
    pub fn new(icon: impl Into<String>, bg: Colour) -> Self {
        Self {
            icon: Some(icon.into()),
            bg: Some(bg),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_bg(mut self, bg: Colour) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Whether the tile has no attributes at all.
    pub fn is_empty(&self) -> bool {
        self.icon.is_none() && self.bg.is_none()
    }

    /// Whether the tile carries an icon (and so can be dragged).
    pub fn has_icon(&self) -> bool {
        self.icon.is_some()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}
