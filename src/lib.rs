//! tilegrid - drag-and-drop tile grid editor
//!
//! A library for editing a fixed-size grid of tiles built from a
//! text template. Tiles with an icon can be dragged and dropped onto
//! empty cells; every drop swaps the two cells and produces a new grid,
//! leaving earlier grids intact as snapshots.

pub mod cli;
pub mod config;
pub mod error;
pub mod interaction;
pub mod output;
pub mod parser;
pub mod types;
pub mod validation;
pub mod view;

pub use config::{Config, CONFIG_FILENAME};
pub use error::{GridError, Result};
pub use interaction::{DragPayload, DragSession, DragSource, DropTarget, Gesture, Role};
pub use parser::{parse_template, parse_template_with, DEFAULT_TEMPLATE};
pub use types::{Colour, Grid, GridMetadata, Legend, Location, PlacedTile, Tile};
pub use validation::{validate_template, Diagnostic, Severity, ValidationResult};
pub use view::{CellView, Editor};
