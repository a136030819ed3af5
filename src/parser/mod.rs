//! Parser for grid template files.
//!
//! # Usage
//!
//! ```
//! use tilegrid::parser::parse_template;
//! use tilegrid::Legend;
//!
//! let grid = parse_template(". x .\n. . .", &Legend::default()).unwrap();
//! assert_eq!(grid.size(), (3, 2));
//! ```

pub mod span;
pub mod template;

pub use span::{Position, Span, Spanned};
pub use template::{
    parse_template, parse_template_with, token_glyph, tokenize, TemplateRow, DEFAULT_TEMPLATE,
};
