//! Grid template parser.
//!
//! A template is a block of text with one grid row per line and one
//! single-character token per cell, tokens separated by whitespace:
//!
//! ```text
//! . . . .
//! . x . .
//! . . . .
//! ```
//!
//! Blank lines are skipped, so templates may be indented and surrounded
//! by empty lines. Every row must have the same number of tokens.

use log::debug;

use super::span::{Span, Spanned};
use crate::error::{GridError, Result};
use crate::types::{Grid, Legend, Tile};

/// The built-in 10x10 template with a single marked tile at (4, 5).
pub const DEFAULT_TEMPLATE: &str = "
    . . . . . . . . . .
    . . . . . . . . . .
    . . . . . . . . . .
    . . . . . . . . . .
    . . . . . x . . . .
    . . . . . . . . . .
    . . . . . . . . . .
    . . . . . . . . . .
    . . . . . . . . . .
    . . . . . . . . . .
";

/// One non-blank template line, split into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRow {
    /// Source line number (1-indexed).
    pub line: u32,
    /// Whitespace-separated tokens with their source spans.
    pub tokens: Vec<Spanned<String>>,
}

/// Split a template into rows of tokens, skipping blank lines.
pub fn tokenize(source: &str) -> Vec<TemplateRow> {
    let mut rows = Vec::new();
    let mut offset = 0;

    for (index, line) in source.split('\n').enumerate() {
        let tokens: Vec<Spanned<String>> = split_tokens(line)
            .into_iter()
            .map(|(start, token)| {
                let start = offset + start;
                let span = Span::from_offsets(source, start, start + token.len());
                Spanned::new(token.to_string(), span)
            })
            .collect();

        if !tokens.is_empty() {
            rows.push(TemplateRow {
                line: index as u32 + 1,
                tokens,
            });
        }

        offset += line.len() + 1;
    }

    rows
}

/// The glyph a token stands for, if it is exactly one character.
pub fn token_glyph(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(glyph), None) => Some(glyph),
        _ => None,
    }
}

/// Parse a template, resolving glyphs through a legend.
pub fn parse_template(source: &str, legend: &Legend) -> Result<Grid> {
    parse_template_with(source, |glyph| legend.lookup(glyph))
}

/// Parse a template, resolving glyphs with a mapping function.
///
/// Tokens longer than one character are not glyphs and become empty tiles.
pub fn parse_template_with<F>(source: &str, mut glyph_tile: F) -> Result<Grid>
where
    F: FnMut(char) -> Tile,
{
    let rows = tokenize(source);

    let mut expected: Option<(usize, u32)> = None;
    let mut cells = Vec::new();

    for row in &rows {
        let (width, first_line) = *expected.get_or_insert((row.tokens.len(), row.line));
        if row.tokens.len() != width {
            return Err(GridError::Parse {
                message: format!(
                    "line {}: row has {} cell(s), expected {} (as on line {})",
                    row.line,
                    row.tokens.len(),
                    width,
                    first_line
                ),
                help: Some("Every row of a template must have the same number of cells".to_string()),
            });
        }

        cells.extend(
            row.tokens
                .iter()
                .map(|token| token_glyph(&token.value).map_or_else(Tile::empty, &mut glyph_tile)),
        );
    }

    let width = expected.map_or(0, |(width, _)| width);
    let grid = Grid::from_cells(width, rows.len(), cells)?;

    debug!(
        "parsed {}x{} template ({} occupied)",
        grid.width(),
        grid.height(),
        grid.occupied_count()
    );

    Ok(grid)
}

/// Split a line on whitespace, keeping each token's byte offset.
fn split_tokens(line: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push((s, &line[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        tokens.push((s, &line[s..]));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, Location};

    #[test]
    fn test_parse_single_row() {
        let grid = parse_template("x .", &Legend::default()).unwrap();

        assert_eq!(grid.size(), (2, 1));
        assert_eq!(grid.get(Location::new(0, 0)), Some(&Tile::new("X", Colour::GRAY)));
        assert_eq!(grid.get(Location::new(0, 1)), Some(&Tile::empty()));
    }

    #[test]
    fn test_parse_default_template() {
        let grid = parse_template(DEFAULT_TEMPLATE, &Legend::default()).unwrap();

        assert_eq!(grid.size(), (10, 10));
        assert_eq!(grid.occupied_count(), 1);
        assert!(grid.get(Location::new(4, 5)).unwrap().has_icon());
    }

    #[test]
    fn test_dimensions_match_tokens() {
        let grid = Grid::from_template(". . .\n. . .\n. . .\n. . .").unwrap();

        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.locations().count(), 12);
    }

    #[test]
    fn test_unknown_glyph_is_empty() {
        let grid = Grid::from_template("? # x").unwrap();

        assert!(grid.get(Location::new(0, 0)).unwrap().is_empty());
        assert!(grid.get(Location::new(0, 1)).unwrap().is_empty());
        assert!(grid.get(Location::new(0, 2)).unwrap().has_icon());
    }

    #[test]
    fn test_multi_char_token_is_empty() {
        let grid = Grid::from_template("xx .").unwrap();

        assert_eq!(grid.width(), 2);
        assert!(grid.get(Location::new(0, 0)).unwrap().is_empty());
    }

    #[test]
    fn test_ragged_rows_fail() {
        let source = "\n  . . .\n  . .\n";

        let err = parse_template(source, &Legend::default()).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("line 3"), "{}", message);
        assert!(message.contains("row has 2 cell(s), expected 3"), "{}", message);
    }

    #[test]
    fn test_tabs_and_extra_spaces() {
        let grid = Grid::from_template("x\t.   .\r\n.  . x\r\n").unwrap();

        assert_eq!(grid.size(), (3, 2));
        assert!(grid.get(Location::new(1, 2)).unwrap().has_icon());
    }

    #[test]
    fn test_empty_template() {
        let grid = Grid::from_template("\n   \n").unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.size(), (0, 0));
    }

    #[test]
    fn test_deterministic() {
        let a = Grid::from_template(DEFAULT_TEMPLATE).unwrap();
        let b = Grid::from_template(DEFAULT_TEMPLATE).unwrap();

        assert_eq!(a, b);
        assert!(!a.shares_storage(&b));
    }

    #[test]
    fn test_custom_mapping_function() {
        let grid = parse_template_with("a b", |glyph| Tile::empty().with_icon(glyph.to_string())).unwrap();

        assert_eq!(grid.get(Location::new(0, 1)).unwrap().icon(), Some("b"));
    }

    #[test]
    fn test_tokenize_spans() {
        let rows = tokenize("\n  x .\n");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[0].tokens[1].value, ".");
        assert_eq!(rows[0].tokens[1].span.start.line, 2);
        assert_eq!(rows[0].tokens[1].span.start.column, 5);
    }

    #[test]
    fn test_token_glyph() {
        assert_eq!(token_glyph("x"), Some('x'));
        assert_eq!(token_glyph("é"), Some('é'));
        assert_eq!(token_glyph("xy"), None);
        assert_eq!(token_glyph(""), None);
    }
}
