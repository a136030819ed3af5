//! Validation checks for grid templates.
//!
//! Each check takes the tokenized template rows and returns a
//! `ValidationResult`.

use std::collections::BTreeSet;

use crate::parser::{token_glyph, TemplateRow};
use crate::types::Legend;

use super::warning::{Diagnostic, ValidationResult};

/// Check for a template with no rows at all.
pub fn check_empty_template(rows: &[TemplateRow]) -> ValidationResult {
    let mut result = ValidationResult::new();

    if rows.is_empty() {
        result.push(
            Diagnostic::error("tilegrid::validate::empty-template", "Template has no rows")
                .with_help("Add at least one row of whitespace-separated glyphs"),
        );
    }

    result
}

/// Check that every row has as many cells as the first.
pub fn check_row_lengths(rows: &[TemplateRow]) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(first) = rows.first() else {
        return result;
    };
    let width = first.tokens.len();

    for row in &rows[1..] {
        if row.tokens.len() != width {
            let mut diagnostic = Diagnostic::error(
                "tilegrid::validate::ragged-rows",
                format!(
                    "Row on line {} has {} cell(s), expected {}",
                    row.line,
                    row.tokens.len(),
                    width
                ),
            )
            .with_help(format!("Line {} sets the row width", first.line));
            if let Some(token) = row.tokens.first() {
                diagnostic = diagnostic.at(token.span.start);
            }
            result.push(diagnostic);
        }
    }

    result
}

/// Warn about tokens longer than one character.
pub fn check_multi_char_tokens(rows: &[TemplateRow]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for token in rows.iter().flat_map(|row| &row.tokens) {
        if token_glyph(&token.value).is_none() {
            result.push(
                Diagnostic::warning(
                    "tilegrid::validate::multi-char-token",
                    format!("Token '{}' is not a single glyph and will be empty", token.value),
                )
                .at(token.span.start)
                .with_help("Separate glyphs with whitespace"),
            );
        }
    }

    result
}

/// Warn once per glyph that has no legend entry.
pub fn check_unknown_glyphs(rows: &[TemplateRow], legend: &Legend) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut reported = BTreeSet::new();

    for token in rows.iter().flat_map(|row| &row.tokens) {
        let Some(glyph) = token_glyph(&token.value) else {
            continue;
        };
        if !legend.contains(glyph) && reported.insert(glyph) {
            result.push(
                Diagnostic::warning(
                    "tilegrid::validate::unknown-glyph",
                    format!("Glyph '{}' is not in the legend and will be empty", glyph),
                )
                .at(token.span.start)
                .with_help(format!("Known glyphs: {}", describe_glyphs(legend))),
            );
        }
    }

    result
}

/// Warn when nothing can be dragged or nothing can be dropped onto.
pub fn check_playable(rows: &[TemplateRow], legend: &Legend) -> ValidationResult {
    let mut result = ValidationResult::new();

    if rows.is_empty() {
        return result;
    }

    let (sources, targets) = rows
        .iter()
        .flat_map(|row| &row.tokens)
        .map(|token| token_glyph(&token.value).is_some_and(|glyph| legend.lookup(glyph).has_icon()))
        .fold((0, 0), |(sources, targets), has_icon| {
            if has_icon {
                (sources + 1, targets)
            } else {
                (sources, targets + 1)
            }
        });

    if sources == 0 {
        result.push(
            Diagnostic::warning(
                "tilegrid::validate::no-drag-source",
                "No tile has an icon, so nothing can be dragged",
            )
            .with_help("Place at least one marked glyph (e.g. 'x')"),
        );
    }

    if targets == 0 {
        result.push(
            Diagnostic::warning(
                "tilegrid::validate::no-drop-target",
                "Every tile has an icon, so there is nowhere to drop",
            )
            .with_help("Leave at least one empty cell ('.')"),
        );
    }

    result
}

fn describe_glyphs(legend: &Legend) -> String {
    legend
        .glyphs()
        .iter()
        .map(|glyph| format!("'{}'", glyph))
        .collect::<Vec<_>>()
        .join(", ")
}
