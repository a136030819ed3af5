//! Validation for grid templates.
//!
//! Runs a suite of checks against a template and reports errors and
//! warnings. Used by `tilegrid validate`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::parser::tokenize;
use crate::types::Legend;

/// Run all validation checks against a template.
pub fn validate_template(source: &str, legend: &Legend) -> ValidationResult {
    let rows = tokenize(source);

    [
        checks::check_empty_template(&rows),
        checks::check_row_lengths(&rows),
        checks::check_multi_char_tokens(&rows),
        checks::check_unknown_glyphs(&rows, legend),
        checks::check_playable(&rows, legend),
    ]
    .into_iter()
    .flatten()
    .collect()
}
