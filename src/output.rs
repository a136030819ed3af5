//! Terminal output for the tilegrid CLI.
//!
//! Status lines and diagnostics go to stderr with right-aligned verbs,
//! coloured when stderr is a terminal. Grids are written to stdout.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::{Diagnostic, Severity, ValidationResult};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits colour codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// e.g. "     Parsed default.grid (10x10)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Print one validation diagnostic with its help text.
    pub fn diagnostic(&self, d: &Diagnostic) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "  {}", self.format_diagnostic(d));
        if let Some(help) = &d.help {
            let _ = writeln!(stderr, "    help: {}", help);
        }
    }

    /// Print all diagnostics followed by a one-line summary.
    pub fn validation(&self, file: &Path, result: &ValidationResult) {
        for d in result.iter() {
            self.diagnostic(d);
        }

        let errors = result.error_count();
        let warnings = result.warning_count();
        let path = display_path(file);

        if errors > 0 {
            self.error(
                "Failed",
                &format!("{} ({}, {})", path, plural(errors, "error", "errors"), plural(warnings, "warning", "warnings")),
            );
        } else if warnings > 0 {
            self.warning("Checked", &format!("{} ({})", path, plural(warnings, "warning", "warnings")));
        } else {
            self.status("Checked", &path);
        }
    }

    fn format_diagnostic(&self, d: &Diagnostic) -> String {
        let label = format!("{}[{}]", d.severity, d.code);
        let label = if self.color {
            let color = match d.severity {
                Severity::Error => RED,
                Severity::Warning => YELLOW,
            };
            format!("{BOLD}{color}{label}{RESET}")
        } else {
            label
        };

        match d.position {
            Some(position) => format!("{} {}: {}", label, position, d.message),
            None => format!("{}: {}", label, d.message),
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "move", "moves")` → "1 move".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}
