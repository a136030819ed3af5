//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use super::load_config;
use crate::config::read_template;
use crate::error::{GridError, Result};
use crate::output::{plural, Printer};
use crate::validation::validate_template;

/// Validate template files
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Configuration file providing the legend (default: ./tilegrid.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let legend = load_config(args.config.as_deref())?.legend()?;

    let mut errors = 0;
    let mut failed_files = 0;
    let mut unreadable = 0;

    for file in &args.files {
        let source = match read_template(file) {
            Ok(source) => source,
            Err(e) => {
                printer.error("Unreadable", &e.to_string());
                unreadable += 1;
                continue;
            }
        };

        let result = validate_template(&source, &legend);
        printer.validation(file, &result);

        if result.has_errors() {
            errors += result.error_count();
            failed_files += 1;
        }
    }

    if errors == 0 && unreadable == 0 {
        printer.status("Finished", &format!("{} valid", plural(args.files.len(), "file", "files")));
        return Ok(());
    }

    let mut problems = Vec::new();
    if errors > 0 {
        problems.push(format!(
            "{} in {}",
            plural(errors, "error", "errors"),
            plural(failed_files, "file", "files")
        ));
    }
    if unreadable > 0 {
        problems.push(format!("{} unreadable", plural(unreadable, "file", "files")));
    }

    Err(GridError::Validation {
        message: problems.join(", "),
        help: None,
    })
}
