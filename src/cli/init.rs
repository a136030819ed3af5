//! Init command implementation.
//!
//! Writes a starter `tilegrid.yaml` and the default template next to it.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::CONFIG_FILENAME;
use crate::error::{GridError, Result};
use crate::output::{display_path, Printer};
use crate::parser::DEFAULT_TEMPLATE;

/// File name of the starter template.
pub const TEMPLATE_FILENAME: &str = "default.grid";

/// Write a starter tilegrid.yaml and template
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);
    let template_path = args.path.join(TEMPLATE_FILENAME);

    for path in [&config_path, &template_path] {
        if path.exists() && !args.force {
            return Err(GridError::Validation {
                message: format!("{} already exists", display_path(path)),
                help: Some("Use --force to overwrite".to_string()),
            });
        }
    }

    write_file(&template_path, &starter_template())?;
    printer.status("Created", &display_path(&template_path));

    write_file(&config_path, &starter_config())?;
    printer.status("Created", &display_path(&config_path));

    Ok(())
}

/// The default template without its indentation and blank lines.
fn starter_template() -> String {
    DEFAULT_TEMPLATE
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("{}\n", line))
        .collect()
}

fn starter_config() -> String {
    let mut yaml = String::new();
    yaml.push_str(&format!("template: {}\n", TEMPLATE_FILENAME));
    yaml.push_str("legend:\n");
    yaml.push_str("  \".\": {}\n");
    yaml.push_str("  \"x\": { icon: \"X\", bg: gray }\n");
    yaml
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| GridError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}
