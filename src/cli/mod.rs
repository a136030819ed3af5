pub mod completions;
pub mod init;
pub mod play;
pub mod show;
pub mod validate;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{read_template, Config};
use crate::error::Result;
use crate::output::display_path;
use crate::parser::DEFAULT_TEMPLATE;
use crate::types::Legend;
use crate::view::Editor;

/// tilegrid - drag-and-drop tile grid editor
#[derive(Parser, Debug)]
#[command(name = "tilegrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a template and print the grid
    Show(show::ShowArgs),

    /// Drag tiles around a template and print the result
    Play(play::PlayArgs),

    /// Validate template files
    Validate(validate::ValidateArgs),

    /// Write a starter tilegrid.yaml and template
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// How grids are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per row, icon or `.` per cell
    #[default]
    Text,
    /// Grid size and non-empty tiles as JSON
    Json,
}

/// Template selection shared by commands that load a grid.
#[derive(Args, Debug, Default)]
pub struct TemplateArgs {
    /// Template file (default: from tilegrid.yaml, else the built-in 10x10 grid)
    pub template: Option<PathBuf>,

    /// Configuration file (default: ./tilegrid.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

/// A template and the legend to parse it with.
#[derive(Debug)]
pub struct LoadedTemplate {
    /// Display name of where the template came from.
    pub name: String,
    pub source: String,
    pub legend: Legend,
}

impl TemplateArgs {
    /// Resolve the configuration, legend and template source.
    pub fn load(&self) -> Result<LoadedTemplate> {
        let config = load_config(self.config.as_deref())?;
        let legend = config.legend()?;

        let template = self.template.clone().or_else(|| config.template_path());
        let (name, source) = match template {
            Some(path) => (display_path(&path), read_template(&path)?),
            None => ("built-in template".to_string(), DEFAULT_TEMPLATE.to_string()),
        };

        Ok(LoadedTemplate {
            name,
            source,
            legend,
        })
    }
}

/// Load an explicit configuration file, or discover one in the working directory.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::discover(Path::new("."))?.unwrap_or_default()),
    }
}

/// Write the editor's current grid to stdout.
pub fn print_grid(editor: &Editor, format: OutputFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match format {
        OutputFormat::Text => stdout.write_all(editor.render_text().as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &editor.grid().metadata())
                .map_err(io::Error::from)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
