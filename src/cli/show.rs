//! Show command implementation.

use clap::Args;

use super::{print_grid, OutputFormat, TemplateArgs};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::view::Editor;

/// Parse a template and print the grid
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub input: TemplateArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: ShowArgs, printer: &Printer) -> Result<()> {
    let loaded = args.input.load()?;
    let editor = Editor::from_template(&loaded.source, &loaded.legend)?;
    let grid = editor.grid();

    printer.status(
        "Parsed",
        &format!(
            "{} ({}x{}, {})",
            loaded.name,
            grid.width(),
            grid.height(),
            plural(grid.occupied_count(), "tile", "tiles")
        ),
    );

    print_grid(&editor, args.format)
}
