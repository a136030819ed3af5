//! Play command implementation.
//!
//! Each `--move FROM:TO` is performed as a full drag gesture (pick up at
//! FROM, hover TO, drop on TO) through the editor, so moves obey the same
//! rules as a pointer would: only tiles with an icon can be picked up and
//! only cells without one accept a drop.

use std::fmt;
use std::str::FromStr;

use clap::Args;
use log::warn;

use super::{print_grid, OutputFormat, TemplateArgs};
use crate::error::{GridError, Result};
use crate::interaction::{Gesture, Role};
use crate::output::{plural, Printer};
use crate::types::{Grid, Location};
use crate::view::Editor;

/// Drag tiles around a template and print the result
#[derive(Args, Debug)]
pub struct PlayArgs {
    #[command(flatten)]
    pub input: TemplateArgs,

    /// Move to perform, as `row,col:row,col` (repeatable, applied in order)
    #[arg(long = "move", short = 'm', value_name = "FROM:TO", required = true)]
    pub moves: Vec<MoveSpec>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// A drag from one cell to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSpec {
    pub from: Location,
    pub to: Location,
}

impl FromStr for MoveSpec {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        let (from, to) = s.split_once(':').ok_or_else(|| GridError::Parse {
            message: format!("Invalid move: {}", s),
            help: Some("Use `row,col:row,col`, e.g. `4,5:0,0`".to_string()),
        })?;

        Ok(Self {
            from: from.parse()?,
            to: to.parse()?,
        })
    }
}

impl fmt::Display for MoveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

pub fn run(args: PlayArgs, printer: &Printer) -> Result<()> {
    let loaded = args.input.load()?;
    let mut editor = Editor::from_template(&loaded.source, &loaded.legend)?;

    printer.status(
        "Parsed",
        &format!(
            "{} ({}x{})",
            loaded.name,
            editor.grid().width(),
            editor.grid().height()
        ),
    );

    let skipped = play(&mut editor, &args.moves, printer)?;

    printer.info(
        "Applied",
        &format!(
            "{}, {} skipped",
            plural(editor.moves(), "move", "moves"),
            skipped
        ),
    );

    print_grid(&editor, args.format)
}

/// Drag each move in turn, skipping the ones the grid rejects.
///
/// Fails before touching the grid if a move names a cell outside it.
/// Returns the number of skipped moves.
pub fn play(editor: &mut Editor, moves: &[MoveSpec], printer: &Printer) -> Result<usize> {
    let mut skipped = 0;

    for spec in moves {
        editor.grid().tile(spec.from)?;
        editor.grid().tile(spec.to)?;

        let reason = rejection(editor.grid(), *spec);
        if drag(editor, *spec)? {
            printer.status("Moved", &spec.to_string());
        } else {
            let reason = reason.unwrap_or("drop was not accepted");
            warn!("skipped move {}: {}", spec, reason);
            printer.warning("Skipped", &format!("{} ({})", spec, reason));
            skipped += 1;
        }
    }

    Ok(skipped)
}

/// Perform a move as a drag gesture sequence. Returns whether it was applied.
pub fn drag(editor: &mut Editor, spec: MoveSpec) -> Result<bool> {
    editor.dispatch(Gesture::DragStart(spec.from))?;
    editor.dispatch(Gesture::DragEnter(spec.to))?;
    editor.dispatch(Gesture::Drop(spec.to))
}

/// Why a drag would not be accepted on this grid, if it would not.
fn rejection(grid: &Grid, spec: MoveSpec) -> Option<&'static str> {
    let role = |location: Location| grid.get(location).map(|tile| Role::for_tile(tile, location));

    match (role(spec.from), role(spec.to)) {
        (Some(Role::DropTarget(_)), _) => Some("no tile to pick up"),
        (_, Some(Role::DragSource(_))) => Some("destination is occupied"),
        _ => None,
    }
}
