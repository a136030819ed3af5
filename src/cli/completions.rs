//! Shell completions generation.

use std::io::{self, Write};

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use super::Cli;
use crate::error::Result;

/// Generate shell completions
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut io::stdout().lock());
    Ok(())
}

/// Write the completion script for `shell`, covering every subcommand.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut out = Vec::new();
        write_completions(shell, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bash_completes_subcommands() {
        let script = script(Shell::Bash);

        assert!(script.contains("tilegrid"));
        for subcommand in ["show", "play", "validate", "init", "completions"] {
            assert!(script.contains(subcommand), "missing {}", subcommand);
        }
    }

    #[test]
    fn test_fish_completes_move_flag() {
        let script = script(Shell::Fish);
        assert!(script.contains("-l move"));
    }
}
