use clap::Parser;
use miette::Result;
use tilegrid::cli::{Cli, Commands};
use tilegrid::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let printer = Printer::new();

    match cli.command {
        Commands::Show(args) => tilegrid::cli::show::run(args, &printer)?,
        Commands::Play(args) => tilegrid::cli::play::run(args, &printer)?,
        Commands::Validate(args) => tilegrid::cli::validate::run(args, &printer)?,
        Commands::Init(args) => tilegrid::cli::init::run(args, &printer)?,
        Commands::Completions(args) => tilegrid::cli::completions::run(args)?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
