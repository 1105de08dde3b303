use clap::Parser;
use colored::Colorize;

use breathwork::cli::args::{Cli, Commands};
use breathwork::cli::commands::{self, Context};
use breathwork::error::BreathworkError;
use breathwork::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BreathworkError> {
    let cli = Cli::parse();

    // The TUI logs to a file instead.
    if !matches!(cli.command, Commands::Breathe(_)) {
        logging::init_stderr();
    }

    if let Commands::Completions { shell } = cli.command {
        print!("{}", commands::completions(shell)?);
        return Ok(());
    }

    let ctx = Context::load(cli.data_dir, cli.output)?;

    let output = match cli.command {
        Commands::List => commands::list(&ctx)?,
        Commands::Show { exercise } => commands::show(&ctx, &exercise)?,
        Commands::Breathe(args) => commands::breathe(&ctx, &args)?,
        Commands::Simulate { exercise, ticks } => commands::simulate(&ctx, &exercise, ticks)?,
        Commands::History { limit, exercise } => {
            commands::history(&ctx, limit, exercise.as_deref())?
        }
        Commands::Report { period } => commands::report(&ctx, &period)?,
        Commands::Mood(args) => commands::mood(&ctx, args.command)?,
        Commands::Burnout { answers } => commands::burnout(&ctx, &answers)?,
        Commands::Completions { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
