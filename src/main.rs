use std::io::IsTerminal;
use std::process::ExitCode;

use cabinet_game::{report, run, Game};
use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Odds of the cabinet game: a row scanner races a column scanner to the first
/// of K hidden prizes, over every possible placement of the prizes.
#[derive(Parser, Debug)]
#[command(name = "cabinet", version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Number of rows of cabinets
    num_rows: i64,

    /// Number of cabinets per row
    cabinets_per_row: i64,

    /// Number of cabinets with prizes
    num_selections: i64,

    /// Print every game as it is played
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    let cli = Cli::parse();

    let mut print_game = |game: &Game<'_>| println!("{}", game);
    let on_each_game = if cli.verbose {
        Some(&mut print_game as &mut dyn FnMut(&Game<'_>))
    } else {
        None
    };

    let scores = match run(
        cli.num_rows,
        cli.cabinets_per_row,
        cli.num_selections,
        on_each_game,
    ) {
        Ok(scores) => scores,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    print!("{}", report(&scores));

    ExitCode::SUCCESS
}
