use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "taqwim-cli", version, about = "Taqwim calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Gregorian date to Julian day and Hijri
    Convert(commands::convert::ConvertArgs),
    /// Holiday lookup
    Holiday {
        #[command(subcommand)]
        action: commands::holiday::HolidayAction,
    },
    /// Check a date and time against the conflict windows
    Conflict(commands::conflict::ConflictArgs),
    /// Annotated month grid
    Month(commands::month::MonthArgs),
    /// Conflict report for every event in a JSON file
    Check(commands::check::CheckArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TAQWIM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Holiday { action } => commands::holiday::run(action),
        Commands::Conflict(args) => commands::conflict::run(args),
        Commands::Month(args) => commands::month::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
