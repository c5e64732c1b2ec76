use clap::Args;
use serde::Serialize;
use taqwim_core::{ConflictWarning, GregorianDate, TimeOfDay};

use super::{load_presenter, print_json, CliResult};

#[derive(Args)]
pub struct ConflictArgs {
    /// Event date (YYYY-MM-DD)
    date: GregorianDate,
    /// Event time (HH:MM, 24-hour); omit for an all-day event
    time: Option<TimeOfDay>,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ConflictReport<'a> {
    date: GregorianDate,
    time: Option<TimeOfDay>,
    conflict: bool,
    windows: &'a [ConflictWarning],
}

pub fn run(args: ConflictArgs) -> CliResult {
    let presenter = load_presenter()?;
    let warnings = presenter.conflicts_for(args.date, args.time);

    if args.json {
        return print_json(&ConflictReport {
            date: args.date,
            time: args.time,
            conflict: !warnings.is_empty(),
            windows: &warnings,
        });
    }
    if warnings.is_empty() {
        println!("no conflict");
    } else {
        for warning in &warnings {
            println!("conflict: {}", warning.message);
        }
    }
    Ok(())
}
