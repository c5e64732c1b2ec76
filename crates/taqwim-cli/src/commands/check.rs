use std::path::PathBuf;

use clap::Args;

use super::{load_book, load_presenter, print_json, CliResult};

#[derive(Args)]
pub struct CheckArgs {
    /// JSON file with an array of events
    #[arg(long)]
    events: PathBuf,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: CheckArgs) -> CliResult {
    let presenter = load_presenter()?;
    let book = load_book(Some(&args.events))?;
    let annotated: Vec<_> = book.iter().map(|event| presenter.annotate(event)).collect();

    if args.json {
        return print_json(&annotated);
    }
    let conflicts = annotated.iter().filter(|a| a.conflict.is_some()).count();
    for entry in &annotated {
        let event = &entry.event;
        let time = event.time.map(|t| t.to_string()).unwrap_or_else(|| "all day".into());
        match &entry.conflict {
            Some(warning) => println!(
                "! {} {} {}: {}",
                event.date, time, event.title, warning.message
            ),
            None => println!("  {} {} {}", event.date, time, event.title),
        }
    }
    println!("{} event(s), {} conflict(s)", annotated.len(), conflicts);
    Ok(())
}
