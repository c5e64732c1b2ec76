use clap::Subcommand;
use serde::Serialize;
use taqwim_core::{GregorianDate, Holiday};

use super::{load_presenter, print_json, CliResult};

#[derive(Subcommand)]
pub enum HolidayAction {
    /// Is this date a holiday?
    Check {
        /// Gregorian date (YYYY-MM-DD); defaults to today
        date: Option<GregorianDate>,
        /// List every matching rule instead of the first
        #[arg(long)]
        all: bool,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List holidays in a Gregorian month
    List {
        year: i32,
        /// Month (1-12)
        month: u32,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the configured rules
    Rules,
}

#[derive(Serialize)]
struct DatedHoliday {
    date: GregorianDate,
    #[serde(flatten)]
    holiday: Holiday,
}

pub fn run(action: HolidayAction) -> CliResult {
    let presenter = load_presenter()?;
    let calendar = presenter.holidays();
    match action {
        HolidayAction::Check { date, all, json } => {
            let date = date.unwrap_or_else(GregorianDate::today);
            let matches: Vec<Holiday> = if all {
                calendar.all_matches(date)
            } else {
                calendar.classify(date).into_iter().collect()
            };
            if json {
                return print_json(&matches);
            }
            if matches.is_empty() {
                println!("{date}: not a holiday");
            }
            for holiday in matches {
                println!("{date}: {}", holiday.label);
            }
        }
        HolidayAction::List { year, month, json } => {
            let found: Vec<DatedHoliday> = calendar
                .holidays_in_month(year, month)?
                .into_iter()
                .map(|(date, holiday)| DatedHoliday { date, holiday })
                .collect();
            if json {
                return print_json(&found);
            }
            if found.is_empty() {
                println!("no holidays in {year:04}-{month:02}");
            }
            for entry in found {
                println!("{}  {}", entry.date, entry.holiday.label);
            }
        }
        HolidayAction::Rules => print_json(&calendar.rules())?,
    }
    Ok(())
}
