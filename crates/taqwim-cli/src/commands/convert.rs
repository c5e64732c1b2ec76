use clap::Args;
use serde::Serialize;
use taqwim_core::{to_julian_day_number, GregorianDate, HijriDate};

use super::{load_presenter, print_json, CliResult};

#[derive(Args)]
pub struct ConvertArgs {
    /// Gregorian date (YYYY-MM-DD); defaults to today
    date: Option<GregorianDate>,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Conversion {
    gregorian: GregorianDate,
    weekday: &'static str,
    julian_day: i64,
    hijri: HijriDate,
    hijri_month_name: &'static str,
}

pub fn run(args: ConvertArgs) -> CliResult {
    let presenter = load_presenter()?;
    let date = args.date.unwrap_or_else(GregorianDate::today);
    let hijri = presenter.converter().convert(date);
    let conversion = Conversion {
        gregorian: date,
        weekday: date.weekday_name(),
        julian_day: to_julian_day_number(date),
        hijri,
        hijri_month_name: hijri.month_name(),
    };

    if args.json {
        return print_json(&conversion);
    }
    println!("Gregorian:  {} ({})", conversion.gregorian, conversion.weekday);
    println!("Julian day: {}", conversion.julian_day);
    println!("Hijri:      {}", conversion.hijri);
    Ok(())
}
