use std::path::PathBuf;

use clap::Args;
use taqwim_core::calendar::WEEKDAY_NAMES;
use taqwim_core::{DayCell, GregorianDate, MonthView};

use super::{load_book, load_presenter, print_json, CliResult};

#[derive(Args)]
pub struct MonthArgs {
    /// Gregorian year; defaults to the current year
    year: Option<i32>,
    /// Month (1-12); defaults to the current month
    month: Option<u32>,
    /// JSON file with an array of events to place on the grid
    #[arg(long)]
    events: Option<PathBuf>,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: MonthArgs) -> CliResult {
    let today = GregorianDate::today();
    let year = args.year.unwrap_or(today.year());
    let month = args.month.unwrap_or(today.month());

    let presenter = load_presenter()?.with_today(today);
    let book = load_book(args.events.as_deref())?;
    let view = presenter.month_view(year, month, &book)?;

    if args.json {
        return print_json(&view);
    }
    print!("{}", render(&view));
    Ok(())
}

/// `*` marks a holiday, `!` a day with a conflicting event, `+` other events.
fn cell_marker(cell: &DayCell) -> char {
    if cell.has_conflict() {
        '!'
    } else if cell.holiday.is_some() {
        '*'
    } else if !cell.events.is_empty() {
        '+'
    } else {
        ' '
    }
}

fn render(view: &MonthView) -> String {
    let mut out = format!("{:04}-{:02}\n", view.year, view.month);

    for column in 0..7 {
        let weekday = (view.week_starts_on as usize + column) % 7;
        out.push_str(&format!("{:>4}", &WEEKDAY_NAMES[weekday][..3]));
    }
    out.push('\n');

    for week in &view.weeks {
        for slot in week {
            match slot {
                Some(cell) => {
                    out.push_str(&format!(" {:>2}{}", cell.date.day(), cell_marker(cell)))
                }
                None => out.push_str("    "),
            }
        }
        out.push('\n');
    }

    let notes: Vec<String> = view.days().flat_map(describe_day).collect();
    if !notes.is_empty() {
        out.push('\n');
        for note in notes {
            out.push_str(&note);
            out.push('\n');
        }
    }
    out
}

fn describe_day(cell: &DayCell) -> Vec<String> {
    let hijri = cell
        .hijri
        .map(|h| format!(" [{h}]"))
        .unwrap_or_default();
    let mut lines = Vec::new();
    if let Some(holiday) = &cell.holiday {
        lines.push(format!("{}{}  * {}", cell.date, hijri, holiday.label));
    }
    for entry in &cell.events {
        let time = entry
            .event
            .time
            .map(|t| t.to_string())
            .unwrap_or_else(|| "all day".into());
        let line = match &entry.conflict {
            Some(warning) => format!(
                "{}{}  ! {} {}: {}",
                cell.date, hijri, time, entry.event.title, warning.message
            ),
            None => format!("{}{}  + {} {}", cell.date, hijri, time, entry.event.title),
        };
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use taqwim_core::{NewEvent, ScheduleBook, ScheduleConflictPresenter, TimeOfDay};

    #[test]
    fn render_marks_conflicts_and_holidays() {
        let mut book = ScheduleBook::new();
        book.add(
            NewEvent::new(GregorianDate::new(2025, 6, 6).unwrap(), "Lecture")
                .at(TimeOfDay::parse("12:15").unwrap()),
        );
        let view = ScheduleConflictPresenter::default()
            .month_view(2025, 6, &book)
            .unwrap();
        let text = render(&view);
        assert!(text.starts_with("2025-06\n"));
        assert!(text.contains(" Sun Mon Tue Wed Thu Fri Sat"));
        // 6 June 2025 is a Friday holiday with a conflicting lecture.
        assert!(text.contains("  6!"));
        assert!(text.contains("  4*"));
        assert!(text.contains("* Eid al-Adha"));
        assert!(text.contains("! 12:15 Lecture: Overlaps Friday prayer"));
    }
}
