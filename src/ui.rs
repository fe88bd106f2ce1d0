use itertools::Itertools;
use std::io::{self, Write};

use crate::calendar::{Calendar, DayView, MonthView};

const TODAY_SYMBOL: char = '*';

fn day_cell(day: &DayView, month: &MonthView) -> String {
    if day.belongs_to_month(month) {
        let marker = if day.is_today() { TODAY_SYMBOL } else { ' ' };
        format!("{:>3}{}", day.day_number(), marker)
    } else {
        format!("({:>2})", day.day_number())
    }
}

/// Writes `month` as a plain text grid followed by its events and the
/// identifiers of the neighbouring months.
pub fn render_month<W: Write>(out: &mut W, calendar: &Calendar, month: &MonthView) -> io::Result<()> {
    let locale = calendar.locale();
    let weeks = month.weeks();

    writeln!(out, "{}", month.name())?;

    if let Some(first) = weeks.first() {
        let header = first
            .days()
            .iter()
            .map(|d| format!("{:>3} ", locale.weekday_abbrev(d.weekday())))
            .join("");
        writeln!(out, "{}", header.trim_end())?;
    }

    for week in &weeks {
        let row = week.days().iter().map(|d| day_cell(d, month)).join("");
        writeln!(out, "{}", row.trim_end())?;
    }

    let days_with_events = weeks
        .iter()
        .flat_map(|w| w.days())
        .filter(|d| d.belongs_to_month(month) && !d.events().is_empty());

    for day in days_with_events {
        writeln!(out)?;
        writeln!(out, "{}. {}", day.day_number(), locale.month_name(month.month()))?;
        for evt in day.events() {
            if evt.subtitle.is_empty() {
                writeln!(out, "  {} {}", evt.time(calendar.tz()), evt.title)?;
            } else {
                writeln!(out, "  {} {} - {}", evt.time(calendar.tz()), evt.title, evt.subtitle)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "< {}    {} >",
        month.previous().identifier(),
        month.next().identifier()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::FixedClock;
    use crate::provider::Event;
    use chrono::{DateTime, Month, NaiveDate};
    use chrono_tz::Europe::Berlin;

    fn calendar() -> Calendar {
        let events = vec![
            Event::new(
                "1".to_owned(),
                DateTime::parse_from_rfc3339("2024-03-15T10:30:00+01:00").unwrap(),
                "Gottesdienst".to_owned(),
                "mit Abendmahl".to_owned(),
            ),
            // outside the month, must not be listed
            Event::new(
                "2".to_owned(),
                DateTime::parse_from_rfc3339("2024-02-27T19:00:00+01:00").unwrap(),
                "Chorprobe".to_owned(),
                String::new(),
            ),
        ];
        Calendar::with_clock(
            Berlin,
            events,
            FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()),
        )
    }

    fn render(cal: &Calendar, month: &MonthView) -> String {
        let mut buf = Vec::new();
        render_month(&mut buf, cal, month).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn renders_grid_events_and_navigation() {
        let cal = calendar();
        let text = render(&cal, &cal.month(2024, Month::March).unwrap());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "März 2024");
        assert_eq!(lines[1], " Mo  Di  Mi  Do  Fr  Sa  So");
        assert_eq!(lines[2], "(26)(27)(28)(29)  1   2   3");
        assert_eq!(lines[4], " 11  12  13  14  15* 16  17");
        assert_eq!(lines[6], " 25  26  27  28  29  30  31");
        assert!(text.contains("15. März\n  10:30 Gottesdienst - mit Abendmahl"));
        assert!(!text.contains("Chorprobe"));
        assert_eq!(lines.last(), Some(&"< 2024-2    2024-4 >"));
    }

    #[test]
    fn trailing_days_are_bracketed() {
        let cal = calendar();
        let text = render(&cal, &cal.month(2024, Month::April).unwrap());
        let lines: Vec<_> = text.lines().collect();

        // 2024-04-29 is a Monday, the last row runs into May
        assert_eq!(lines[6], " 29  30 ( 1)( 2)( 3)( 4)( 5)");
    }
}
