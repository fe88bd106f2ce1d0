use chrono::{Datelike, Duration, Month, NaiveDate, Weekday};
use nom::character::complete::{char, i32 as year, u32 as month_number};
use nom::combinator::all_consuming;
use nom::sequence::separated_pair;
use num_traits::FromPrimitive;
use std::fmt;
use std::ops::RangeInclusive;

use super::{Calendar, WeekView};
use crate::provider::{Error, ErrorKind, Result};

/// Years whose full grid, including the leading and trailing days of the
/// neighbouring months, is representable as a `NaiveDate`.
pub fn supported_years() -> RangeInclusive<i32> {
    NaiveDate::MIN.year() + 1..=NaiveDate::MAX.year() - 1
}

/// Parses `"{year}-{month}"`. Only the canonical form written by
/// [`MonthView::identifier`] is accepted.
pub(super) fn parse_identifier(input: &str) -> Result<(i32, Month)> {
    let invalid = || Error::new(ErrorKind::InvalidIdentifier, &format!("'{}'", input));

    let (_, (y, m)) = all_consuming(separated_pair(
        year::<_, (&str, nom::error::ErrorKind)>,
        char('-'),
        month_number,
    ))(input)
    .map_err(|_| invalid())?;

    // "2024-03", "+2024-3" and friends
    if format!("{}-{}", y, m) != input {
        return Err(invalid());
    }

    let month = Month::from_u32(m).ok_or_else(invalid)?;
    if !supported_years().contains(&y) {
        return Err(invalid());
    }

    Ok((y, month))
}

/// One calendar month of a [`Calendar`].
#[derive(Clone, Copy)]
pub struct MonthView<'a> {
    calendar: &'a Calendar,
    year: i32,
    month: Month,
}

impl<'a> MonthView<'a> {
    pub(super) fn new(calendar: &'a Calendar, year: i32, month: Month) -> Self {
        let years = supported_years();
        MonthView {
            calendar,
            year: year.clamp(*years.start(), *years.end()),
            month,
        }
    }

    pub(super) fn containing(calendar: &'a Calendar, date: &NaiveDate) -> Self {
        let month = Month::from_u32(date.month()).expect("NaiveDate months are 1..=12");
        MonthView::new(calendar, date.year(), month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), 1)
            .expect("year is kept within supported_years()")
    }

    /// Rows of the month grid, each starting on a Monday.
    ///
    /// The first row starts on the Monday on or before the 1st. Rows are
    /// emitted while their Monday lies in the previous or the current month.
    pub fn weeks(&self) -> Vec<WeekView<'a>> {
        let mut monday = self.first_day();
        while monday.weekday() != Weekday::Mon {
            monday = monday - Duration::days(1);
        }

        let current = self.month.number_from_month();
        let before = self.month.pred().number_from_month();

        let mut weeks = Vec::with_capacity(6);
        while monday.month() == before || monday.month() == current {
            weeks.push(WeekView::new(self.calendar, monday));
            monday = monday + Duration::weeks(1);
        }

        weeks
    }

    pub fn next(&self) -> MonthView<'a> {
        let year = match self.month {
            Month::December => self.year + 1,
            _ => self.year,
        };
        self.navigate(year, self.month.succ())
    }

    pub fn previous(&self) -> MonthView<'a> {
        let year = match self.month {
            Month::January => self.year - 1,
            _ => self.year,
        };
        self.navigate(year, self.month.pred())
    }

    // Stays put at the edges of `supported_years()`.
    fn navigate(&self, year: i32, month: Month) -> MonthView<'a> {
        if supported_years().contains(&year) {
            MonthView::new(self.calendar, year, month)
        } else {
            *self
        }
    }

    /// Month name in the calendar's locale, followed by the year.
    pub fn name(&self) -> String {
        format!(
            "{} {}",
            self.calendar.locale().month_name(self.month),
            self.year
        )
    }

    pub fn identifier(&self) -> String {
        format!("{}-{}", self.year, self.month.number_from_month())
    }
}

impl PartialEq for MonthView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month
    }
}

impl Eq for MonthView<'_> {}

impl fmt::Debug for MonthView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MonthView({})", self.identifier())
    }
}
