use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

use super::{Calendar, MonthView};
use crate::provider::Event;

/// Seven consecutive days, Monday first.
#[derive(Clone, Copy)]
pub struct WeekView<'a> {
    calendar: &'a Calendar,
    monday: NaiveDate,
}

impl<'a> WeekView<'a> {
    pub(super) fn new(calendar: &'a Calendar, monday: NaiveDate) -> Self {
        debug_assert_eq!(monday.weekday(), Weekday::Mon);
        WeekView { calendar, monday }
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    pub fn days(&self) -> Vec<DayView<'a>> {
        (0..7)
            .map(|offset| DayView::new(self.calendar, self.monday + Duration::days(offset)))
            .collect()
    }
}

impl fmt::Debug for WeekView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeekView")
            .field("monday", &self.monday)
            .finish()
    }
}

#[derive(Clone, Copy)]
pub struct DayView<'a> {
    calendar: &'a Calendar,
    date: NaiveDate,
}

impl<'a> DayView<'a> {
    pub(super) fn new(calendar: &'a Calendar, date: NaiveDate) -> Self {
        DayView { calendar, date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Day of month, 1 to 31.
    pub fn day_number(&self) -> u32 {
        self.date.day()
    }

    pub fn is_today(&self) -> bool {
        self.calendar.today() == self.date
    }

    /// Compares the month number only. December of one year belongs to
    /// December of any other year.
    pub fn belongs_to_month(&self, month: &MonthView) -> bool {
        self.date.month() == month.month().number_from_month()
    }

    /// Events starting on this day, in feed order.
    pub fn events(&self) -> &'a [Event] {
        self.calendar.events().get(&self.date)
    }
}

impl fmt::Debug for DayView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DayView").field("date", &self.date).finish()
    }
}
