mod clock;
mod day;
mod month;
mod store;

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::locale::Locale;
use crate::provider::{Event, Result};

pub use clock::{Clock, FixedClock, SystemClock};
pub use day::{DayView, WeekView};
pub use month::{supported_years, MonthView};
pub use store::EventStore;

/// Entry point for all month views.
///
/// Holds the display zone and the events. Views borrow the calendar, so a
/// single instance can serve any number of concurrent readers.
pub struct Calendar {
    tz: Tz,
    events: EventStore,
    locale: Locale,
    clock: Box<dyn Clock>,
}

impl Calendar {
    pub fn new(tz: Tz, events: Vec<Event>) -> Self {
        Calendar::with_clock(tz, events, SystemClock)
    }

    pub fn with_clock<C: Clock + 'static>(tz: Tz, events: Vec<Event>, clock: C) -> Self {
        Calendar {
            events: EventStore::new(&tz, events),
            tz,
            locale: Locale::default(),
            clock: Box::new(clock),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn tz(&self) -> &Tz {
        &self.tz
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    /// Current date in the calendar's zone. Not cached.
    pub fn today(&self) -> NaiveDate {
        self.clock.today(&self.tz)
    }

    pub fn current_month(&self) -> MonthView<'_> {
        let today = self.today();
        MonthView::containing(self, &today)
    }

    pub fn month(&self, year: i32, month: chrono::Month) -> Option<MonthView<'_>> {
        if supported_years().contains(&year) {
            Some(MonthView::new(self, year, month))
        } else {
            None
        }
    }

    /// Inverse of [`MonthView::identifier`].
    pub fn month_from_identifier(&self, identifier: &str) -> Result<MonthView<'_>> {
        let (year, month) = month::parse_identifier(identifier).map_err(|e| {
            log::debug!("Rejected month identifier '{}': {}", identifier, e);
            e
        })?;
        Ok(MonthView::new(self, year, month))
    }

    pub fn day(&self, date: NaiveDate) -> DayView<'_> {
        DayView::new(self, date)
    }
}

impl std::fmt::Debug for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calendar")
            .field("tz", &self.tz)
            .field("locale", &self.locale)
            .field("events", &self.events.len())
            .finish()
    }
}
