pub mod error;
pub mod feed;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use derive_more::Constructor;

pub use error::*;

pub type Result<T> = std::result::Result<T, Error>;

/// A single entry of the event feed.
///
/// Events are created once by the feed loader and never change afterwards.
#[derive(Clone, Debug, PartialEq, Constructor)]
pub struct Event {
    id: String,
    start: DateTime<FixedOffset>,
    pub title: String,
    pub subtitle: String,
}

impl Event {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn start(&self) -> &DateTime<FixedOffset> {
        &self.start
    }

    /// Calendar date of the start, as seen in `tz`.
    pub fn date<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.start.with_timezone(tz).date_naive()
    }

    /// Start time of day (`HH:MM`) as seen in `tz`.
    pub fn time<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.start.with_timezone(tz).format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Berlin;

    fn event(start: &str) -> Event {
        Event::new(
            "1".to_owned(),
            DateTime::parse_from_rfc3339(start).unwrap(),
            "Gottesdienst".to_owned(),
            String::new(),
        )
    }

    #[test]
    fn time_is_rendered_in_zone() {
        let evt = event("2024-03-15T09:30:00+00:00");
        assert_eq!(evt.time(&Berlin), "10:30");
        assert_eq!(evt.time(&chrono::Utc), "09:30");
    }

    #[test]
    fn date_follows_zone_across_midnight() {
        let evt = event("2024-07-01T23:30:00+00:00");
        assert_eq!(evt.date(&chrono::Utc), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(evt.date(&Berlin), NaiveDate::from_ymd_opt(2024, 7, 2).unwrap());
    }
}
