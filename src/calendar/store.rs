use chrono::NaiveDate;
use chrono_tz::Tz;
use itertools::Itertools;
use std::collections::HashMap;

use crate::provider::Event;

/// Events bucketed by the calendar date of their start.
///
/// Built once and read-only afterwards, so a single store can be shared
/// between threads without locking.
#[derive(Debug, Default)]
pub struct EventStore {
    days: HashMap<NaiveDate, Vec<Event>>,
    len: usize,
}

impl EventStore {
    /// Buckets `events` by their start date in `tz`, keeping input order
    /// within each day.
    pub fn new(tz: &Tz, events: Vec<Event>) -> Self {
        let len = events.len();
        let days = events.into_iter().into_group_map_by(|evt| evt.date(tz));

        log::debug!("Bucketed {} events into {} days", len, days.len());

        EventStore { days, len }
    }

    pub fn get(&self, date: &NaiveDate) -> &[Event] {
        self.days.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All days holding at least one event, in ascending order.
    pub fn days(&self) -> impl Iterator<Item = &NaiveDate> {
        self.days.keys().sorted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use chrono_tz::Europe::Berlin;

    fn event(id: &str, start: &str) -> Event {
        Event::new(
            id.to_owned(),
            DateTime::parse_from_rfc3339(start).unwrap(),
            format!("Event {}", id),
            String::new(),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_event_lands_in_exactly_one_bucket() {
        let events = vec![
            event("a", "2024-03-15T10:30:00+01:00"),
            event("b", "2024-03-16T08:00:00+01:00"),
            event("c", "2024-03-15T07:00:00+01:00"),
        ];
        let store = EventStore::new(&Berlin, events);

        assert_eq!(store.len(), 3);
        let ids: Vec<_> = store.get(&date(2024, 3, 15)).iter().map(Event::id).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(store.get(&date(2024, 3, 16)).len(), 1);

        let total: usize = store.days().map(|d| store.get(d).len()).sum();
        assert_eq!(total, store.len());
    }

    #[test]
    fn bucket_uses_model_zone() {
        // 23:30 UTC is already the next day in Berlin
        let store = EventStore::new(&Berlin, vec![event("late", "2024-07-01T23:30:00+00:00")]);

        assert!(store.get(&date(2024, 7, 1)).is_empty());
        assert_eq!(store.get(&date(2024, 7, 2))[0].id(), "late");
    }

    #[test]
    fn empty_store() {
        let store = EventStore::new(&Berlin, Vec::new());

        assert!(store.is_empty());
        assert!(store.get(&date(2024, 1, 1)).is_empty());
        assert_eq!(store.days().count(), 0);
    }

    #[test]
    fn days_are_sorted() {
        let store = EventStore::new(
            &Berlin,
            vec![
                event("x", "2024-05-02T12:00:00+02:00"),
                event("y", "2024-04-30T12:00:00+02:00"),
                event("z", "2024-05-01T12:00:00+02:00"),
            ],
        );
        let days: Vec<_> = store.days().copied().collect();
        assert_eq!(days, [date(2024, 4, 30), date(2024, 5, 1), date(2024, 5, 2)]);
    }
}
