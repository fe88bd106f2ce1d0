use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use derive_more::Constructor;

/// Source of "today".
pub trait Clock: Send + Sync {
    fn today(&self, tz: &Tz) -> NaiveDate;
}

/// Reads the wall clock on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self, tz: &Tz) -> NaiveDate {
        Utc::now().with_timezone(tz).date_naive()
    }
}

/// Always reports the same date, regardless of zone.
#[derive(Clone, Copy, Debug, Constructor)]
pub struct FixedClock(NaiveDate);

impl Clock for FixedClock {
    fn today(&self, _tz: &Tz) -> NaiveDate {
        self.0
    }
}
