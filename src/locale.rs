use chrono::{Month, Weekday};
use phf::phf_map;
use serde_with::DeserializeFromStr;
use std::fmt;
use std::str::FromStr;

use crate::provider::{Error, ErrorKind};

#[derive(Clone, Copy, Debug, Default, DeserializeFromStr, PartialEq, Eq)]
pub enum Locale {
    #[default]
    German,
    English,
}

static LOCALES: phf::Map<&'static str, Locale> = phf_map! {
    "de" => Locale::German,
    "de_de" => Locale::German,
    "german" => Locale::German,
    "en" => Locale::English,
    "en_us" => Locale::English,
    "en_gb" => Locale::English,
    "english" => Locale::English,
};

const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const GERMAN_WEEKDAYS: [&str; 7] = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"];
const ENGLISH_WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

impl Locale {
    fn months(&self) -> &'static [&'static str; 12] {
        match self {
            Locale::German => &GERMAN_MONTHS,
            Locale::English => &ENGLISH_MONTHS,
        }
    }

    pub fn month_name(&self, month: Month) -> &'static str {
        // twelve variants, twelve names
        self.months()[month.number_from_month() as usize - 1]
    }

    pub fn weekday_abbrev(&self, weekday: Weekday) -> &'static str {
        let names = match self {
            Locale::German => &GERMAN_WEEKDAYS,
            Locale::English => &ENGLISH_WEEKDAYS,
        };
        names[weekday.num_days_from_monday() as usize]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::German => "de",
            Locale::English => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().replace('-', "_").to_lowercase();
        LOCALES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::InvalidLocale, &format!("'{}'", s)))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
