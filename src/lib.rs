pub mod calendar;
pub mod config;
pub mod locale;
pub mod provider;
pub mod ui;

pub use calendar::Calendar;
pub use provider::{Error, Event, Result};
