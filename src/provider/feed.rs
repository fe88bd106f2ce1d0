use chrono::DateTime;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{Error, ErrorKind, Event, Result};

pub const DEFAULT_FEED: &str = "https://kalender.evlks.de/json?vid=98";

const START_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

#[derive(Deserialize)]
struct FeedEntry {
    #[serde(rename = "Veranstaltung")]
    event: FeedEvent,
}

#[derive(Deserialize)]
struct FeedEvent {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "START_RFC")]
    start: String,
    #[serde(rename = "_event_TITLE", default)]
    title: String,
    #[serde(rename = "SUBTITLE", default)]
    subtitle: String,
}

/// Parses the JSON event feed.
///
/// A single malformed start timestamp fails the whole feed.
pub fn parse_events<R: Read>(reader: R) -> Result<Vec<Event>> {
    let entries: Vec<FeedEntry> = serde_json::from_reader(reader)?;

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let evt = entry.event;
            let start = DateTime::parse_from_str(&evt.start, START_FORMAT).map_err(|e| {
                Error::new(
                    ErrorKind::TimeParse,
                    &format!("parsing event {} ('{}'): {}", idx, evt.start, e),
                )
            })?;

            Ok(Event::new(evt.id, start, evt.title, evt.subtitle))
        })
        .collect()
}

/// Loads events from `source`, either an http(s) URL or a local file.
pub fn load_events(source: &str) -> Result<Vec<Event>> {
    let events = if source.starts_with("http://") || source.starts_with("https://") {
        log::info!("Fetching events from {}", source);
        let response = ureq::get(source).call()?;
        if response.status() != 200 {
            return Err(Error::new(
                ErrorKind::FeedFetch,
                &format!("got status {}, only accept 200", response.status()),
            ));
        }
        parse_events(response.into_reader())?
    } else {
        log::info!("Reading events from '{}'", source);
        let file = File::open(Path::new(source))
            .map_err(|e| Error::from(e).with_msg(&format!("could not open '{}'", source)))?;
        parse_events(BufReader::new(file))?
    };

    log::info!("Loaded {} events", events.len());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"[
        {"Veranstaltung": {
            "ID": "4711",
            "START_RFC": "2024-03-15T10:30:00.000+01:00",
            "_event_TITLE": "Gottesdienst",
            "SUBTITLE": "mit Abendmahl"
        }},
        {"Veranstaltung": {
            "ID": "4712",
            "START_RFC": "2024-03-17T18:00:00.000+01:00",
            "_event_TITLE": "Konzert",
            "LOCATION": "Kirche"
        }}
    ]"#;

    #[test]
    fn parses_feed_in_order() {
        let events = parse_events(FEED.as_bytes()).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id(), "4711");
        assert_eq!(events[0].title, "Gottesdienst");
        assert_eq!(events[0].subtitle, "mit Abendmahl");
        assert_eq!(
            events[0].start().to_rfc3339(),
            "2024-03-15T10:30:00+01:00"
        );
        assert_eq!(events[1].id(), "4712");
        assert_eq!(events[1].subtitle, "");
    }

    #[test]
    fn bad_timestamp_fails_whole_feed() {
        let feed = r#"[{"Veranstaltung": {"ID": "1", "START_RFC": "15.03.2024 10:30"}}]"#;
        let err = parse_events(feed.as_bytes()).unwrap_err();

        assert!(matches!(err.kind, ErrorKind::TimeParse));
        assert!(err.to_string().contains("parsing event 0"));
    }

    #[test]
    fn malformed_json_is_a_feed_error() {
        let err = parse_events("{\"not\": \"a list\"}".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::FeedParse));
    }

    #[test]
    fn empty_feed_is_fine() {
        assert!(parse_events("[]".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_events("/nonexistent/kalender/feed.json").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::IOError(_)));
    }
}
