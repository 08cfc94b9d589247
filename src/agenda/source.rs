//! Event data loading.
//!
//! Records are `[[event]]` tables with a `dd/mm/yyyy` date, an optional
//! `HH:MM` time, a title, a type, and optional place and link.

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

use super::event::{Event, EventType};

/// Event list compiled into the binary.
pub const BUNDLED_EVENTS: &str = include_str!("../../data/events.toml");

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read event file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed event data")]
    Toml(#[from] toml::de::Error),
    #[error("event #{index}: invalid date '{value}', expected dd/mm/yyyy")]
    InvalidDate {
        index: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("event #{index}: invalid time '{value}', expected HH:MM")]
    InvalidTime {
        index: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Deserialize)]
struct EventFile {
    #[serde(default, rename = "event")]
    events: Vec<EventRecord>,
}

#[derive(Debug, Deserialize)]
struct EventRecord {
    date: String,
    time: Option<String>,
    title: String,
    #[serde(rename = "type")]
    kind: EventType,
    place: Option<String>,
    link: Option<String>,
}

impl EventRecord {
    fn into_event(self, index: usize) -> Result<Event, SourceError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|source| {
            SourceError::InvalidDate {
                index,
                value: self.date.clone(),
                source,
            }
        })?;

        let time = match self.time {
            Some(raw) => Some(NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).map_err(
                |source| SourceError::InvalidTime {
                    index,
                    value: raw.clone(),
                    source,
                },
            )?),
            None => None,
        };

        let mut event = Event::new(date, self.title, self.kind);
        if let Some(time) = time {
            event = event.with_time(time);
        }
        if let Some(place) = self.place.filter(|p| !p.is_empty()) {
            event = event.with_place(place);
        }
        if let Some(link) = self.link.filter(|l| !l.is_empty()) {
            event = event.with_link(link);
        }
        Ok(event)
    }
}

pub fn parse_events(text: &str) -> Result<Vec<Event>, SourceError> {
    let file: EventFile = toml::from_str(text)?;
    file.events
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_event(index))
        .collect()
}

pub fn bundled_events() -> Result<Vec<Event>, SourceError> {
    parse_events(BUNDLED_EVENTS)
}

pub fn load_events(path: &Path) -> Result<Vec<Event>, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_events(&text)
}
