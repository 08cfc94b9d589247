use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::event::Event;

/// How events for a day or a month are ordered when listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventOrder {
    /// Keep the order of the event data.
    #[default]
    Source,
    /// Ascending by date then time of day. Untimed events come first; ties keep
    /// the source order.
    Chronological,
}

impl EventOrder {
    fn apply(self, events: &mut [&Event]) {
        if self == EventOrder::Chronological {
            events.sort_by_key(|e| (e.date, e.time));
        }
    }
}

pub fn events_on<'a>(date: NaiveDate, events: &'a [Event], order: EventOrder) -> Vec<&'a Event> {
    let mut found: Vec<&Event> = events.iter().filter(|e| e.is_on(date)).collect();
    order.apply(&mut found);
    found
}

/// Events of a zero-based month.
pub fn events_in_month<'a>(
    year: i32,
    month: u32,
    events: &'a [Event],
    order: EventOrder,
) -> Vec<&'a Event> {
    let mut found: Vec<&Event> = events
        .iter()
        .filter(|e| e.date.year() == year && e.date.month0() == month)
        .collect();
    order.apply(&mut found);
    found
}

pub fn events_in_year(year: i32, events: &[Event]) -> Vec<&Event> {
    events.iter().filter(|e| e.date.year() == year).collect()
}
