use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

/// The kinds of guild events. Serialized the way the event data spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum EventType {
    #[serde(rename = "CONF_INTERNE", alias = "Conférence interne")]
    ConfInterne,
    #[serde(rename = "PIZZA", alias = "Pizza conf")]
    Pizza,
    #[serde(rename = "HANDSON", alias = "Hands on")]
    Handson,
    #[serde(rename = "CONF_EXTERNE", alias = "Conférence externe")]
    ConfExterne,
    #[serde(rename = "DEJ", alias = "Petit dej.")]
    Dej,
    #[serde(rename = "PLENIERE", alias = "Plénière")]
    Pleniere,
}

/// Icon shown next to an event, with the label used as its tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub name: &'static str,
    pub glyph: &'static str,
    pub label: &'static str,
}

impl EventType {
    #[cfg(test)]
    pub const ALL: [EventType; 6] = [
        EventType::ConfInterne,
        EventType::Pizza,
        EventType::Handson,
        EventType::ConfExterne,
        EventType::Dej,
        EventType::Pleniere,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EventType::ConfInterne => "Conférence interne",
            EventType::Pizza => "Pizza conf",
            EventType::Handson => "Hands on",
            EventType::ConfExterne => "Conférence externe",
            EventType::Dej => "Petit dej.",
            EventType::Pleniere => "Plénière",
        }
    }

    pub fn icon(self) -> Icon {
        let (name, glyph) = match self {
            EventType::Pizza => ("pizza-slice", "🍕"),
            EventType::Handson => ("laptop-code", "💻"),
            EventType::Dej => ("croissant", "🥐"),
            EventType::ConfInterne | EventType::ConfExterne => ("microphone", "🎤"),
            EventType::Pleniere => ("people", "👥"),
        };
        Icon {
            name,
            glyph,
            label: self.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub title: String,
    pub kind: EventType,
    pub place: Option<String>,
    pub link: Option<String>,
}

impl Event {
    pub fn new(date: NaiveDate, title: impl Into<String>, kind: EventType) -> Self {
        Self {
            date,
            time: None,
            title: title.into(),
            kind,
            place: None,
            link: None,
        }
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Events compare by calendar day only; the time of day never matters here.
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    pub fn time_display(&self) -> Option<String> {
        self.time.map(|t| t.format("%H:%M").to_string())
    }
}
