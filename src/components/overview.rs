use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::agenda::grid::{month_name, shift_month};
use crate::agenda::{events_in_month, Event, EventOrder};
use crate::app::{HitMap, Target};
use crate::theme::Theme;

pub const MONTHS: usize = 3;

/// The active month and the two after it, each with its events in date order.
pub struct Overview;

impl Overview {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        year: i32,
        month: u32,
        events: &[Event],
        theme: &Theme,
        hits: &mut HitMap,
    ) {
        let constraints = [Constraint::Ratio(1, MONTHS as u32); MONTHS];
        let cards = if area.width >= 60 {
            Layout::horizontal(constraints).split(area)
        } else {
            Layout::vertical(constraints).split(area)
        };

        for (idx, card) in cards.iter().enumerate() {
            let (y, m) = shift_month(year, month, idx as i32);
            let month_events = events_in_month(y, m, events, EventOrder::Chronological);
            let label = format!("{} {}", month_name(m), y);

            let title = if idx == 0 {
                format!(" ◀ {} ", label)
            } else if idx == MONTHS - 1 {
                format!(" {} ▶ ", label)
            } else {
                format!(" {} ", label)
            };
            let title_w = title.chars().count() as u16;

            let block = Block::default()
                .title(title)
                .title_style(theme.header)
                .borders(Borders::ALL)
                .border_style(theme.border);
            let inner = block.inner(*card);
            frame.render_widget(block, *card);

            let title_row = Rect { height: 1, ..*card };
            if idx == 0 {
                hits.push(
                    Rect::new(card.x + 1, card.y, 3, 1).intersection(title_row),
                    Target::PrevMonth,
                );
            } else if idx == MONTHS - 1 {
                hits.push(
                    Rect::new(card.x + 1 + title_w - 3, card.y, 3, 1).intersection(title_row),
                    Target::NextMonth,
                );
            }

            if month_events.is_empty() {
                frame.render_widget(Paragraph::new("No events").style(theme.dim), inner);
                continue;
            }

            let lines: Vec<Line> = month_events
                .iter()
                .map(|ev| {
                    Line::from(vec![
                        Span::raw(format!("{} ", ev.kind.icon().glyph)),
                        Span::styled(format!("{}: ", ev.date.format("%a %d")), theme.dim),
                        Span::raw(ev.title.clone()),
                    ])
                })
                .collect();
            frame.render_widget(Paragraph::new(lines), inner);

            for (i, ev) in month_events.iter().enumerate().take(inner.height as usize) {
                hits.push(
                    Rect::new(inner.x, inner.y + i as u16, inner.width, 1),
                    Target::Jump(ev.date),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::EventType;
    use crate::components::buffer_rows;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn three_cards_sorted_by_date() {
        let events = vec![
            Event::new(d(2022, 12, 15), "DTC VII", EventType::ConfInterne),
            Event::new(d(2022, 12, 12), "comment bien coder", EventType::Pizza),
            Event::new(d(2023, 1, 10), "comment mieux coder", EventType::Pizza),
        ];
        let theme = Theme::default();
        let mut hits = HitMap::default();
        let mut terminal = Terminal::new(TestBackend::new(120, 8)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                Overview::render(frame, area, 2022, 11, &events, &theme, &mut hits)
            })
            .unwrap();
        let rows = buffer_rows(&terminal);

        assert!(rows[0].contains("◀ December 2022"));
        assert!(rows[0].contains("January 2023"));
        assert!(rows[0].contains("February 2023 ▶"));
        assert!(rows[1].contains("Mon 12: comment bien coder"));
        assert!(rows[2].contains("Thu 15: DTC VII"));
        assert!(rows[1].contains("Tue 10: comment mieux coder"));
        assert!(rows[1].contains("No events"));

        assert_eq!(hits.target_at(2, 0), Some(Target::PrevMonth));
        assert_eq!(hits.target_at(5, 2), Some(Target::Jump(d(2022, 12, 15))));
        assert_eq!(hits.target_at(45, 1), Some(Target::Jump(d(2023, 1, 10))));
    }
}
