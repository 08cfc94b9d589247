use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::agenda::Event;
use crate::theme::Theme;

/// Events of the selected day.
pub struct DayView;

impl DayView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        date: NaiveDate,
        events: &[&Event],
        theme: &Theme,
    ) {
        let w = area.width as usize;

        let title = if w >= 30 {
            format!(" {} ", date.format("%A, %B %d, %Y"))
        } else if w >= 18 {
            format!(" {} ", date.format("%b %d, %Y"))
        } else {
            format!(" {} ", date.format("%m/%d"))
        };

        let count_str = match events.len() {
            0 => String::new(),
            1 => " 1 event ".to_string(),
            n => format!(" {} events ", n),
        };

        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(count_str, theme.dim)))
            .borders(Borders::ALL)
            .border_style(theme.border);

        if events.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No events").style(theme.dim);
            frame.render_widget(msg, inner);
            return;
        }

        let items: Vec<ListItem> = events.iter().map(|ev| event_item(ev, theme)).collect();
        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }
}

fn event_item(ev: &Event, theme: &Theme) -> ListItem<'static> {
    let icon = ev.kind.icon();

    let mut head = vec![Span::raw(format!(" {} ", icon.glyph))];
    if let Some(time) = ev.time_display() {
        head.push(Span::styled(
            format!("{} ", time),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }
    head.push(Span::styled(
        ev.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let mut detail = vec![Span::styled(format!("    {}", icon.label), theme.dim)];
    if let Some(ref place) = ev.place {
        detail.push(Span::styled(format!(" @ {}", place), theme.dim));
    }

    let mut lines = vec![Line::from(head), Line::from(detail)];
    if let Some(ref link) = ev.link {
        lines.push(Line::from(Span::styled(
            format!("    {}", link),
            Style::default().add_modifier(Modifier::UNDERLINED),
        )));
    }

    ListItem::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::EventType;
    use crate::components::buffer_rows;
    use chrono::NaiveTime;
    use ratatui::{backend::TestBackend, Terminal};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn draw(events: &[&Event]) -> Vec<String> {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                DayView::render(frame, area, d(2022, 12, 15), events, &theme)
            })
            .unwrap();
        buffer_rows(&terminal)
    }

    #[test]
    fn empty_day_shows_placeholder_only() {
        let rows = draw(&[]);
        assert!(rows[0].contains("Thursday, December 15, 2022"));
        assert!(rows[1].contains("No events"));
        assert!(rows.iter().all(|r| !r.contains("event ")));
    }

    #[test]
    fn lists_events_with_label_place_and_link() {
        let dtc = Event::new(d(2022, 12, 15), "DTC VII", EventType::ConfInterne)
            .with_time(NaiveTime::from_hms_opt(14, 0, 0).unwrap())
            .with_place("Niort")
            .with_link("https://dtc.example.org");
        let dej = Event::new(d(2022, 12, 15), "Petit dej.", EventType::Dej);

        let rows = draw(&[&dtc, &dej]);
        let text = rows.join("\n");

        assert!(text.contains("14:00 DTC VII"));
        assert!(text.contains("Conférence interne @ Niort"));
        assert!(text.contains("https://dtc.example.org"));
        assert!(text.contains("Petit dej."));
        assert!(!text.contains("No events"));
        assert!(rows[9].contains("2 events"));
    }
}
