use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};

use crate::agenda::grid::{first_of_month, month_name};
use crate::agenda::Event;
use crate::app::{HitMap, Target};
use crate::theme::Theme;

/// Glyph rows, the axis line and borders.
pub const HEIGHT: u16 = 2 + 2 + 1;
const GLYPH_WIDTH: u16 = 2;

/// Every event of one year laid out along a line, by day of year.
pub struct YearTimeline;

impl YearTimeline {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        year: i32,
        events: &[&Event],
        theme: &Theme,
        hits: &mut HitMap,
    ) {
        let block = Block::default()
            .title(format!(" {} ", year))
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(theme.border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < GLYPH_WIDTH || inner.height < 2 {
            return;
        }

        let lanes = inner.height - 1;
        let axis_y = inner.y + lanes;
        let buf = frame.buffer_mut();

        buf.set_string(
            inner.x,
            axis_y,
            "─".repeat(inner.width as usize),
            theme.dim,
        );
        for month in 0..12 {
            let col = timeline_column(first_of_month(year, month), inner.width);
            let initial: String = month_name(month).chars().take(1).collect();
            buf.set_string(inner.x + col, axis_y, initial, theme.dim);
        }

        for (col, lane, ev) in place_markers(events, inner.width, lanes) {
            let x = inner.x + col;
            let y = inner.y + lane;
            buf.set_string(x, y, ev.kind.icon().glyph, theme.event_marker);
            hits.push(
                Rect::new(x, y, GLYPH_WIDTH, 1).intersection(inner),
                Target::Jump(ev.date),
            );
        }
    }
}

/// Column of `date` on a line `width` cells wide, leaving room for a glyph.
pub fn timeline_column(date: NaiveDate, width: u16) -> u16 {
    let days = if date.leap_year() { 366 } else { 365 };
    let span = width.saturating_sub(GLYPH_WIDTH) as u32;
    ((date.ordinal0() * span) / (days - 1)) as u16
}

/// Assign each event a column and the first lane where it does not overlap a
/// previous glyph. When every lane is taken the event goes to the lane that
/// frees up first, drawn over its neighbour, so no event is left out.
fn place_markers<'a>(
    events: &[&'a Event],
    width: u16,
    lanes: u16,
) -> Vec<(u16, u16, &'a Event)> {
    let mut sorted: Vec<&Event> = events.to_vec();
    sorted.sort_by_key(|e| e.date);

    let mut lane_end: Vec<Option<u16>> = vec![None; lanes.max(1) as usize];
    let mut placed = Vec::with_capacity(sorted.len());

    for ev in sorted {
        let col = timeline_column(ev.date, width);
        let free = lane_end
            .iter()
            .position(|end| end.map_or(true, |end| col >= end));
        let lane = free.unwrap_or_else(|| {
            lane_end
                .iter()
                .enumerate()
                .min_by_key(|(_, end)| end.unwrap_or(0))
                .map_or(0, |(lane, _)| lane)
        });
        lane_end[lane] = Some(col + GLYPH_WIDTH);
        placed.push((col, lane as u16, ev));
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::EventType;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};
    use test_case::test_case;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test_case(d(2022, 1, 1), 0 ; "first day")]
    #[test_case(d(2022, 12, 31), 98 ; "last day")]
    #[test_case(d(2022, 7, 2), 49 ; "middle of year")]
    #[test_case(d(2024, 12, 31), 98 ; "last day of leap year")]
    fn columns(date: NaiveDate, expected: u16) {
        assert_eq!(timeline_column(date, 100), expected);
    }

    #[test]
    fn narrow_line_puts_everything_at_start() {
        assert_eq!(timeline_column(d(2022, 6, 1), 1), 0);
    }

    #[test]
    fn close_events_stack_in_lanes() {
        let a = Event::new(d(2022, 12, 12), "pizza", EventType::Pizza);
        let b = Event::new(d(2022, 12, 15), "dtc", EventType::ConfInterne);
        let c = Event::new(d(2022, 12, 16), "dej", EventType::Dej);
        let e = Event::new(d(2022, 1, 10), "plénière", EventType::Pleniere);

        let placed = place_markers(&[&a, &b, &c, &e], 40, 2);
        let lanes: Vec<(&str, u16)> = placed
            .iter()
            .map(|(_, l, ev)| (ev.title.as_str(), *l))
            .collect();
        assert_eq!(
            lanes,
            vec![("plénière", 0), ("pizza", 0), ("dtc", 1), ("dej", 0)]
        );
    }

    #[test]
    fn adjacent_days_are_all_drawn() {
        let a = Event::new(d(2022, 12, 12), "pizza", EventType::Pizza);
        let b = Event::new(d(2022, 12, 13), "handson", EventType::Handson);
        let c = Event::new(d(2022, 12, 14), "dtc", EventType::ConfInterne);

        // A 100 column terminal: the line is 98 cells inside the borders.
        let placed = place_markers(&[&a, &b, &c], 98, HEIGHT - 3);
        let titles: Vec<&str> = placed.iter().map(|(_, _, ev)| ev.title.as_str()).collect();
        assert_eq!(titles, vec!["pizza", "handson", "dtc"]);
        assert!(placed.iter().all(|(_, lane, _)| *lane < HEIGHT - 3));
    }

    #[test]
    fn every_event_gets_a_click_target() {
        let events = [
            Event::new(d(2022, 12, 12), "pizza", EventType::Pizza),
            Event::new(d(2022, 12, 13), "handson", EventType::Handson),
            Event::new(d(2022, 12, 14), "dtc", EventType::ConfInterne),
        ];
        let refs: Vec<&Event> = events.iter().collect();
        let theme = Theme::default();
        let mut hits = HitMap::default();

        let mut terminal = Terminal::new(TestBackend::new(100, HEIGHT)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                YearTimeline::render(frame, area, 2022, &refs, &theme, &mut hits)
            })
            .unwrap();

        let targets: Vec<Option<Target>> = (0..100)
            .flat_map(|x| (0..HEIGHT).map(move |y| (x, y)))
            .map(|(x, y)| hits.target_at(x, y))
            .collect();
        for ev in &events {
            assert!(targets.contains(&Some(Target::Jump(ev.date))), "{}", ev.title);
        }
    }
}
