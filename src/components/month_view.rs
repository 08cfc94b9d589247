use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::agenda::grid::{month_name, GRID_CELLS};
use crate::agenda::DayCell;
use crate::app::{CalendarViewState, HitMap, Target};
use crate::theme::Theme;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
pub const CELL_WIDTH: u16 = 5;
/// Borders, weekday header and six weeks.
pub const HEIGHT: u16 = 2 + 1 + 6;
pub const WIDTH: u16 = 2 + 7 * CELL_WIDTH;

pub struct MonthView;

impl MonthView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        cells: &[DayCell],
        view: &CalendarViewState,
        today: NaiveDate,
        theme: &Theme,
        hits: &mut HitMap,
    ) {
        debug_assert_eq!(cells.len(), GRID_CELLS);

        let title = format!(" {} {} ", month_name(view.month), view.year);

        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(theme.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_cells: Vec<Span> = DAY_NAMES
            .iter()
            .map(|d| Span::styled(format!("{:^5}", d), theme.header))
            .collect();
        let header = Line::from(header_cells);

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(std::iter::repeat(Constraint::Length(1)).take(GRID_CELLS / 7));
        constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(constraints).split(inner);

        frame.render_widget(Paragraph::new(header), rows[0]);

        for (week_idx, week) in cells.chunks(7).enumerate() {
            let row_area = rows[week_idx + 1];
            let spans: Vec<Span> = week
                .iter()
                .flat_map(|cell| cell_spans(cell, view.selected_date, today, theme))
                .collect();
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);

            for (day_idx, cell) in week.iter().enumerate() {
                let cell_area = Rect::new(
                    row_area.x + day_idx as u16 * CELL_WIDTH,
                    row_area.y,
                    CELL_WIDTH,
                    row_area.height,
                )
                .intersection(row_area);
                hits.push(cell_area, Target::Day(cell.date));
            }
        }
    }
}

pub fn cell_style(cell: &DayCell, selected: NaiveDate, today: NaiveDate, theme: &Theme) -> Style {
    if cell.date == today && cell.date == selected {
        theme.today_selected
    } else if cell.date == selected {
        theme.selected
    } else if cell.date == today {
        theme.today
    } else if !cell.current_month {
        theme.dim
    } else {
        Style::default()
    }
}

fn cell_spans(
    cell: &DayCell,
    selected: NaiveDate,
    today: NaiveDate,
    theme: &Theme,
) -> [Span<'static>; 2] {
    let style = cell_style(cell, selected, today, theme);
    let marker_style = if style == Style::default() || style == theme.dim {
        theme.event_marker
    } else {
        style
    };
    let marker = if cell.has_event { "• " } else { "  " };
    [
        Span::styled(format!(" {:>2}", cell.day_number), style),
        Span::styled(marker, marker_style),
    ]
}
