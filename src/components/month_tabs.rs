use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::agenda::grid::month_name;
use crate::app::{CalendarViewState, HitMap, Target};
use crate::theme::Theme;

/// Year selector line plus one line of month tabs.
pub const HEIGHT: u16 = 2;

const PREV: &str = " ◀ ";
const NEXT: &str = " ▶ ";

pub struct MonthTabs;

impl MonthTabs {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        view: &CalendarViewState,
        theme: &Theme,
        hits: &mut HitMap,
    ) {
        if area.height == 0 {
            return;
        }

        // Year selector: " ◀  2022  ▶ "  then the title
        let year = format!(" {} ", view.year);
        let year_w = year.chars().count() as u16;
        let arrow_w = PREV.chars().count() as u16;

        let selector = Line::from(vec![
            Span::styled(PREV, theme.header),
            Span::styled(year, theme.header),
            Span::styled(NEXT, theme.header),
            Span::raw("   "),
            Span::styled(title.to_string(), theme.dim),
        ]);
        frame.render_widget(Paragraph::new(selector), Rect { height: 1, ..area });

        let row = Rect { height: 1, ..area };
        hits.push(
            Rect::new(area.x, area.y, arrow_w, 1).intersection(row),
            Target::PrevYear,
        );
        hits.push(
            Rect::new(area.x + arrow_w + year_w, area.y, arrow_w, 1).intersection(row),
            Target::NextYear,
        );

        if area.height < 2 {
            return;
        }

        let tab_w = tab_width(area.width);
        let tabs_row = Rect::new(area.x, area.y + 1, area.width, 1);
        let spans: Vec<Span> = (0..12)
            .map(|month| {
                let style = if month == view.month {
                    theme.active_tab
                } else {
                    Style::default()
                };
                Span::styled(tab_label(month, tab_w), style)
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), tabs_row);

        for month in 0..12u16 {
            let tab = Rect::new(tabs_row.x + month * tab_w, tabs_row.y, tab_w, 1)
                .intersection(tabs_row);
            hits.push(tab, Target::Month(month as u32));
        }
    }
}

fn tab_width(available: u16) -> u16 {
    if available >= 12 * 5 {
        5
    } else if available >= 12 * 4 {
        4
    } else {
        3
    }
}

fn tab_label(month: u32, width: u16) -> String {
    let name = month_name(month);
    let short: String = match width {
        5 | 4 => name.chars().take(3).collect(),
        _ => name.chars().take(2).collect(),
    };
    format!("{:^w$}", short, w = width as usize)
}
