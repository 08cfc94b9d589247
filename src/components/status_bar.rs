use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::ViewMode;
use crate::theme::Theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        mode: ViewMode,
        message: Option<&str>,
        theme: &Theme,
    ) {
        let w = area.width as usize;

        let mode_str = match mode {
            ViewMode::Month => "[1]Month",
            ViewMode::Overview => "[2]Overview",
        };

        // Show status message if present, otherwise show width-aware hints
        let right_text = match message {
            Some(msg) => format!(" {} ", msg),
            None => hints(w).to_string(),
        };

        let left = format!(" {} ", mode_str);
        let padding_len = w.saturating_sub(left.chars().count() + right_text.chars().count());

        let line = Line::from(vec![
            Span::styled(left, theme.status),
            Span::styled(" ".repeat(padding_len), theme.status),
            Span::styled(right_text, theme.status),
        ]);

        frame.render_widget(Paragraph::new(line).style(theme.status), area);
    }
}

fn hints(width: usize) -> &'static str {
    if width >= 80 {
        " click/hjkl:Day [/]:Month </>:Year t:Today 1/2:View ?:Help q:Quit "
    } else if width >= 50 {
        " hjkl:Day [/]:Mon </>:Year ?:Help q:Quit "
    } else {
        " ?:Help q:Quit "
    }
}
