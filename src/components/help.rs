use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme::Theme;

const BINDINGS: &[(&str, &str)] = &[
    ("  click     ", "Select a day, month or year"),
    ("  h/l       ", "Previous/next day"),
    ("  j/k       ", "Next/previous week"),
    ("  [/]       ", "Previous/next month"),
    ("  </> {/}   ", "Previous/next year"),
    ("  t         ", "Jump to today"),
    ("  1/2       ", "Month / Overview"),
    ("  ?         ", "Show this help"),
    ("  q  C-c    ", "Quit"),
];

pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let popup_w = area.width.clamp(30, 52).min(area.width);
    let popup_h = area.height.clamp(12, 16).min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut lines = vec![Line::from(Span::styled("Navigation", section_style))];
    lines.extend(BINDINGS.iter().map(|(key, desc)| {
        Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Esc", key_style),
        Span::styled(" / ", theme.dim),
        Span::styled("?     ", key_style),
        Span::raw("Close help"),
    ]));

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
