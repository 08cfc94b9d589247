pub mod day_view;
pub mod help;
pub mod month_tabs;
pub mod month_view;
pub mod overview;
pub mod status_bar;
pub mod timeline;

pub use day_view::DayView;
pub use month_tabs::MonthTabs;
pub use month_view::MonthView;
pub use overview::Overview;
pub use status_bar::StatusBar;
pub use timeline::YearTimeline;

/// Rendered rows of a test terminal, one string per line.
#[cfg(test)]
pub(crate) fn buffer_rows(
    terminal: &ratatui::Terminal<ratatui::backend::TestBackend>,
) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
