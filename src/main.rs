mod agenda;
mod app;
mod components;
mod config;
mod input;
mod theme;
mod tui;

use std::time::Duration;

use app::{App, HitMap, ViewMode};
use chrono::Local;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use input::Input;
use ratatui::layout::{Constraint, Layout, Rect};

use agenda::{events_in_year, source, Event};
use config::Config;

fn main() -> Result<()> {
    color_eyre::install()?;
    let _logger = init_logging()?;

    let config = Config::load();
    let events = load_events(&config)?;
    log::info!("{} events loaded", events.len());

    let mut app = App::new(&config, events, Local::now().date_naive());

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

/// The terminal belongs to the UI, so logs only go to a file.
fn init_logging() -> Result<Option<LoggerHandle>> {
    let Some(dir) = config::log_dir() else {
        return Ok(None);
    };

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let handle = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename(config::APP_DIR)
                .suppress_timestamp(),
        )
        .start()?;
    Ok(Some(handle))
}

fn load_events(config: &Config) -> Result<Vec<Event>> {
    match &config.events_file {
        Some(path) => source::load_events(path)
            .wrap_err_with(|| format!("could not load events from {}", path.display())),
        None => source::bundled_events().wrap_err("bundled event data is invalid"),
    }
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        app.refresh_today(Local::now().date_naive());
        terminal.draw(|frame| {
            let hits = draw(frame, app);
            app.hits = hits;
        })?;

        match input::next_input(Duration::from_millis(100))? {
            Some(Input::Key(key)) => {
                app.status_message = None;

                // Help overlay takes priority
                if app.show_help {
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                        app.show_help = false;
                    }
                    continue;
                }

                handle_key(app, key.code, key.modifiers);
            }
            Some(Input::Click { column, row }) => {
                if app.show_help {
                    app.show_help = false;
                } else {
                    app.click(column, row);
                }
            }
            None => {}
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Char('1'), _) => app.view_mode = ViewMode::Month,
        (KeyCode::Char('2'), _) => app.view_mode = ViewMode::Overview,
        (KeyCode::Char('t'), _) => {
            app.go_to_today();
            app.status_message = Some(format!(
                "Today is {}",
                app.today.format("%A %d %B %Y")
            ));
        }
        (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.prev_day(),
        (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.next_day(),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.prev_week(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.next_week(),
        (KeyCode::Char('['), _) => app.prev_month(),
        (KeyCode::Char(']'), _) => app.next_month(),
        (KeyCode::Char('<'), _) | (KeyCode::Char('{'), _) => app.prev_year(),
        (KeyCode::Char('>'), _) | (KeyCode::Char('}'), _) => app.next_year(),
        (KeyCode::Char('?'), _) => app.show_help = true,
        _ => {}
    }
}

fn draw(frame: &mut ratatui::Frame, app: &App) -> HitMap {
    let mut hits = HitMap::default();
    let area = frame.area();

    let layout = Layout::vertical([
        Constraint::Length(components::month_tabs::HEIGHT),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    components::MonthTabs::render(
        frame,
        layout[0],
        &app.title,
        &app.view,
        &app.theme,
        &mut hits,
    );

    match app.view_mode {
        ViewMode::Month => render_month_layout(frame, layout[1], app, &mut hits),
        ViewMode::Overview => components::Overview::render(
            frame,
            layout[1],
            app.view.year,
            app.view.month,
            app.events(),
            &app.theme,
            &mut hits,
        ),
    }

    components::StatusBar::render(
        frame,
        layout[2],
        app.view_mode,
        app.status_message.as_deref(),
        &app.theme,
    );

    if app.show_help {
        components::help::render_help(frame, area, &app.theme);
    }

    hits
}

fn render_month_layout(frame: &mut ratatui::Frame, area: Rect, app: &App, hits: &mut HitMap) {
    let rows = Layout::vertical([
        Constraint::Min(components::month_view::HEIGHT),
        Constraint::Length(components::timeline::HEIGHT),
    ])
    .split(area);

    let content = if area.width >= 60 {
        Layout::horizontal([
            Constraint::Length(components::month_view::WIDTH),
            Constraint::Min(20),
        ])
        .split(rows[0])
    } else {
        Layout::vertical([
            Constraint::Length(components::month_view::HEIGHT),
            Constraint::Min(3),
        ])
        .split(rows[0])
    };

    let cells = app.grid();
    components::MonthView::render(
        frame,
        content[0],
        &cells,
        &app.view,
        app.today,
        &app.theme,
        hits,
    );

    components::DayView::render(
        frame,
        content[1],
        app.view.selected_date,
        &app.selected_events(),
        &app.theme,
    );

    components::YearTimeline::render(
        frame,
        rows[1],
        app.view.year,
        &events_in_year(app.view.year, app.events()),
        &app.theme,
        hits,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::buffer_rows;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn app() -> App {
        let events = source::bundled_events().unwrap();
        App::new(&Config::default(), events, d(2022, 12, 10))
    }

    fn frame(app: &mut App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal
            .draw(|frame| {
                let hits = draw(frame, app);
                app.hits = hits;
            })
            .unwrap();
        buffer_rows(&terminal)
    }

    #[test]
    fn month_screen_has_every_part() {
        let mut app = app();
        let text = frame(&mut app).join("\n");
        assert!(text.contains("Agenda de la guilde DEV"));
        assert!(text.contains("December 2022"));
        assert!(text.contains("Saturday, December 10, 2022"));
        assert!(text.contains("No events"));
        assert!(text.contains("[1]Month"));
        assert!(!app.hits.is_empty());
    }

    #[test]
    fn clicking_a_day_shows_its_events() {
        let mut app = app();
        frame(&mut app);

        // Grid starts below the tabs: border, weekday header, then weeks.
        // December 15 2022 is the Thursday of the third week.
        let column = 1 + 4 * components::month_view::CELL_WIDTH + 1;
        let row = components::month_tabs::HEIGHT + 2 + 2;
        app.click(column, row);
        assert_eq!(app.view.selected_date, d(2022, 12, 15));

        let text = frame(&mut app).join("\n");
        assert!(text.contains("DTC VII"));
        assert!(text.contains("Conférence interne @ Niort"));
    }

    #[test]
    fn keys_drive_the_view() {
        let mut app = app();
        handle_key(&mut app, KeyCode::Char(']'), KeyModifiers::NONE);
        assert_eq!((app.view.year, app.view.month), (2023, 0));
        handle_key(&mut app, KeyCode::Char('<'), KeyModifiers::NONE);
        assert_eq!(app.view.year, 2022);
        handle_key(&mut app, KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(app.view.selected_date, d(2022, 12, 11));
        handle_key(&mut app, KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(app.view_mode, ViewMode::Overview);
        handle_key(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!app.running);
    }

    #[test]
    fn overview_screen_lists_months() {
        let mut app = app();
        app.view_mode = ViewMode::Overview;
        let text = frame(&mut app).join("\n");
        assert!(text.contains("[2]Overview"));
        assert!(text.contains("Mon 12: comment bien"));
        assert!(text.contains("January 2023"));
    }
}
