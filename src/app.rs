use chrono::{Datelike, Local, NaiveDate};
use ratatui::layout::{Position, Rect};

use crate::agenda::{build_grid, events_on, grid, DayCell, Event, EventOrder};
use crate::config::Config;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewMode {
    Month,
    Overview,
}

/// What the user is looking at. `month` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarViewState {
    pub selected_date: NaiveDate,
    pub month: u32,
    pub year: i32,
}

impl CalendarViewState {
    pub fn at(date: NaiveDate) -> Self {
        Self {
            selected_date: date,
            month: date.month0(),
            year: date.year(),
        }
    }
}

/// Something a mouse click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A day cell: selects the date and leaves the active month alone.
    Day(NaiveDate),
    /// An event shown outside the grid: selects its date and shows its month.
    Jump(NaiveDate),
    Month(u32),
    PrevYear,
    NextYear,
    PrevMonth,
    NextMonth,
}

/// Clickable regions recorded while drawing the last frame.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, target: Target) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Later regions win, so overlays drawn last take the click.
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| *target)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

pub struct App {
    pub running: bool,
    pub view_mode: ViewMode,
    pub view: CalendarViewState,
    pub today: NaiveDate,
    pub title: String,
    pub theme: Theme,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub hits: HitMap,
    events: Vec<Event>,
    event_order: EventOrder,
}

impl App {
    pub fn new(config: &Config, events: Vec<Event>, today: NaiveDate) -> Self {
        Self {
            running: true,
            view_mode: ViewMode::Month,
            view: CalendarViewState::at(today),
            today,
            title: config.title.clone(),
            theme: config.theme.clone().into_theme(),
            show_help: false,
            status_message: None,
            hits: HitMap::default(),
            events,
            event_order: config.event_order,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn grid(&self) -> Vec<DayCell> {
        build_grid(self.view.year, self.view.month, &self.events)
    }

    pub fn selected_events(&self) -> Vec<&Event> {
        events_on(self.view.selected_date, &self.events, self.event_order)
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        log::debug!("select {}", date);
        self.view.selected_date = date;
    }

    pub fn select_month(&mut self, month: u32) {
        if month < 12 {
            log::debug!("show month {} of {}", month, self.view.year);
            self.view.month = month;
        }
    }

    pub fn next_year(&mut self) {
        self.view.year += 1;
    }

    pub fn prev_year(&mut self) {
        self.view.year -= 1;
    }

    pub fn next_month(&mut self) {
        self.shift_month(1);
    }

    pub fn prev_month(&mut self) {
        self.shift_month(-1);
    }

    fn shift_month(&mut self, delta: i32) {
        let (year, month) = grid::shift_month(self.view.year, self.view.month, delta);
        self.view.year = year;
        self.view.month = month;
    }

    pub fn next_day(&mut self) {
        if let Some(date) = self.view.selected_date.succ_opt() {
            self.jump_to(date);
        }
    }

    pub fn prev_day(&mut self) {
        if let Some(date) = self.view.selected_date.pred_opt() {
            self.jump_to(date);
        }
    }

    pub fn next_week(&mut self) {
        if let Some(date) = self
            .view
            .selected_date
            .checked_add_signed(chrono::Duration::weeks(1))
        {
            self.jump_to(date);
        }
    }

    pub fn prev_week(&mut self) {
        if let Some(date) = self
            .view
            .selected_date
            .checked_sub_signed(chrono::Duration::weeks(1))
        {
            self.jump_to(date);
        }
    }

    /// Select `date` and bring its month into view.
    pub fn jump_to(&mut self, date: NaiveDate) {
        self.view = CalendarViewState::at(date);
    }

    pub fn go_to_today(&mut self) {
        self.refresh_today(Local::now().date_naive());
        self.jump_to(self.today);
    }

    /// Move the today highlight when the clock passes midnight. The selection
    /// stays where it is.
    pub fn refresh_today(&mut self, now: NaiveDate) {
        if now != self.today {
            log::info!("date changed to {}", now);
            self.today = now;
        }
    }

    pub fn click(&mut self, column: u16, row: u16) {
        let Some(target) = self.hits.target_at(column, row) else {
            return;
        };
        match target {
            Target::Day(date) => self.select_date(date),
            Target::Jump(date) => self.jump_to(date),
            Target::Month(month) => self.select_month(month),
            Target::PrevYear => self.prev_year(),
            Target::NextYear => self.next_year(),
            Target::PrevMonth => self.prev_month(),
            Target::NextMonth => self.next_month(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::EventType;
    use pretty_assertions::assert_eq;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn app() -> App {
        let events = vec![
            Event::new(d(2022, 12, 14), "DTC", EventType::ConfInterne),
            Event::new(d(2022, 12, 12), "pizza", EventType::Pizza),
        ];
        App::new(&Config::default(), events, d(2022, 12, 10))
    }

    #[test]
    fn starts_on_today() {
        let app = app();
        assert_eq!(
            app.view,
            CalendarViewState {
                selected_date: d(2022, 12, 10),
                month: 11,
                year: 2022
            }
        );
        assert!(app.selected_events().is_empty());
    }

    #[test]
    fn month_tab_keeps_year_and_selection() {
        let mut app = app();
        app.select_month(3);
        assert_eq!(app.view.month, 3);
        assert_eq!(app.view.year, 2022);
        assert_eq!(app.view.selected_date, d(2022, 12, 10));
    }

    #[test]
    fn out_of_range_month_is_ignored() {
        let mut app = app();
        app.select_month(12);
        assert_eq!(app.view.month, 11);
    }

    #[test]
    fn year_arrows_only_touch_the_year() {
        let mut app = app();
        app.next_year();
        app.next_year();
        app.prev_year();
        assert_eq!(app.view.year, 2023);
        assert_eq!(app.view.month, 11);
        assert_eq!(app.view.selected_date, d(2022, 12, 10));
    }

    #[test]
    fn month_arrows_wrap_years() {
        let mut app = app();
        app.next_month();
        assert_eq!((app.view.year, app.view.month), (2023, 0));
        app.prev_month();
        app.prev_month();
        assert_eq!((app.view.year, app.view.month), (2022, 10));
    }

    #[test]
    fn keyboard_selection_follows_into_next_month() {
        let mut app = app();
        app.select_date(d(2022, 12, 31));
        app.next_day();
        assert_eq!(app.view, CalendarViewState::at(d(2023, 1, 1)));
        app.prev_week();
        assert_eq!(app.view.selected_date, d(2022, 12, 25));
        assert_eq!(app.view.month, 11);
    }

    #[test]
    fn selected_events_follow_selection() {
        let mut app = app();
        app.select_date(d(2022, 12, 14));
        let titles: Vec<&str> = app
            .selected_events()
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["DTC"]);
    }

    #[test]
    fn midnight_moves_today_but_not_the_selection() {
        let mut app = app();
        app.refresh_today(d(2022, 12, 11));
        assert_eq!(app.today, d(2022, 12, 11));
        assert_eq!(app.view, CalendarViewState::at(d(2022, 12, 10)));
    }

    #[test]
    fn clicks_dispatch_to_targets() {
        let mut app = app();
        app.hits.push(Rect::new(0, 0, 3, 1), Target::PrevYear);
        app.hits.push(Rect::new(10, 0, 3, 1), Target::NextYear);
        app.hits.push(Rect::new(0, 1, 5, 1), Target::Month(0));
        app.hits.push(Rect::new(0, 2, 5, 1), Target::Day(d(2022, 11, 27)));
        app.hits.push(Rect::new(0, 3, 20, 1), Target::Jump(d(2023, 1, 10)));

        app.click(1, 0);
        assert_eq!(app.view.year, 2021);
        app.click(12, 0);
        assert_eq!(app.view.year, 2022);

        app.click(4, 1);
        assert_eq!(app.view.month, 0);

        // A leading cell only changes the selection.
        app.click(2, 2);
        assert_eq!(app.view.selected_date, d(2022, 11, 27));
        assert_eq!(app.view.month, 0);

        app.click(15, 3);
        assert_eq!(app.view, CalendarViewState::at(d(2023, 1, 10)));

        // Outside every region nothing happens.
        app.click(40, 40);
        assert_eq!(app.view, CalendarViewState::at(d(2023, 1, 10)));
    }

    #[test]
    fn later_regions_take_precedence() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 10, 10), Target::NextMonth);
        hits.push(Rect::new(2, 2, 2, 2), Target::PrevMonth);
        hits.push(Rect::new(5, 5, 0, 3), Target::NextYear);
        assert_eq!(hits.target_at(3, 3), Some(Target::PrevMonth));
        assert_eq!(hits.target_at(8, 8), Some(Target::NextMonth));
        assert_eq!(hits.target_at(5, 5), Some(Target::NextMonth));
        assert_eq!(hits.target_at(10, 0), None);
    }
}
