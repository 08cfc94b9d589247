//! Month grid computation.
//!
//! Months are zero-based throughout (`0` is January) to match the view state.
//! Passing a month outside `0..=11` is a caller bug and panics.

use chrono::{Datelike, Days, Months, NaiveDate};

use super::event::Event;

/// Six weeks of seven days.
pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day_number: u32,
    pub month: u32,
    pub year: i32,
    pub current_month: bool,
    pub has_event: bool,
}

pub fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .unwrap_or_else(|| panic!("invalid month index {} for year {}", month, year))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = first_of_month(year, month);
    first
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX)
        .signed_duration_since(first)
        .num_days() as u32
}

/// Day of week with Sunday as 0.
pub fn weekday_of(year: i32, month: u32, day: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month + 1, day)
        .unwrap_or_else(|| panic!("invalid date {}-{}-{}", year, month + 1, day))
        .weekday()
        .num_days_from_sunday()
}

/// Move `(year, month)` by `delta` months.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + month as i32 + delta;
    (total.div_euclid(12), total.rem_euclid(12) as u32)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        0 => "January",
        1 => "February",
        2 => "March",
        3 => "April",
        4 => "May",
        5 => "June",
        6 => "July",
        7 => "August",
        8 => "September",
        9 => "October",
        10 => "November",
        11 => "December",
        _ => "Unknown",
    }
}

/// Build the 42 cells shown for `month` of `year`, starting on the Sunday on
/// or before the first of the month.
///
/// The leading cells are the last days of the previous month, the trailing
/// ones the first days of the next month. `has_event` is a plain scan over
/// `events`.
pub fn build_grid(year: i32, month: u32, events: &[Event]) -> Vec<DayCell> {
    let first = first_of_month(year, month);
    let leading = weekday_of(year, month, 1) as usize;
    let active = leading..leading + days_in_month(year, month) as usize;
    let start = first
        .checked_sub_days(Days::new(leading as u64))
        .unwrap_or(NaiveDate::MIN);

    start
        .iter_days()
        .take(GRID_CELLS)
        .enumerate()
        .map(|(i, date)| DayCell {
            date,
            day_number: date.day(),
            month: date.month0(),
            year: date.year(),
            current_month: active.contains(&i),
            has_event: events.iter().any(|e| e.is_on(date)),
        })
        .collect()
}
