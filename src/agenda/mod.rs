pub mod event;
pub mod filter;
pub mod grid;
pub mod source;

pub use event::Event;
#[cfg(test)]
pub use event::EventType;
pub use filter::{events_in_month, events_in_year, events_on, EventOrder};
pub use grid::{build_grid, DayCell};
