//! The calendar engine: month grid math, lane placement, per-day
//! selection, agenda grouping, and the view state that ties them together.
//!
//! Everything here is a pure function of `(events, selected date)`; nothing
//! performs I/O or keeps hidden state between calls.

mod agenda;
mod cells;
mod day_view;
mod lanes;
mod view_state;

pub use agenda::{AgendaGroup, agenda_groups};
pub use cells::{
    CalendarCell, Direction, events_count_in_month, in_same_month, month_cells, month_end,
    month_start, navigate, range_label,
};
pub use day_view::{DayEvents, PlacedEvent, day_events};
pub use lanes::{LANE_CAPACITY, assign_lanes};
pub use view_state::{BadgeVariant, CalendarViewState};
