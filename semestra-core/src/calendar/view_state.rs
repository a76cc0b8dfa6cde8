//! Calendar view state: the single authoritative in-memory copy of the
//! event collection plus the focal date.
//!
//! The composition root owns one of these and hands out references; there
//! is no global store. Reads recompute from the current events and selected
//! date on every call. Mutations are optimistic: the local copy changes
//! immediately and a failed persistence call is the caller's problem to
//! surface (no automatic rollback, matching the original behavior).

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::agenda::{AgendaGroup, agenda_groups};
use crate::calendar::cells::{
    CalendarCell, Direction, events_count_in_month, month_cells, navigate, range_label,
};
use crate::calendar::day_view::{DayEvents, day_events};
use crate::calendar::lanes::{LANE_CAPACITY, assign_lanes};
use crate::event::Event;

/// How event badges render in the month grid. Opaque to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Dot,
    Colored,
    #[default]
    Mixed,
}

/// Selected date, event collection, and badge mode for all calendar views.
#[derive(Debug, Clone)]
pub struct CalendarViewState {
    selected_date: DateTime<Utc>,
    events: Vec<Event>,
    badge_variant: BadgeVariant,
}

impl CalendarViewState {
    pub fn new(selected_date: DateTime<Utc>, events: Vec<Event>) -> Self {
        CalendarViewState {
            selected_date,
            events,
            badge_variant: BadgeVariant::default(),
        }
    }

    pub fn selected_date(&self) -> DateTime<Utc> {
        self.selected_date
    }

    /// Day whose month drives every view.
    pub fn selected_day(&self) -> NaiveDate {
        self.selected_date.date_naive()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        self.badge_variant
    }

    pub fn set_badge_variant(&mut self, variant: BadgeVariant) {
        self.badge_variant = variant;
    }

    /// Replace the selected date wholesale. `None` is a no-op. Navigation
    /// may go arbitrarily far in either direction; no range validation.
    pub fn set_selected_date(&mut self, date: Option<DateTime<Utc>>) {
        if let Some(date) = date {
            self.selected_date = date;
        }
    }

    /// Shift the selected month while preserving time of day.
    pub fn navigate_month(&mut self, direction: Direction) {
        self.selected_date = navigate(self.selected_date, direction);
    }

    /// Replace the event collection via a functional updater over the
    /// previous list.
    pub fn set_events<F>(&mut self, updater: F)
    where
        F: FnOnce(Vec<Event>) -> Vec<Event>,
    {
        self.events = updater(std::mem::take(&mut self.events));
    }

    /// Optimistically merge a freshly created event.
    pub fn apply_created(&mut self, event: Event) {
        self.set_events(|mut events| {
            events.push(event);
            events
        });
    }

    /// Optimistically replace an event by id. Unknown ids are ignored;
    /// last write wins when mutations race.
    pub fn apply_updated(&mut self, updated: Event) {
        self.set_events(|events| {
            events
                .into_iter()
                .map(|event| {
                    if event.id == updated.id {
                        updated.clone()
                    } else {
                        event
                    }
                })
                .collect()
        });
    }

    /// Optimistically remove an event by id.
    pub fn apply_deleted(&mut self, id: &str) {
        self.set_events(|mut events| {
            events.retain(|event| event.id != id);
            events
        });
    }

    // VIEWS (recomputed per call, never cached):

    pub fn month_cells(&self) -> Vec<CalendarCell> {
        month_cells(self.selected_day())
    }

    pub fn range_label(&self) -> String {
        range_label(self.selected_day())
    }

    pub fn lanes(&self) -> HashMap<String, usize> {
        assign_lanes(&self.events, self.selected_day(), LANE_CAPACITY)
    }

    pub fn day_events(&self, day: NaiveDate) -> DayEvents {
        day_events(day, &self.events, &self.lanes(), LANE_CAPACITY)
    }

    pub fn agenda(&self) -> Vec<AgendaGroup> {
        agenda_groups(&self.events, self.selected_day())
    }

    pub fn events_in_month(&self) -> usize {
        events_count_in_month(&self.events, self.selected_day())
    }
}
