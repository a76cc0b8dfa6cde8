//! Agenda view grouping: the selected month's events bucketed by day.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::calendar::cells::in_same_month;
use crate::event::Event;

/// One agenda day: all of that day's events in time order.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AgendaGroup {
    pub day: NaiveDate,
    pub events: Vec<Event>,
}

/// Group the selected month's events by calendar day.
///
/// Groups come back ascending by day and each group's events ascending by
/// full timestamp (time order, unlike the grid's lane order). A month with
/// no events yields an empty vec, which the UI renders as an empty state.
pub fn agenda_groups(events: &[Event], selected: NaiveDate) -> Vec<AgendaGroup> {
    let mut by_day: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();

    for event in events {
        let day = event.start_day();
        if !in_same_month(day, selected) {
            continue;
        }
        by_day.entry(day).or_default().push(event.clone());
    }

    by_day
        .into_iter()
        .map(|(day, mut events)| {
            events.sort_by_key(|event| event.date);
            AgendaGroup { day, events }
        })
        .collect()
}
