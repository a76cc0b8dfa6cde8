//! Per-day projection of placed events for a single grid cell.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::event::Event;

/// An event paired with its lane for one day cell. `lane` is `None` when
/// the event overflowed the cell's capacity.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlacedEvent {
    pub event: Event,
    pub lane: Option<usize>,
}

/// Everything a renderer needs for one day cell: lane-ordered events plus
/// how many were cut off by capacity.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DayEvents {
    pub entries: Vec<PlacedEvent>,
    pub overflow_count: usize,
}

/// Select the events occupying `day`, ordered by lane ascending with
/// unassigned events last. Pure projection; nothing is mutated.
pub fn day_events(
    day: NaiveDate,
    events: &[Event],
    lanes: &HashMap<String, usize>,
    capacity: usize,
) -> DayEvents {
    let mut entries: Vec<PlacedEvent> = events
        .iter()
        .filter(|event| event.start_day() == day)
        .map(|event| PlacedEvent {
            lane: lanes.get(&event.id).copied(),
            event: event.clone(),
        })
        .collect();

    entries.sort_by_key(|placed| placed.lane.unwrap_or(usize::MAX));

    let overflow_count = entries.len() - entries.len().min(capacity);

    DayEvents {
        entries,
        overflow_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::lanes::{LANE_CAPACITY, assign_lanes};
    use crate::event::EventKind;
    use chrono::{DateTime, TimeZone, Utc};

    fn event_at(id: &str, date: DateTime<Utc>) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {id}"),
            description: None,
            date,
            kind: EventKind::General,
            created_at: date,
            updated_at: date,
        }
    }

    fn june5(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 5, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_day_events_in_lane_order_with_overflow() {
        let events = vec![
            event_at("1", june5(9)),
            event_at("2", june5(10)),
            event_at("3", june5(11)),
            event_at("4", june5(12)),
        ];
        let selected = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        let lanes = assign_lanes(&events, selected, LANE_CAPACITY);

        let view = day_events(selected, &events, &lanes, LANE_CAPACITY);

        let ids: Vec<&str> = view.entries.iter().map(|p| p.event.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(view.entries[0].lane, Some(0));
        assert_eq!(view.entries[2].lane, Some(2));
        assert_eq!(view.entries[3].lane, None);
        assert_eq!(view.overflow_count, 1);
    }

    #[test]
    fn test_other_days_are_filtered_out() {
        let events = vec![
            event_at("here", june5(9)),
            event_at("elsewhere", Utc.with_ymd_and_hms(2025, 6, 6, 9, 0, 0).unwrap()),
        ];
        let selected = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        let lanes = assign_lanes(&events, selected, LANE_CAPACITY);

        let view = day_events(selected, &events, &lanes, LANE_CAPACITY);
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].event.id, "here");
        assert_eq!(view.overflow_count, 0);
    }

    #[test]
    fn test_empty_day_is_not_an_error() {
        let events: Vec<Event> = Vec::new();
        let lanes = HashMap::new();
        let view = day_events(
            NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            &events,
            &lanes,
            LANE_CAPACITY,
        );
        assert!(view.entries.is_empty());
        assert_eq!(view.overflow_count, 0);
    }
}
