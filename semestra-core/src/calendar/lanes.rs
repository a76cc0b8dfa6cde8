//! Lane placement for the month grid.
//!
//! Each day cell has a fixed number of visual lanes. An event keeps the
//! same lane across every day it touches, two events sharing a day never
//! share a lane, and a lane freed after an event's span ends may be reused
//! by later events. Events that cannot fit within capacity stay unassigned
//! and surface only through the day view's overflow count.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::calendar::cells::{month_end, month_start};
use crate::event::Event;

/// Lanes visible per day cell before events spill into the overflow count.
pub const LANE_CAPACITY: usize = 3;

/// Assign a lane in `[0, capacity)` to every event that fits in the month
/// containing `selected`. Pure function of its inputs: same events and
/// selected day always produce the same mapping.
///
/// Events are considered in `date` order (stable, so simultaneous events
/// keep their input order) and take the lowest lane that is free on every
/// day of their span, clamped to the month. Events entirely outside the
/// month never occupy a lane and are absent from the result, as are
/// overflow events.
pub fn assign_lanes(
    events: &[Event],
    selected: NaiveDate,
    capacity: usize,
) -> HashMap<String, usize> {
    let start = month_start(selected);
    let end = month_end(selected);

    let mut occupied: BTreeMap<NaiveDate, Vec<bool>> = start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| (day, vec![false; capacity]))
        .collect();

    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by_key(|event| event.date);

    let mut lanes = HashMap::new();

    for event in ordered {
        let span_start = event.start_day().max(start);
        let span_end = event.end_day().min(end);
        if span_start > span_end {
            continue;
        }

        let days: Vec<NaiveDate> = span_start
            .iter_days()
            .take_while(|day| *day <= span_end)
            .collect();

        let free_lane = (0..capacity).find(|lane| {
            days.iter()
                .all(|day| occupied.get(day).is_some_and(|taken| !taken[*lane]))
        });

        if let Some(lane) = free_lane {
            for day in &days {
                if let Some(taken) = occupied.get_mut(day) {
                    taken[lane] = true;
                }
            }
            lanes.insert(event.id.clone(), lane);
        }
    }

    lanes
}
