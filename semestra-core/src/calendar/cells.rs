//! Month grid generation and calendar arithmetic.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};

use crate::event::Event;

/// One square of the 7-column month grid.
///
/// Leading/trailing cells belong to the previous/next month and carry
/// `current_month = false`. Cells are generated fresh per render and never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CalendarCell {
    pub day: u32,
    pub current_month: bool,
    pub date: NaiveDate,
}

/// Direction for month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// First calendar day of the month containing `day`.
pub fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Last calendar day of the month containing `day`.
pub fn month_end(day: NaiveDate) -> NaiveDate {
    month_start(day)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(day)
}

/// All cells needed to render the month containing `selected` as a full
/// 7-column grid, Sunday first. Total count is always a multiple of 7.
pub fn month_cells(selected: NaiveDate) -> Vec<CalendarCell> {
    let first = month_start(selected);
    let days_in_month = month_end(selected).day() as usize;

    // 0 = Sunday, matching the grid's first column.
    let leading = first.weekday().num_days_from_sunday() as usize;
    let trailing = (7 - (leading + days_in_month) % 7) % 7;
    let total = leading + days_in_month + trailing;

    let Some(grid_start) = first.checked_sub_days(Days::new(leading as u64)) else {
        return Vec::new();
    };

    grid_start
        .iter_days()
        .take(total)
        .map(|date| CalendarCell {
            day: date.day(),
            current_month: date.month() == first.month() && date.year() == first.year(),
            date,
        })
        .collect()
}

/// Human-readable range covering the month of `date`,
/// e.g. "Jun 1, 2025 - Jun 30, 2025".
pub fn range_label(date: NaiveDate) -> String {
    let start = month_start(date);
    let end = month_end(date);
    format!(
        "{} - {}",
        start.format("%b %-d, %Y"),
        end.format("%b %-d, %Y")
    )
}

/// Shift `date` by exactly one calendar month, preserving time of day and
/// clamping the day of month to the target month's last valid day.
pub fn navigate(date: DateTime<Utc>, direction: Direction) -> DateTime<Utc> {
    let shifted = match direction {
        Direction::Next => date.checked_add_months(Months::new(1)),
        Direction::Previous => date.checked_sub_months(Months::new(1)),
    };
    shifted.unwrap_or(date)
}

/// Number of events whose `date` falls in the same calendar month as `date`.
pub fn events_count_in_month(events: &[Event], date: NaiveDate) -> usize {
    events
        .iter()
        .filter(|event| in_same_month(event.start_day(), date))
        .count()
}

/// Whether two days share a calendar month and year.
pub fn in_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, EventKind};
    use chrono::TimeZone;

    fn event_on(id: &str, date: DateTime<Utc>) -> Event {
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

    #[test]
    fn test_june_2025_grid_is_five_weeks() {
        // June 1, 2025 is a Sunday: no leading cells, 30 + 5 trailing = 35.
        let cells = month_cells(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(cells.len(), 35);
        assert_eq!(cells.iter().filter(|c| c.current_month).count(), 30);
        assert_eq!(cells[0].day, 1);
        assert!(cells[0].current_month);
        assert_eq!(cells[30].day, 1);
        assert!(!cells[30].current_month);
    }

    #[test]
    fn test_grid_length_is_multiple_of_seven() {
        for month in 1..=12 {
            let cells = month_cells(NaiveDate::from_ymd_opt(2025, month, 10).unwrap());
            assert_eq!(cells.len() % 7, 0, "month {month}");
        }
    }

    #[test]
    fn test_february_2026_fills_exactly_four_weeks() {
        // Feb 1, 2026 is a Sunday and the month has 28 days.
        let cells = month_cells(NaiveDate::from_ymd_opt(2026, 2, 14).unwrap());
        assert_eq!(cells.len(), 28);
        assert!(cells.iter().all(|c| c.current_month));
    }

    #[test]
    fn test_leading_cells_come_from_previous_month() {
        // July 1, 2025 is a Tuesday: Jun 29 and Jun 30 lead the grid.
        let cells = month_cells(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
        assert_eq!(cells[0].day, 29);
        assert!(!cells[0].current_month);
        assert_eq!(cells[1].day, 30);
        assert_eq!(cells[2].day, 1);
        assert!(cells[2].current_month);
    }

    #[test]
    fn test_range_label_formats_month_bounds() {
        let label = range_label(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(label, "Jun 1, 2025 - Jun 30, 2025");
    }

    #[test]
    fn test_navigate_clamps_to_last_valid_day() {
        let jan31 = Utc.with_ymd_and_hms(2025, 1, 31, 14, 30, 0).unwrap();
        let next = navigate(jan31, Direction::Next);
        assert_eq!(next.date_naive(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
        // Time of day survives the shift.
        assert_eq!(next.time(), jan31.time());

        let back = navigate(next, Direction::Previous);
        assert_eq!(back.date_naive(), NaiveDate::from_ymd_opt(2025, 1, 28).unwrap());
    }

    #[test]
    fn test_events_count_in_month_ignores_other_months() {
        let events = vec![
            event_on("1", Utc.with_ymd_and_hms(2025, 6, 5, 9, 0, 0).unwrap()),
            event_on("2", Utc.with_ymd_and_hms(2025, 6, 30, 23, 0, 0).unwrap()),
            event_on("3", Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap()),
            event_on("4", Utc.with_ymd_and_hms(2024, 6, 5, 9, 0, 0).unwrap()),
        ];
        let june = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(events_count_in_month(&events, june), 2);
    }
}
