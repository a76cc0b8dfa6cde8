//! Computed calendar views for the month grid and agenda.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use semestra_core::SemestraError;
use semestra_core::calendar::{
    AgendaGroup, DayEvents, LANE_CAPACITY, agenda_groups, assign_lanes, day_events, month_cells,
    events_count_in_month, range_label,
};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/calendar/month", get(month_view))
}

#[derive(Deserialize)]
pub struct MonthQuery {
    /// Focal day of the requested month, YYYY-MM-DD.
    pub date: String,
}

/// One grid cell plus the events placed in it.
#[derive(Serialize)]
pub struct MonthViewCell {
    pub day: u32,
    pub current_month: bool,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub events: DayEvents,
}

/// Everything a renderer needs for one month: grid cells with placed
/// events, agenda groups, and the header label/count.
#[derive(Serialize)]
pub struct MonthView {
    pub label: String,
    pub event_count: usize,
    pub cells: Vec<MonthViewCell>,
    pub agenda: Vec<AgendaGroup>,
}

/// GET /calendar/month?date=YYYY-MM-DD - Computed month view
async fn month_view(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthView>, AppError> {
    let selected = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| SemestraError::InvalidDate(format!("expected YYYY-MM-DD, got '{}'", query.date)))?;

    let store = state.semestra()?.event_store()?;
    let events = store.list()?;

    let lanes = assign_lanes(&events, selected, LANE_CAPACITY);

    let cells = month_cells(selected)
        .into_iter()
        .map(|cell| MonthViewCell {
            day: cell.day,
            current_month: cell.current_month,
            events: day_events(cell.date, &events, &lanes, LANE_CAPACITY),
            date: cell.date,
        })
        .collect();

    Ok(Json(MonthView {
        label: range_label(selected),
        event_count: events_count_in_month(&events, selected),
        cells,
        agenda: agenda_groups(&events, selected),
    }))
}
