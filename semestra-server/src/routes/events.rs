//! Event CRUD endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use serde::Serialize;

use semestra_core::{Event, EventDraft};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/{id}", put(update_event).delete(delete_event))
}

/// GET /events - List all events, sorted by start date
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    let store = state.semestra()?.event_store()?;
    Ok(Json(store.list()?))
}

/// POST /events - Create a new event
async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<EventDraft>,
) -> Result<Json<Event>, AppError> {
    let store = state.semestra()?.event_store()?;
    let event = store.create(&draft)?;

    tracing::info!(id = %event.id, "created event");
    Ok(Json(event))
}

/// PUT /events/:id - Replace an event's fields
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<EventDraft>,
) -> Result<Json<Event>, AppError> {
    let store = state.semestra()?.event_store()?;
    let event = store.update(&id, &draft)?;

    tracing::info!(id = %event.id, "updated event");
    Ok(Json(event))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// DELETE /events/:id - Delete an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let store = state.semestra()?.event_store()?;
    store.delete(&id)?;

    tracing::info!(%id, "deleted event");
    Ok(Json(DeleteResponse { success: true }))
}
