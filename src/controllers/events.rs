use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::error::AppError;
use crate::models::Event;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/{id}", get(get_event))
}

// GET /api/events
#[derive(Debug, Serialize)]
struct EventSummaryResponse {
    id: i64,
    name: String,
    date: DateTime<Utc>,
    location: String,
    #[serde(rename = "totalSeats")]
    total_seats: i32,
    #[serde(rename = "bookedSeats")]
    booked_seats: i32,
    #[serde(rename = "availableSeats")]
    available_seats: i32,
}

async fn list_events(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let events = Event::find_all(&state.db).await?;

    let payload: Vec<EventSummaryResponse> = events
        .into_iter()
        .map(|e| EventSummaryResponse {
            id: e.id,
            available_seats: e.available_seats(),
            name: e.name,
            date: e.date,
            location: e.location,
            total_seats: e.total_seats,
            booked_seats: e.booked_seats,
        })
        .collect();

    Ok(Json(payload))
}

// GET /api/events/{id}
#[derive(Debug, Serialize)]
struct EventDetailResponse {
    id: i64,
    name: String,
    description: String,
    date: DateTime<Utc>,
    location: String,
    #[serde(rename = "totalSeats")]
    total_seats: i32,
    #[serde(rename = "bookedSeats")]
    booked_seats: i32,
    #[serde(rename = "availableSeats")]
    available_seats: i32,
}

async fn get_event(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    // A non-numeric id gets the JSON envelope, not axum's plain-text reply.
    let Path(id) =
        id.map_err(|_| AppError::InvalidRequest("Event ID must be a number".to_string()))?;

    let event = Event::find_by_id(id, &state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok(Json(EventDetailResponse {
        id: event.id,
        available_seats: event.available_seats(),
        name: event.name,
        description: event.description,
        date: event.date,
        location: event.location,
        total_seats: event.total_seats,
        booked_seats: event.booked_seats,
    }))
}
