use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::AppError;
use crate::middleware::AuthUser;
use crate::services::BookingService;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bookings", post(create_booking))
        .route("/bookings/my", get(get_my_bookings))
}

/* ---------- CREATE ---------- */

// POST /api/bookings
#[derive(Debug, Deserialize)]
struct CreateBookingRequest {
    #[serde(rename = "eventId")]
    event_id: Option<i64>,
    seats: Option<i32>,
}

#[derive(Debug, Serialize)]
struct BookingResponse {
    id: i64,
    #[serde(rename = "userId")]
    user_id: i64,
    #[serde(rename = "eventId")]
    event_id: i64,
    seats: i32,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

async fn create_booking(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // Malformed bodies and wrong-typed fields get the same answer as a
    // missing field.
    let Json(req) = payload.map_err(|_| {
        AppError::InvalidRequest("Event ID and a valid seat count are required".to_string())
    })?;

    let (event_id, seats) = match (req.event_id, req.seats) {
        (Some(event_id), Some(seats)) => (event_id, seats),
        _ => {
            return Err(AppError::InvalidRequest(
                "Event ID and a valid seat count are required".to_string(),
            ))
        }
    };

    let booking = BookingService::new(state.db.clone())
        .create_booking(user.user_id, event_id, seats)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            id: booking.id,
            user_id: booking.user_id,
            event_id: booking.event_id,
            seats: booking.seats,
            created_at: booking.created_at,
        }),
    ))
}

/* ---------- MY BOOKINGS ---------- */

// GET /api/bookings/my
#[derive(Debug, Serialize)]
struct BookedEventResponse {
    id: i64,
    name: String,
    date: DateTime<Utc>,
    location: String,
}

#[derive(Debug, Serialize)]
struct MyBookingResponse {
    id: i64,
    seats: i32,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
    event: BookedEventResponse,
}

async fn get_my_bookings(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let bookings = BookingService::new(state.db.clone())
        .my_bookings(user.user_id)
        .await?;

    let payload: Vec<MyBookingResponse> = bookings
        .into_iter()
        .map(|b| MyBookingResponse {
            id: b.id,
            seats: b.seats,
            created_at: b.created_at,
            event: BookedEventResponse {
                id: b.event_id,
                name: b.event_name,
                date: b.event_date,
                location: b.event_location,
            },
        })
        .collect();

    Ok(Json(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_camel_case_event_id() {
        let req: CreateBookingRequest =
            serde_json::from_str(r#"{"eventId": 3, "seats": 2}"#).unwrap();
        assert_eq!(req.event_id, Some(3));
        assert_eq!(req.seats, Some(2));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let req: CreateBookingRequest = serde_json::from_str(r#"{"seats": 2}"#).unwrap();
        assert_eq!(req.event_id, None);

        let req: CreateBookingRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(req.event_id, None);
        assert_eq!(req.seats, None);
    }

    #[test]
    fn booking_response_uses_wire_field_names() {
        let response = BookingResponse {
            id: 11,
            user_id: 1,
            event_id: 3,
            seats: 2,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["eventId"], 3);
        assert!(json.get("user_id").is_none());
        assert!(json["createdAt"].is_string());
    }
}
