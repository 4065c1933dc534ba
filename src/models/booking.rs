use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub event_id: i64,
    pub seats: i32,
    pub created_at: DateTime<Utc>,
}

// One row of the my-bookings join, event columns flattened.
#[derive(Debug, Clone, FromRow)]
pub struct BookingWithEvent {
    pub id: i64,
    pub seats: i32,
    pub created_at: DateTime<Utc>,
    pub event_id: i64,
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    pub event_location: String,
}

impl Booking {
    pub async fn find_by_user(
        user_id: i64,
        db: &crate::database::Database,
    ) -> Result<Vec<BookingWithEvent>, sqlx::Error> {
        sqlx::query_as::<_, BookingWithEvent>(
            r#"
            SELECT b.id, b.seats, b.created_at,
                   e.id AS event_id, e.name AS event_name,
                   e.date AS event_date, e.location AS event_location
            FROM bookings b
            JOIN events e ON e.id = b.event_id
            WHERE b.user_id = $1
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&db.pool)
        .await
    }
}
