use crate::database::Database;
use crate::error::AppError;
use crate::models::booking::{Booking, BookingWithEvent};

// Seat reservation against the events counter pair. All capacity accounting
// goes through here; nothing else writes booked_seats.
#[derive(Clone)]
pub struct BookingService {
    db: Database,
}

// Request checks that need no database access. Mirrors the API contract:
// both ids and counts must be positive.
fn validate(event_id: i64, seats: i32) -> Result<(), AppError> {
    if event_id < 1 || seats < 1 {
        return Err(AppError::InvalidRequest(
            "Event ID and a valid seat count are required".to_string(),
        ));
    }
    Ok(())
}

impl BookingService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    // Reserves `seats` on the event and records the booking, or fails with
    // NotFound / CapacityExceeded. The UPDATE's WHERE clause is both the
    // capacity check and the increment, so two competing requests can never
    // push booked_seats past total_seats: the row lock serializes them and
    // the loser re-evaluates the condition against the winner's result.
    pub async fn create_booking(
        &self,
        user_id: i64,
        event_id: i64,
        seats: i32,
    ) -> Result<Booking, AppError> {
        validate(event_id, seats)?;

        let mut tx = self.db.pool.begin().await?;

        // The guard compares against the remaining count: the table CHECK
        // bounds total_seats - booked_seats, while booked_seats + $1 can
        // overflow int4 when a request asks for close to i32::MAX seats.
        let updated = sqlx::query(
            "UPDATE events
             SET booked_seats = booked_seats + $1
             WHERE id = $2 AND $1 <= total_seats - booked_seats",
        )
        .bind(seats)
        .bind(event_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;

            // Either the event does not exist or the request did not fit.
            // Re-read outside the transaction so the reported count reflects
            // the committed state at failure time.
            let available = sqlx::query_scalar::<_, i32>(
                "SELECT total_seats - booked_seats FROM events WHERE id = $1",
            )
            .bind(event_id)
            .fetch_optional(&self.db.pool)
            .await?;

            return match available {
                None => Err(AppError::NotFound("Event not found".to_string())),
                Some(available) => Err(AppError::CapacityExceeded { available }),
            };
        }

        // The booking row is only written once the seats are taken, so a
        // booking without counted seats cannot exist.
        let booking = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (user_id, event_id, seats)
             VALUES ($1, $2, $3)
             RETURNING id, user_id, event_id, seats, created_at",
        )
        .bind(user_id)
        .bind(event_id)
        .bind(seats)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(booking)
    }

    // Bookings of one user, newest first, with the event fields the client
    // renders alongside each booking.
    pub async fn my_bookings(&self, user_id: i64) -> Result<Vec<BookingWithEvent>, AppError> {
        let bookings = Booking::find_by_user(user_id, &self.db).await?;
        Ok(bookings)
    }
}
