use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub total_seats: i32,
    pub booked_seats: i32,
    pub created_at: DateTime<Utc>,
}

impl Event {
    // Derived on read; the table stores only the two counters.
    pub fn available_seats(&self) -> i32 {
        self.total_seats - self.booked_seats
    }

    pub async fn find_all(db: &crate::database::Database) -> Result<Vec<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY date ASC")
            .fetch_all(&db.pool)
            .await
    }

    pub async fn find_by_id(
        id: i64,
        db: &crate::database::Database,
    ) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&db.pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(total: i32, booked: i32) -> Event {
        Event {
            id: 1,
            name: "India Tech Summit 2026".to_string(),
            description: "Premier gathering of technology leaders".to_string(),
            date: Utc::now(),
            location: "Bengaluru, Karnataka".to_string(),
            total_seats: total,
            booked_seats: booked,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn available_seats_is_total_minus_booked() {
        assert_eq!(event(100, 0).available_seats(), 100);
        assert_eq!(event(100, 37).available_seats(), 63);
        assert_eq!(event(100, 100).available_seats(), 0);
    }
}
