use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

// Shape returned to clients; the password hash never leaves the model layer.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    pub async fn find_by_email(
        email: &str,
        db: &crate::database::Database,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&db.pool)
            .await
    }

    // A malformed stored hash counts as a failed check, not a server error.
    pub fn verify_password(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.password_hash).unwrap_or(false)
    }

    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_hash(hash: &str) -> User {
        User {
            id: 1,
            name: "Swapnil Patil".to_string(),
            email: "swapnil@gmail.com".to_string(),
            password_hash: hash.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn verify_password_accepts_the_hashed_password() {
        // Low cost keeps the test fast
        let hash = bcrypt::hash("password123", 4).unwrap();
        let user = user_with_hash(&hash);

        assert!(user.verify_password("password123"));
        assert!(!user.verify_password("password124"));
    }

    #[test]
    fn verify_password_rejects_on_corrupt_hash() {
        let user = user_with_hash("not-a-bcrypt-hash");
        assert!(!user.verify_password("password123"));
    }

    #[test]
    fn response_shape_has_no_password_material() {
        let user = user_with_hash("$2b$04$placeholderplaceholderpl");
        let json = serde_json::to_value(user.to_response()).unwrap();

        assert_eq!(json["name"], "Swapnil Patil");
        assert_eq!(json["email"], "swapnil@gmail.com");
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
    }
}
