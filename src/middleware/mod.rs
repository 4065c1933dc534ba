use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::AppError;

// JWT payload: `sub` is the user id, `exp` a unix timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub exp: i64,
}

pub fn issue_token(user_id: i64, secret: &str, expires_in_hours: i64) -> Result<String, AppError> {
    let claims = Claims {
        sub: user_id,
        exp: (Utc::now() + chrono::Duration::hours(expires_in_hours)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("failed to sign token: {e}")))
}

// HS256 with expiry validation; any decode failure is reported the same way.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::InvalidToken)
}

// Authenticated identity. Handlers that take an AuthUser argument only run
// for requests carrying a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
}

impl FromRequestParts<Arc<crate::AppState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<crate::AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthenticated)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthenticated)?;

        let claims = verify_token(token, &state.config.jwt.secret)?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn issued_tokens_verify_and_carry_the_user_id() {
        let token = issue_token(42, SECRET, 1).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, 42);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let token = issue_token(42, "other-secret", 1).unwrap();
        assert!(matches!(
            verify_token(&token, SECRET),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn tampered_tokens_are_rejected() {
        let token = issue_token(42, SECRET, 1).unwrap();
        let mut tampered = token.into_bytes();
        let last = tampered.last_mut().unwrap();
        *last = if *last == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        assert!(matches!(
            verify_token(&tampered, SECRET),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn expired_tokens_are_rejected() {
        // Well past the decoder's default leeway
        let claims = Claims {
            sub: 42,
            exp: Utc::now().timestamp() - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            verify_token(&token, SECRET),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_strings_are_rejected() {
        assert!(matches!(
            verify_token("not-a-jwt", SECRET),
            Err(AppError::InvalidToken)
        ));
    }
}
