use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::AppError;
use crate::middleware;
use crate::models::user::{User, UserResponse};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/auth/login", post(login))
}

// POST /api/auth/login
#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    token: String,
    user: UserResponse,
}

// Unknown email and wrong password answer identically; the response gives no
// hint which one it was.
async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(|_| {
        AppError::InvalidRequest("Email and password are required".to_string())
    })?;

    let (email, password) = match (req.email.as_deref(), req.password.as_deref()) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            return Err(AppError::InvalidRequest(
                "Email and password are required".to_string(),
            ))
        }
    };

    let user = User::find_by_email(email, &state.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !user.verify_password(password) {
        return Err(AppError::InvalidCredentials);
    }

    let token = middleware::issue_token(
        user.id,
        &state.config.jwt.secret,
        state.config.jwt.expires_in_hours,
    )?;

    Ok(Json(LoginResponse {
        token,
        user: user.to_response(),
    }))
}
