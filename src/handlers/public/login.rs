use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::{expiry_seconds, generate_jwt, Claims};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    /// Seconds until the token expires
    pub expires_in: u64,
}

/// POST /auth/login - exchange username/password for a bearer token
pub async fn login_post(State(state): State<AppState>, Json(payload): Json<LoginRequest>) -> ApiResult<LoginResponse> {
    let user = state.users().authenticate(&payload.username, &payload.password).await?;

    let security = &state.config.security;
    let claims = Claims::new(&user, security.jwt_expiry_hours);
    let token = generate_jwt(&claims, security).map_err(|e| {
        tracing::error!("Token generation failed for '{}': {}", user.username, e);
        ApiError::internal_server_error("Failed to issue token")
    })?;

    tracing::info!("Issued token for '{}'", user.username);
    Ok(ApiResponse::success(LoginResponse {
        token,
        token_type: "Bearer",
        expires_in: expiry_seconds(security.jwt_expiry_hours),
    }))
}
