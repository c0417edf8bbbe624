use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::error::ApiError;
use crate::services::user_service::{created_message, CreateUser};
use crate::state::AppState;

/// POST /api/users - create an account
///
/// Body: JSON object or form-encoded `username`, `password`, `email`. The body
/// is read leniently so that validation, not the extractor, decides the 400.
/// Replies with a plain-text status message:
/// - 201 `User <username> has been created.`
/// - 400 `Missing Username` / `Missing Password` / `Missing Email`
/// - 409 `User already exists.`
pub async fn user_create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let payload = CreateUser::from_body(content_type, &body);

    let user = state.users().create(&payload).await?;
    Ok((StatusCode::CREATED, created_message(&user.username)))
}
