use axum::extract::{Extension, Path, State};
use serde_json::Value;

use crate::api::to_api_values;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /api/contacts - every contact owned by the caller
pub async fn contacts_list(State(state): State<AppState>, Extension(caller): Extension<AuthUser>) -> ApiResult<Vec<Value>> {
    read(&state, &caller, None).await
}

/// GET /api/contacts/:contact_id - zero or one owned contact
pub async fn contact_get(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(contact_id): Path<i64>,
) -> ApiResult<Vec<Value>> {
    read(&state, &caller, Some(contact_id)).await
}

async fn read(state: &AppState, caller: &AuthUser, contact_id: Option<i64>) -> ApiResult<Vec<Value>> {
    let contacts = state.journal().contacts(caller, contact_id).await?;
    Ok(ApiResponse::success(to_api_values(&contacts)?))
}
