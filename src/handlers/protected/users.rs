use axum::extract::{Path, State};
use serde_json::Value;

use crate::api::to_api_value;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/users/:username - exact-match lookup
///
/// Unknown names reply 404 with `<username> does't exist.` as plain text.
pub async fn user_get(State(state): State<AppState>, Path(username): Path<String>) -> ApiResult<Value> {
    let user = state.users().read(&username).await?;
    Ok(ApiResponse::success(to_api_value(&user)?))
}
