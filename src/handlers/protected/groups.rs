use axum::extract::{Extension, Path, State};
use serde_json::Value;

use crate::api::to_api_values;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /api/groups
pub async fn groups_list(State(state): State<AppState>, Extension(caller): Extension<AuthUser>) -> ApiResult<Vec<Value>> {
    read(&state, &caller, None).await
}

/// GET /api/groups/:group_id
pub async fn group_get(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(group_id): Path<i64>,
) -> ApiResult<Vec<Value>> {
    read(&state, &caller, Some(group_id)).await
}

async fn read(state: &AppState, caller: &AuthUser, group_id: Option<i64>) -> ApiResult<Vec<Value>> {
    let groups = state.journal().groups(caller, group_id).await?;
    Ok(ApiResponse::success(to_api_values(&groups)?))
}
