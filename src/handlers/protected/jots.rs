// Daily jots are owned directly. Contact and group jots are visible through
// ownership of the contact or group they hang off, and the path id narrows by
// that contact/group rather than by jot id.
use axum::extract::{Extension, Path, State};
use serde_json::Value;

use crate::api::to_api_values;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /api/jots/daily
pub async fn daily_jots_list(State(state): State<AppState>, Extension(caller): Extension<AuthUser>) -> ApiResult<Vec<Value>> {
    let jots = state.journal().daily_jots(&caller, None).await?;
    Ok(ApiResponse::success(to_api_values(&jots)?))
}

/// GET /api/jots/daily/:jot_id
pub async fn daily_jot_get(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(jot_id): Path<i64>,
) -> ApiResult<Vec<Value>> {
    let jots = state.journal().daily_jots(&caller, Some(jot_id)).await?;
    Ok(ApiResponse::success(to_api_values(&jots)?))
}

/// GET /api/jots/contact
pub async fn contact_jots_list(State(state): State<AppState>, Extension(caller): Extension<AuthUser>) -> ApiResult<Vec<Value>> {
    let jots = state.journal().contact_jots(&caller, None).await?;
    Ok(ApiResponse::success(to_api_values(&jots)?))
}

/// GET /api/jots/contact/:contact_id
pub async fn contact_jots_get(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(contact_id): Path<i64>,
) -> ApiResult<Vec<Value>> {
    let jots = state.journal().contact_jots(&caller, Some(contact_id)).await?;
    Ok(ApiResponse::success(to_api_values(&jots)?))
}

/// GET /api/jots/group
pub async fn group_jots_list(State(state): State<AppState>, Extension(caller): Extension<AuthUser>) -> ApiResult<Vec<Value>> {
    let jots = state.journal().group_jots(&caller, None).await?;
    Ok(ApiResponse::success(to_api_values(&jots)?))
}

/// GET /api/jots/group/:group_id
pub async fn group_jots_get(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(group_id): Path<i64>,
) -> ApiResult<Vec<Value>> {
    let jots = state.journal().group_jots(&caller, Some(group_id)).await?;
    Ok(ApiResponse::success(to_api_values(&jots)?))
}
