// handlers/watch/watchers_get.rs - GET /watch/:type/:id handler

use axum::{extract::State, response::Response, Extension};

use super::{admin_user, WatchTarget};
use crate::api::RestExecutor;
use crate::auth::Identity;
use crate::middleware::{ApiResponse, ApiResult, CurrentUser};
use crate::state::AppState;

/// GET /watch/:type/:id - user keys watching one entity
///
/// ```json
/// { "success": true, "data": ["alice", "bob"] }
/// ```
pub async fn watchers_get(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    target: WatchTarget,
) -> Response {
    RestExecutor::new("list watchers", || list_watchers(state, user, target))
        .response()
        .await
}

async fn list_watchers(
    state: AppState,
    user: Option<Identity>,
    target: WatchTarget,
) -> ApiResult<Vec<String>> {
    admin_user(&state, user)?;
    let keys = state
        .watcher_service
        .get_watchers(target.entity_type, target.entity_id)
        .await?;
    Ok(ApiResponse::success(keys))
}
