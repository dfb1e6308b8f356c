// handlers/watch/watch_delete.rs - DELETE /watch/:type/:id handler

use axum::{extract::State, response::Response, Extension};

use super::{admin_user, WatchTarget};
use crate::api::RestExecutor;
use crate::auth::Identity;
use crate::middleware::{ApiResponse, ApiResult, CurrentUser};
use crate::state::AppState;

/// DELETE /watch/:type/:id - stop watching an entity as the current user
pub async fn watch_delete(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    target: WatchTarget,
) -> Response {
    RestExecutor::new("unwatch", || remove_watch(state, user, target))
        .response()
        .await
}

async fn remove_watch(state: AppState, user: Option<Identity>, target: WatchTarget) -> ApiResult<()> {
    let user = admin_user(&state, user)?;

    state
        .watcher_service
        .remove_watcher(target.entity_type, target.entity_id, &user)
        .await?;

    tracing::info!(
        entity_type = %target.entity_type,
        entity_id = target.entity_id,
        user = %user.key,
        "watcher removed"
    );
    Ok(ApiResponse::no_content())
}
