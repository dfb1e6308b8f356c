// handlers/watch/watch_list.rs - GET /watch/:type handler

use axum::{extract::State, response::Response, Extension};

use super::{admin_user, WatchType};
use crate::api::RestExecutor;
use crate::auth::Identity;
use crate::middleware::{ApiResponse, ApiResult, CurrentUser};
use crate::state::AppState;
use crate::types::{EntityId, EntityType};

/// GET /watch/:type - ids of entities of this type the current user watches
///
/// ```json
/// { "success": true, "data": [3, 17, 42] }
/// ```
pub async fn watch_list(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    WatchType(entity_type): WatchType,
) -> Response {
    RestExecutor::new("list watches", || list_watches(state, user, entity_type))
        .response()
        .await
}

async fn list_watches(
    state: AppState,
    user: Option<Identity>,
    entity_type: EntityType,
) -> ApiResult<Vec<EntityId>> {
    let user = admin_user(&state, user)?;
    let ids = state.watcher_service.get_watches(entity_type, &user).await?;
    Ok(ApiResponse::success(ids))
}
