use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::Identity;
use crate::error::ApiError;
use crate::state::AppState;

/// Principal resolved for the current request; `None` for anonymous callers
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Option<Identity>);

/// Resolves the caller through the injected authentication context and
/// stores the result as a [`CurrentUser`] request extension
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = state
        .authentication_context
        .logged_in_user(request.headers())
        .await
        .map_err(|e| {
            tracing::warn!("Authentication failed: {}", e);
            ApiError::from(e)
        })?;

    if let Some(user) = &user {
        tracing::debug!(user = %user.key, access = %user.access, "request authenticated");
    }

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}
