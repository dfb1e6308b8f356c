// handlers/watch/mod.rs - Watch subscription handlers
//
// Every handler resolves the caller, requires admin privilege, then makes a
// single call to the watcher service through the RestExecutor.

pub mod params;
pub mod watch_delete;
pub mod watch_list;
pub mod watch_post;
pub mod watchers_get;

pub use params::{WatchTarget, WatchType};
pub use watch_delete::watch_delete;
pub use watch_list::watch_list;
pub use watch_post::watch_post;
pub use watchers_get::watchers_get;

use crate::auth::Identity;
use crate::error::ApiError;
use crate::permission::PermissionError;
use crate::state::AppState;

/// Require admin privilege and hand back the caller's identity
fn admin_user(state: &AppState, user: Option<Identity>) -> Result<Identity, ApiError> {
    state.permission_helper.check_if_admin(user.as_ref())?;
    user.ok_or_else(|| PermissionError::NotAuthenticated.into())
}
