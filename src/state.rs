use std::sync::Arc;

use crate::auth::AuthenticationContext;
use crate::permission::PermissionHelper;
use crate::services::WatcherService;

/// Collaborators shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub authentication_context: Arc<dyn AuthenticationContext>,
    pub permission_helper: Arc<dyn PermissionHelper>,
    pub watcher_service: Arc<dyn WatcherService>,
}

impl AppState {
    pub fn new(
        authentication_context: Arc<dyn AuthenticationContext>,
        permission_helper: Arc<dyn PermissionHelper>,
        watcher_service: Arc<dyn WatcherService>,
    ) -> Self {
        Self {
            authentication_context,
            permission_helper,
            watcher_service,
        }
    }
}
