//! Administrative privilege checks.

use crate::auth::Identity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermissionError {
    #[error("Authentication required")]
    NotAuthenticated,
    #[error("User '{0}' is not an administrator")]
    NotAdmin(String),
}

pub trait PermissionHelper: Send + Sync {
    /// Fails unless `user` holds administrative privilege
    fn check_if_admin(&self, user: Option<&Identity>) -> Result<(), PermissionError>;
}

/// Grants admin privilege to `full` and `root` access levels
#[derive(Debug, Default, Clone, Copy)]
pub struct AccessLevelPermissionHelper;

impl PermissionHelper for AccessLevelPermissionHelper {
    fn check_if_admin(&self, user: Option<&Identity>) -> Result<(), PermissionError> {
        let user = user.ok_or(PermissionError::NotAuthenticated)?;

        if !user.access.is_admin() {
            tracing::warn!(user = %user.key, access = %user.access, "admin privilege required");
            return Err(PermissionError::NotAdmin(user.key.clone()));
        }
        Ok(())
    }
}
