use async_trait::async_trait;

use crate::auth::Identity;
use crate::types::{EntityId, EntityType};

#[derive(Debug, thiserror::Error)]
pub enum WatcherError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Watcher storage unavailable: {0}")]
    Unavailable(String),
}

/// Owns the watch relation between entities and users.
///
/// Adding an existing watch and removing an absent one both succeed.
#[async_trait]
pub trait WatcherService: Send + Sync {
    async fn add_watcher(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
        user: &Identity,
    ) -> Result<(), WatcherError>;

    async fn remove_watcher(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
        user: &Identity,
    ) -> Result<(), WatcherError>;

    /// User keys watching an entity, sorted
    async fn get_watchers(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
    ) -> Result<Vec<String>, WatcherError>;

    /// Ids of entities of `entity_type` the user watches, sorted
    async fn get_watches(
        &self,
        entity_type: EntityType,
        user: &Identity,
    ) -> Result<Vec<EntityId>, WatcherError>;

    /// Drop every watcher of an entity, e.g. after the entity is deleted
    async fn delete_watchers(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
    ) -> Result<(), WatcherError>;

    /// Verify the backing storage is reachable
    async fn health_check(&self) -> Result<(), WatcherError> {
        Ok(())
    }
}
