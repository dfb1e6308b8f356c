use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;

use super::watcher_service::{WatcherError, WatcherService};
use crate::auth::Identity;
use crate::types::{EntityId, EntityType};

/// Process-local watcher storage, used when no database is configured
#[derive(Debug, Default)]
pub struct InMemoryWatcherService {
    watchers: RwLock<HashMap<(EntityType, EntityId), BTreeSet<String>>>,
}

impl InMemoryWatcherService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WatcherService for InMemoryWatcherService {
    async fn add_watcher(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
        user: &Identity,
    ) -> Result<(), WatcherError> {
        let mut watchers = self.watchers.write().await;
        watchers
            .entry((entity_type, entity_id))
            .or_default()
            .insert(user.key.clone());
        Ok(())
    }

    async fn remove_watcher(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
        user: &Identity,
    ) -> Result<(), WatcherError> {
        let mut watchers = self.watchers.write().await;
        if let Some(keys) = watchers.get_mut(&(entity_type, entity_id)) {
            keys.remove(&user.key);
            if keys.is_empty() {
                watchers.remove(&(entity_type, entity_id));
            }
        }
        Ok(())
    }

    async fn get_watchers(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
    ) -> Result<Vec<String>, WatcherError> {
        let watchers = self.watchers.read().await;
        Ok(watchers
            .get(&(entity_type, entity_id))
            .map(|keys| keys.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn get_watches(
        &self,
        entity_type: EntityType,
        user: &Identity,
    ) -> Result<Vec<EntityId>, WatcherError> {
        let watchers = self.watchers.read().await;
        let mut ids: Vec<EntityId> = watchers
            .iter()
            .filter(|((t, _), keys)| *t == entity_type && keys.contains(&user.key))
            .map(|((_, id), _)| *id)
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    async fn delete_watchers(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
    ) -> Result<(), WatcherError> {
        self.watchers.write().await.remove(&(entity_type, entity_id));
        Ok(())
    }
}
