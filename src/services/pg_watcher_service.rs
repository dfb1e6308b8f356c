use async_trait::async_trait;
use sqlx::PgPool;

use super::watcher_service::{WatcherError, WatcherService};
use crate::auth::Identity;
use crate::types::{EntityId, EntityType};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS entity_watchers (
        entity_type TEXT NOT NULL,
        entity_id INTEGER NOT NULL,
        user_key TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        PRIMARY KEY (entity_type, entity_id, user_key)
    )
"#;

const CREATE_USER_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS entity_watchers_user_idx
        ON entity_watchers (user_key, entity_type)
"#;

/// PostgreSQL-backed watcher storage
pub struct PgWatcherService {
    pool: PgPool,
}

impl PgWatcherService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the watcher table and its lookup index if missing
    pub async fn ensure_schema(&self) -> Result<(), WatcherError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_USER_INDEX).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl WatcherService for PgWatcherService {
    async fn add_watcher(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
        user: &Identity,
    ) -> Result<(), WatcherError> {
        sqlx::query(
            "INSERT INTO entity_watchers (entity_type, entity_id, user_key) VALUES ($1, $2, $3) \
             ON CONFLICT DO NOTHING",
        )
        .bind(entity_type.as_str())
        .bind(entity_id)
        .bind(&user.key)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove_watcher(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
        user: &Identity,
    ) -> Result<(), WatcherError> {
        sqlx::query(
            "DELETE FROM entity_watchers WHERE entity_type = $1 AND entity_id = $2 AND user_key = $3",
        )
        .bind(entity_type.as_str())
        .bind(entity_id)
        .bind(&user.key)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_watchers(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
    ) -> Result<Vec<String>, WatcherError> {
        let keys: Vec<(String,)> = sqlx::query_as(
            "SELECT user_key FROM entity_watchers WHERE entity_type = $1 AND entity_id = $2 \
             ORDER BY user_key",
        )
        .bind(entity_type.as_str())
        .bind(entity_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(keys.into_iter().map(|(key,)| key).collect())
    }

    async fn get_watches(
        &self,
        entity_type: EntityType,
        user: &Identity,
    ) -> Result<Vec<EntityId>, WatcherError> {
        let ids: Vec<(EntityId,)> = sqlx::query_as(
            "SELECT entity_id FROM entity_watchers WHERE entity_type = $1 AND user_key = $2 \
             ORDER BY entity_id",
        )
        .bind(entity_type.as_str())
        .bind(&user.key)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids.into_iter().map(|(id,)| id).collect())
    }

    async fn delete_watchers(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
    ) -> Result<(), WatcherError> {
        let result = sqlx::query("DELETE FROM entity_watchers WHERE entity_type = $1 AND entity_id = $2")
            .bind(entity_type.as_str())
            .bind(entity_id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(
            entity_type = %entity_type,
            entity_id,
            removed = result.rows_affected(),
            "deleted entity watchers"
        );
        Ok(())
    }

    async fn health_check(&self) -> Result<(), WatcherError> {
        crate::database::DatabaseManager::health_check(&self.pool)
            .await
            .map_err(|e| WatcherError::Unavailable(e.to_string()))
    }
}
