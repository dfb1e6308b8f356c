//! Collaborator doubles for router and handler tests.

use async_trait::async_trait;
use axum::http::HeaderMap;
use std::sync::{Arc, Mutex};

use crate::auth::{AuthError, AuthenticationContext, Identity};
use crate::permission::AccessLevelPermissionHelper;
use crate::services::{WatcherError, WatcherService};
use crate::state::AppState;
use crate::types::{EntityId, EntityType};

/// Authentication context that always resolves to the same principal
pub struct StaticAuthenticationContext(pub Option<Identity>);

#[async_trait]
impl AuthenticationContext for StaticAuthenticationContext {
    async fn logged_in_user(&self, _headers: &HeaderMap) -> Result<Option<Identity>, AuthError> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchCall {
    Add(EntityType, EntityId, String),
    Remove(EntityType, EntityId, String),
    ListWatches(EntityType, String),
    ListWatchers(EntityType, EntityId),
}

/// How a [`RecordingWatcherService`] answers once a call is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Succeed,
    Fail,
    Panic,
}

/// Watcher service that records every call and answers per [`Behavior`]
pub struct RecordingWatcherService {
    behavior: Behavior,
    calls: Mutex<Vec<WatchCall>>,
}

impl RecordingWatcherService {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<WatchCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: WatchCall) -> Result<(), WatcherError> {
        self.calls.lock().unwrap().push(call);
        match self.behavior {
            Behavior::Succeed => Ok(()),
            Behavior::Fail => Err(WatcherError::Unavailable("storage offline".to_string())),
            Behavior::Panic => panic!("watcher storage exploded"),
        }
    }
}

#[async_trait]
impl WatcherService for RecordingWatcherService {
    async fn add_watcher(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
        user: &Identity,
    ) -> Result<(), WatcherError> {
        self.record(WatchCall::Add(entity_type, entity_id, user.key.clone()))
    }

    async fn remove_watcher(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
        user: &Identity,
    ) -> Result<(), WatcherError> {
        self.record(WatchCall::Remove(entity_type, entity_id, user.key.clone()))
    }

    async fn get_watchers(
        &self,
        entity_type: EntityType,
        entity_id: EntityId,
    ) -> Result<Vec<String>, WatcherError> {
        self.record(WatchCall::ListWatchers(entity_type, entity_id))?;
        Ok(vec!["alice".to_string(), "bob".to_string()])
    }

    async fn get_watches(
        &self,
        entity_type: EntityType,
        user: &Identity,
    ) -> Result<Vec<EntityId>, WatcherError> {
        self.record(WatchCall::ListWatches(entity_type, user.key.clone()))?;
        Ok(vec![1, 42])
    }

    async fn delete_watchers(
        &self,
        _entity_type: EntityType,
        _entity_id: EntityId,
    ) -> Result<(), WatcherError> {
        Ok(())
    }

    async fn health_check(&self) -> Result<(), WatcherError> {
        match self.behavior {
            Behavior::Fail => Err(WatcherError::Unavailable("storage offline".to_string())),
            _ => Ok(()),
        }
    }
}

/// State wiring a fixed principal, the real permission helper and the given service
pub fn test_state(user: Option<Identity>, watcher_service: Arc<dyn WatcherService>) -> AppState {
    AppState::new(
        Arc::new(StaticAuthenticationContext(user)),
        Arc::new(AccessLevelPermissionHelper),
        watcher_service,
    )
}
