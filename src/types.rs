/// Shared types used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric identifier of a watchable entity
pub type EntityId = i32;

/// Kinds of entities that can be watched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Issue,
    RegistryScript,
    RegistryDirectory,
    Listener,
    Rest,
    CustomField,
    ScheduledTask,
    AdminScript,
    JqlFunction,
    GlobalObject,
}

impl EntityType {
    pub const ALL: [EntityType; 10] = [
        EntityType::Issue,
        EntityType::RegistryScript,
        EntityType::RegistryDirectory,
        EntityType::Listener,
        EntityType::Rest,
        EntityType::CustomField,
        EntityType::ScheduledTask,
        EntityType::AdminScript,
        EntityType::JqlFunction,
        EntityType::GlobalObject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Issue => "ISSUE",
            EntityType::RegistryScript => "REGISTRY_SCRIPT",
            EntityType::RegistryDirectory => "REGISTRY_DIRECTORY",
            EntityType::Listener => "LISTENER",
            EntityType::Rest => "REST",
            EntityType::CustomField => "CUSTOM_FIELD",
            EntityType::ScheduledTask => "SCHEDULED_TASK",
            EntityType::AdminScript => "ADMIN_SCRIPT",
            EntityType::JqlFunction => "JQL_FUNCTION",
            EntityType::GlobalObject => "GLOBAL_OBJECT",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown entity type: {0}")]
pub struct UnknownEntityType(pub String);

impl FromStr for EntityType {
    type Err = UnknownEntityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownEntityType(s.to_string()))
    }
}
