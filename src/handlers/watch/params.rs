use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::ApiError;
use crate::types::{EntityId, EntityType};

/// `{type}/{id}` path segments addressing a single watchable entity.
///
/// Unknown types and ids that are not an `i32` are rejected as 404 before
/// the handler body runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchTarget {
    pub entity_type: EntityType,
    pub entity_id: EntityId,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for WatchTarget {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((raw_type, raw_id)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::not_found(e.body_text()))?;

        Ok(Self {
            entity_type: parse_entity_type(&raw_type)?,
            entity_id: raw_id
                .parse()
                .map_err(|_| ApiError::not_found(format!("Invalid entity id: {}", raw_id)))?,
        })
    }
}

/// `{type}` path segment for listing watches of one entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchType(pub EntityType);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for WatchType {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw_type) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::not_found(e.body_text()))?;

        Ok(Self(parse_entity_type(&raw_type)?))
    }
}

fn parse_entity_type(raw: &str) -> Result<EntityType, ApiError> {
    raw.parse::<EntityType>()
        .map_err(|e| ApiError::not_found(e.to_string()))
}
