use async_trait::async_trait;
use axum::http::{header::AUTHORIZATION, HeaderMap};

use super::{validate_jwt, AuthError, Identity};

/// Resolves the principal a request is made on behalf of.
///
/// `Ok(None)` means the request carries no credentials at all; credentials
/// that are present but unusable are an error.
#[async_trait]
pub trait AuthenticationContext: Send + Sync {
    async fn logged_in_user(&self, headers: &HeaderMap) -> Result<Option<Identity>, AuthError>;
}

/// Bearer-token authentication backed by HS256 JWTs
pub struct JwtAuthenticationContext {
    secret: String,
}

impl JwtAuthenticationContext {
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }
}

#[async_trait]
impl AuthenticationContext for JwtAuthenticationContext {
    async fn logged_in_user(&self, headers: &HeaderMap) -> Result<Option<Identity>, AuthError> {
        let Some(token) = extract_bearer_token(headers)? else {
            return Ok(None);
        };

        let claims = validate_jwt(token, &self.secret)?;
        Ok(Some(claims.into()))
    }
}

/// Extract JWT token from Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    let Some(auth_header) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_str = auth_header.to_str().map_err(|_| AuthError::MalformedHeader)?;
    let token = auth_str.strip_prefix("Bearer ").ok_or(AuthError::NotBearer)?;

    if token.trim().is_empty() {
        return Err(AuthError::EmptyToken);
    }
    Ok(Some(token.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{generate_jwt, AccessLevel, Claims};
    use axum::http::HeaderValue;

    const SECRET: &str = "context-secret";

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[tokio::test]
    async fn anonymous_without_header() {
        let context = JwtAuthenticationContext::new(SECRET);
        let user = context.logged_in_user(&HeaderMap::new()).await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn resolves_bearer_token() {
        let context = JwtAuthenticationContext::new(SECRET);
        let token = generate_jwt(&Claims::new("alice", AccessLevel::Full, 1).unwrap(), SECRET).unwrap();

        let user = context
            .logged_in_user(&headers_with(&format!("Bearer {}", token)))
            .await
            .unwrap();

        assert_eq!(user, Some(Identity::new("alice", AccessLevel::Full)));
    }

    #[tokio::test]
    async fn rejects_non_bearer_scheme() {
        let context = JwtAuthenticationContext::new(SECRET);
        let result = context.logged_in_user(&headers_with("Basic YWxpY2U6cHc=")).await;
        assert!(matches!(result, Err(AuthError::NotBearer)));
    }

    #[tokio::test]
    async fn rejects_empty_token() {
        let context = JwtAuthenticationContext::new(SECRET);
        let result = context.logged_in_user(&headers_with("Bearer   ")).await;
        assert!(matches!(result, Err(AuthError::EmptyToken)));
    }

    #[tokio::test]
    async fn rejects_garbage_token() {
        let context = JwtAuthenticationContext::new(SECRET);
        let result = context.logged_in_user(&headers_with("Bearer not-a-jwt")).await;
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }
}
