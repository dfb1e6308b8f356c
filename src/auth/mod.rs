use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod context;

pub use context::{AuthenticationContext, JwtAuthenticationContext};

/// Privilege tier carried in a token, ordered from least to most privileged
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Deny,
    Read,
    Edit,
    Full,
    Root,
}

impl AccessLevel {
    pub fn is_admin(&self) -> bool {
        *self >= AccessLevel::Full
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessLevel::Deny => "deny",
            AccessLevel::Read => "read",
            AccessLevel::Edit => "edit",
            AccessLevel::Full => "full",
            AccessLevel::Root => "root",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown access level: {0} (expected deny, read, edit, full or root)")]
pub struct UnknownAccessLevel(pub String);

impl FromStr for AccessLevel {
    type Err = UnknownAccessLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deny" => Ok(AccessLevel::Deny),
            "read" => Ok(AccessLevel::Read),
            "edit" => Ok(AccessLevel::Edit),
            "full" => Ok(AccessLevel::Full),
            "root" => Ok(AccessLevel::Root),
            other => Err(UnknownAccessLevel(other.to_string())),
        }
    }
}

/// The authenticated principal a request acts on behalf of
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub key: String,
    pub access: AccessLevel,
}

impl Identity {
    pub fn new(key: impl Into<String>, access: AccessLevel) -> Self {
        Self { key: key.into(), access }
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            key: claims.sub,
            access: claims.access,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub access: AccessLevel,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(sub: impl Into<String>, access: AccessLevel, expiry_hours: u64) -> Result<Self, AuthError> {
        let now = Utc::now();
        let exp = i64::try_from(expiry_hours)
            .ok()
            .and_then(Duration::try_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or(AuthError::ExpiryOutOfRange(expiry_hours))?;

        Ok(Self {
            sub: sub.into(),
            access,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("JWT secret not configured")]
    SecretNotConfigured,
    #[error("Invalid Authorization header format")]
    MalformedHeader,
    #[error("Authorization header must use Bearer token format")]
    NotBearer,
    #[error("Empty JWT token")]
    EmptyToken,
    #[error("Invalid JWT token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
    #[error("Token expiry of {0} hours is out of range")]
    ExpiryOutOfRange(u64),
    #[error("JWT generation error: {0}")]
    TokenGeneration(#[source] jsonwebtoken::errors::Error),
}

pub fn generate_jwt(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::SecretNotConfigured);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key).map_err(AuthError::TokenGeneration)
}

pub fn validate_jwt(token: &str, secret: &str) -> Result<Claims, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::SecretNotConfigured);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
        .map_err(AuthError::InvalidToken)?;

    Ok(token_data.claims)
}
