use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Validation, decode, encode, errors::ErrorKind,
};
use marquee_core::Username;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Process-wide signing configuration, loaded once at startup. Rotating
/// the secret invalidates every outstanding token.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    pub token_ttl_seconds: i64,
}

impl JwtConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

/// Typed verification failures. The HTTP layer collapses all of these to
/// one uniform 401; the distinction exists for server-side logging only.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Missing token")]
    Missing,
    #[error("Malformed token")]
    Malformed,
    #[error("Token expired")]
    Expired,
    #[error("Token signature mismatch")]
    SignatureMismatch,
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated username.
    pub sub: String,
    pub exp: usize,
}

/// Issue a bearer token for a verified identity. Only the login flow may
/// call this, and only after password verification has succeeded.
pub fn issue_token(username: &Username, config: &JwtConfig) -> Result<String, TokenError> {
    let delta = chrono::Duration::try_seconds(config.token_ttl_seconds).ok_or(
        TokenError::Unexpected("Failed to create token duration".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(TokenError::Unexpected("Duration out of range".to_string()))?
        .timestamp();

    let exp: usize = exp
        .try_into()
        .map_err(|_| TokenError::Unexpected("Failed to cast i64 to usize".to_string()))?;

    let claims = Claims {
        sub: username.to_string(),
        exp,
    };

    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(config.as_bytes()),
    )
    .map_err(|e| TokenError::Unexpected(e.to_string()))
}

/// Check signature integrity and expiration, yielding the embedded
/// identity claims.
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|error| match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
        _ => TokenError::Malformed,
    })
}
