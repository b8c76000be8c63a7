use axum::{extract::FromRequestParts, http::request::Parts};
use http::header::AUTHORIZATION;
use marquee_adapters::{TokenError, verify_token};
use marquee_core::Username;

use crate::error::ApiError;
use crate::state::AppState;

/// The authorization gate.
///
/// Protected handlers take this extractor as an argument; it runs before
/// any handler logic, pulls the bearer token from the `Authorization`
/// header and verifies signature and expiration. Every failure collapses
/// to the same 401 - the typed cause is only logged.
///
/// Note that the gate authenticates but does not scope: any valid token
/// may act on any username. Handlers receive the verified identity, so
/// tightening to owner-only mutations stays a local change.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub username: Username,
}

impl FromRequestParts<AppState> for AuthenticatedAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            tracing::debug!("missing or malformed Authorization header");
            ApiError::Unauthorized
        })?;

        let claims = verify_token(token, &state.jwt).map_err(|error: TokenError| {
            tracing::debug!(kind = %error, "token verification failed");
            ApiError::Unauthorized
        })?;

        let username = Username::parse(&claims.sub).map_err(|_| {
            tracing::warn!("token subject is not a valid username");
            ApiError::Unauthorized
        })?;

        Ok(Self { username })
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
