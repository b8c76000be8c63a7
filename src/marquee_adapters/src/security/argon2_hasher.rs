use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use async_trait::async_trait;
use marquee_core::{CredentialHasher, CredentialHasherError, HashedPassword, Password};
use secrecy::{ExposeSecret, Secret};

use crate::config::HasherConfig;

/// Argon2id credential hasher. Work-factor parameters are fixed at
/// construction and immutable for the life of the process; the CPU-bound
/// work runs on the blocking pool so request tasks are not stalled.
#[derive(Clone)]
pub struct Argon2CredentialHasher {
    config: HasherConfig,
}

impl Argon2CredentialHasher {
    pub fn new(config: HasherConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<HashedPassword, CredentialHasherError> {
        let password = password.clone();
        let config = self.config;
        let current_span: tracing::Span = tracing::Span::current();

        let phc_string = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher(&config)?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|hash| Secret::from(hash.to_string()))
                    .map_err(|e| CredentialHasherError::Hash(e.to_string()))
            })
        })
        .await
        .map_err(|e| CredentialHasherError::Hash(e.to_string()))??;

        Ok(HashedPassword::new(phc_string.expose_secret().clone()))
    }

    /// A malformed or unrecognized stored hash verifies as false; a
    /// corrupted record must never grant access.
    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(&self, candidate: &Password, stored: &HashedPassword) -> bool {
        let candidate = candidate.clone();
        let stored = Secret::from(stored.as_ref().expose_secret().clone());
        let config = self.config;
        let current_span: tracing::Span = tracing::Span::current();

        let outcome = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let Ok(parsed) = PasswordHash::new(stored.expose_secret()) else {
                    tracing::warn!("stored password hash is malformed");
                    return false;
                };
                let Ok(hasher) = hasher(&config) else {
                    return false;
                };
                hasher
                    .verify_password(candidate.as_ref().expose_secret().as_bytes(), &parsed)
                    .is_ok()
            })
        })
        .await;

        outcome.unwrap_or(false)
    }
}

fn hasher(config: &HasherConfig) -> Result<Argon2<'static>, CredentialHasherError> {
    let params = Params::new(config.m_cost, config.t_cost, config.p_cost, None)
        .map_err(|e| CredentialHasherError::Hash(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}
