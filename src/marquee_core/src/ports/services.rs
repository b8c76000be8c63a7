use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{HashedPassword, Password};

#[derive(Debug, Error)]
pub enum CredentialHasherError {
    #[error("Failed to hash password: {0}")]
    Hash(String),
}

/// One-way credential transform. `hash` produces a salted, adaptive PHC
/// string; `verify` compares a candidate against the stored form.
///
/// `verify` is infallible: a malformed or unrecognized stored hash yields
/// `false`, never an error, so a corrupted record can never grant access.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, CredentialHasherError>;
    async fn verify(&self, candidate: &Password, stored: &HashedPassword) -> bool;
}
