use std::sync::Arc;

use marquee_adapters::JwtConfig;
use marquee_core::{AccountStore, CredentialHasher, MovieStore};

/// Shared application state. Stores and the hasher are trait objects so
/// the same routes serve the Postgres adapters in production and the
/// in-memory adapters in tests; the signing configuration is immutable
/// after startup.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountStore>,
    pub movies: Arc<dyn MovieStore>,
    pub hasher: Arc<dyn CredentialHasher>,
    pub jwt: JwtConfig,
}

impl AppState {
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        movies: Arc<dyn MovieStore>,
        hasher: Arc<dyn CredentialHasher>,
        jwt: JwtConfig,
    ) -> Self {
        Self {
            accounts,
            movies,
            hasher,
            jwt,
        }
    }
}
