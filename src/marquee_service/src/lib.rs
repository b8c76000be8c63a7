mod helpers;
mod service;
mod tracing;

pub use helpers::{configure_postgresql, get_postgres_pool};
pub use service::CatalogService;

// Re-export commonly used types
pub use marquee_adapters::{
    Argon2CredentialHasher, HashMapAccountStore, HashMapMovieStore, JwtConfig,
    PostgresAccountStore, PostgresMovieStore, Settings,
};
pub use marquee_axum::AppState;
