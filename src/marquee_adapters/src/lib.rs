pub mod auth;
pub mod config;
pub mod persistence;
pub mod security;

pub use auth::jwt::{Claims, JwtConfig, TokenError, issue_token, verify_token};
pub use config::{HasherConfig, Settings};
pub use persistence::{
    HashMapAccountStore, HashMapMovieStore, PostgresAccountStore, PostgresMovieStore,
};
pub use security::Argon2CredentialHasher;
