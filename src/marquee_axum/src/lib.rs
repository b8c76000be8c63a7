//! Axum HTTP surface for the marquee catalog-and-account service.
//!
//! Handlers extract typed payloads, call the application-layer use cases
//! and translate their outcomes through one [`error::ApiError`] mapping.
//! The authorization gate is the [`extract::AuthenticatedAccount`]
//! extractor: protected handlers simply take it as an argument, so no
//! business logic can run on a request without a verified bearer token.

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use extract::AuthenticatedAccount;
pub use state::AppState;
