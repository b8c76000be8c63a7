//! # Marquee - Movie Catalog & Account Service Library
//!
//! This is a facade crate that re-exports all public APIs from the marquee
//! service components. Use this crate to get access to the whole catalog
//! and account stack in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Email`, `Password`, `Account`, `Movie`, etc.
//! - **Repository traits**: `AccountStore`, `MovieStore`, `CredentialHasher`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, favorites use cases, etc.
//! - **Adapters**: `PostgresAccountStore`, `Argon2CredentialHasher`, the JWT issuer/verifier
//! - **Service**: `CatalogService` - the main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use marquee_core::*;
}

// Re-export most commonly used core types at the root level
pub use marquee_core::{
    Account, AccountId, AccountView, Email, HashedPassword, Movie, MovieId, NewAccount, NewMovie,
    Password, Username, Violation,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use marquee_core::{
        AccountStore, AccountStoreError, CredentialHasher, CredentialHasherError, MovieStore,
        MovieStoreError,
    };
}

// Re-export repository traits at root level
pub use marquee_core::{
    AccountStore, AccountStoreError, CredentialHasher, CredentialHasherError, MovieStore,
    MovieStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use marquee_application::*;
}

// Re-export use cases at root level
pub use marquee_application::{
    AddFavoriteUseCase, CatalogUseCase, DeleteAccountUseCase, GetAccountUseCase,
    ListAccountsUseCase, LoginUseCase, RegisterUseCase, RemoveFavoriteUseCase,
    UpdateProfileUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use marquee_adapters::persistence::*;
    }

    /// Credential hashing
    pub mod security {
        pub use marquee_adapters::security::*;
    }

    /// JWT issuing and verification
    pub mod auth {
        pub use marquee_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use marquee_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use marquee_adapters::{
    Argon2CredentialHasher, Claims, HashMapAccountStore, HashMapMovieStore, JwtConfig,
    PostgresAccountStore, PostgresMovieStore, Settings, TokenError, issue_token, verify_token,
};

// ============================================================================
// HTTP Surface
// ============================================================================

/// Axum handlers, state and the authorization gate
pub mod http_surface {
    pub use marquee_axum::*;
}

pub use marquee_axum::{ApiError, AppState, AuthenticatedAccount};

// ============================================================================
// Catalog Service (Main Entry Point)
// ============================================================================

/// Main catalog service
pub use marquee_service::{CatalogService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
