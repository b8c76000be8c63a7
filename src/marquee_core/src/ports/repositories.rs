use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, NewAccount, ProfileChanges},
    movie::{Director, Movie, MovieId, NewMovie},
    username::Username,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("already exists")]
    UsernameTaken,
    #[error("User not found")]
    AccountNotFound,
    #[error("Movie not found in favorites")]
    FavoriteNotFound,
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UsernameTaken, Self::UsernameTaken) => true,
            (Self::AccountNotFound, Self::AccountNotFound) => true,
            (Self::FavoriteNotFound, Self::FavoriteNotFound) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Persistence boundary for accounts. Implementations own uniqueness of the
/// username and the atomicity of the favorites operations: `push_favorite`
/// and `pull_favorite` must be single conditional updates keyed on the
/// username, never read-then-local-mutate-then-write sequences, so racing
/// requests on one account cannot lose updates.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn insert_account(&self, account: NewAccount) -> Result<Account, AccountStoreError>;
    async fn find_by_username(&self, username: &Username) -> Result<Account, AccountStoreError>;
    async fn list_accounts(&self) -> Result<Vec<Account>, AccountStoreError>;
    async fn update_profile(
        &self,
        username: &Username,
        changes: ProfileChanges,
    ) -> Result<Account, AccountStoreError>;
    async fn delete_account(&self, username: &Username) -> Result<(), AccountStoreError>;
    /// Appends without deduplication and returns the updated account.
    async fn push_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<Account, AccountStoreError>;
    /// Removes every occurrence; `FavoriteNotFound` if the id is absent.
    async fn pull_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<(), AccountStoreError>;
}

// MovieStore port trait and errors
#[derive(Debug, Error)]
pub enum MovieStoreError {
    #[error("Movie not found")]
    MovieNotFound,
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

impl PartialEq for MovieStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MovieNotFound, Self::MovieNotFound) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Persistence boundary for the movie catalog. Plain record retrieval;
/// lookups by title, genre and director name are exact matches.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieStoreError>;
    async fn find_by_title(&self, title: &str) -> Result<Movie, MovieStoreError>;
    async fn find_by_genre(&self, genre: &str) -> Result<Vec<Movie>, MovieStoreError>;
    async fn find_director(&self, name: &str) -> Result<Director, MovieStoreError>;
    async fn insert_movie(&self, movie: NewMovie) -> Result<Movie, MovieStoreError>;
    async fn delete_movie(&self, id: &MovieId) -> Result<(), MovieStoreError>;
}
