//! Axum route handlers.
//!
//! One file per account operation, the catalog's thin retrieval handlers
//! together in `movies`. Registration, login and catalog reads are
//! unauthenticated by design; everything else takes the
//! [`AuthenticatedAccount`](crate::extract::AuthenticatedAccount) gate.

pub mod add_favorite;
pub mod delete_account;
pub mod get_account;
pub mod list_accounts;
pub mod login;
pub mod movies;
pub mod register;
pub mod remove_favorite;
pub mod update_account;

pub use add_favorite::add_favorite;
pub use delete_account::delete_account;
pub use get_account::get_account;
pub use list_accounts::list_accounts;
pub use login::login;
pub use movies::{add_movie, delete_movie, director_by_name, list_movies, movie_by_title,
    movies_by_genre};
pub use register::register;
pub use remove_favorite::remove_favorite;
pub use update_account::update_account;

/// `GET /` - the only route with nothing to say.
pub async fn welcome() -> &'static str {
    "Welcome to my movie app!"
}
