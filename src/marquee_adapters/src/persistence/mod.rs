mod hashmap_account_store;
mod hashmap_movie_store;
mod postgres_account_store;
mod postgres_movie_store;

pub use hashmap_account_store::HashMapAccountStore;
pub use hashmap_movie_store::HashMapMovieStore;
pub use postgres_account_store::PostgresAccountStore;
pub use postgres_movie_store::PostgresMovieStore;
