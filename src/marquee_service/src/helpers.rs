use marquee_adapters::Settings;
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Configure and return a PostgreSQL connection pool
///
/// Creates the pool from the loaded settings and runs all pending
/// migrations.
///
/// # Panics
/// Panics if unable to create the pool or run migrations
pub async fn configure_postgresql(settings: &Settings) -> PgPool {
    let pool = get_postgres_pool(settings)
        .await
        .expect("Failed to create Postgres connection pool");

    // Run database migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create a PostgreSQL connection pool bounded by the configured
/// acquire timeout.
pub async fn get_postgres_pool(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.postgres.max_connections)
        .acquire_timeout(settings.postgres.timeout())
        .connect(settings.postgres.url.expose_secret())
        .await
}
