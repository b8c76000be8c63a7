use std::sync::Arc;

use color_eyre::eyre::Result;
use marquee_adapters::{
    Argon2CredentialHasher, PostgresAccountStore, PostgresMovieStore, Settings,
};
use marquee_axum::AppState;
use marquee_service::{CatalogService, configure_postgresql};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    let settings = Settings::load()?;

    // Setup database connection pool and run migrations
    let pool = configure_postgresql(&settings).await;

    // Create stores
    let op_timeout = settings.postgres.timeout();
    let accounts = Arc::new(PostgresAccountStore::new(pool.clone(), op_timeout));
    let movies = Arc::new(PostgresMovieStore::new(pool, op_timeout));

    // Credential hasher and signing key are process-wide, fixed at startup
    let hasher = Arc::new(Argon2CredentialHasher::new(settings.hasher));
    let jwt = settings.auth.jwt_config();

    let state = AppState::new(accounts, movies, hasher, jwt);
    let service = CatalogService::new(state);

    let listener = tokio::net::TcpListener::bind(settings.app.address()).await?;
    tracing::info!("Starting marquee catalog service...");

    service.run(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
