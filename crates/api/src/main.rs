use anyhow::Result;
use persistence::{CachedGuestStore, GuestStore, MemoryGuestStore, PgGuestStore, SupabaseGuestStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod app;
mod config;
mod error;
mod middleware;
mod routes;
mod services;
mod session;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration; missing secrets are fatal here
    let config = config::Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging);

    info!("Starting Wedding Addresses API v{}", env!("CARGO_PKG_VERSION"));

    // Build the configured store backend
    let store = build_store(&config).await?;

    // Startup readiness check: a store we cannot reach is a configuration
    // error, not something to limp along without.
    match store.exists_and_reachable().await {
        Ok(true) => info!("Guest store is reachable"),
        Ok(false) => anyhow::bail!(
            "Guest store readiness check failed; verify the store configuration"
        ),
        Err(err) => anyhow::bail!(
            "Guest store is not reachable: {err}. Verify WG__DATABASE__URL (postgres backend) \
             or WG__SUPABASE__URL / WG__SUPABASE__API_KEY (supabase backend)"
        ),
    }

    // Wrap reads in the time-boxed cache
    let ttl = Duration::from_secs(config.cache.list_ttl_secs);
    let store: Arc<dyn GuestStore> = Arc::new(CachedGuestStore::new(store, ttl));

    // Build application
    let app = app::create_app(config.clone(), store);

    // Start server
    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Selects the store backend from configuration. Calling code only ever
/// sees the `GuestStore` trait.
async fn build_store(config: &config::Config) -> Result<Arc<dyn GuestStore>> {
    match config.store.backend.as_str() {
        "postgres" => {
            // connect() also applies pending migrations.
            let store = PgGuestStore::connect(&config.database_config()).await?;
            Ok(Arc::new(store))
        }
        "supabase" => {
            let store =
                SupabaseGuestStore::new(&config.supabase.url, &config.supabase.api_key)?;
            Ok(Arc::new(store))
        }
        "memory" => {
            info!("Using in-memory store; records are lost on restart");
            Ok(Arc::new(MemoryGuestStore::new()))
        }
        other => anyhow::bail!("Unknown store backend: {other}"),
    }
}
