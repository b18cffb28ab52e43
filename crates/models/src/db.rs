use std::env;
use std::time::Duration;

use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://pizza_catalog.db?mode=rwc".to_string())
});

/// Connect using config.toml when it names a database, else the
/// `DATABASE_URL` environment fallback.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    match configs::load_default() {
        Ok(cfg) if !cfg.database.url.trim().is_empty() => connect_with(&cfg.database).await,
        _ => connect_to(DATABASE_URL.as_str()).await,
    }
}

pub async fn connect_with(cfg: &configs::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    Ok(db)
}

pub async fn connect_to(url: &str) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.sqlx_logging(false);
    // An in-memory SQLite database exists per connection; pin the pool to one
    if url.contains(":memory:") {
        opts.max_connections(1).min_connections(1);
    }
    let db = Database::connect(opts).await?;
    Ok(db)
}
