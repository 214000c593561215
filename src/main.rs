//! Files service schema bootstrap - main entry point.
//!
//! Connects to the configured database, applies the one-shot schema
//! initialization, and exits. Intended to run ahead of the files service
//! during deployment; a failure leaves the schema untouched and aborts the
//! rollout.

use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use files_bootstrap::config::Config;
use files_bootstrap::error::{AppError, AppResult};
use files_bootstrap::{db, migration};

async fn run() -> AppResult<()> {
    let config = Config::from_env()?;

    info!("environment: {}", config.environment);
    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    let db = db::connect(&config).await.map_err(AppError::Connect)?;
    migration::apply(&db).await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    if let Err(err) = run().await {
        error!("schema bootstrap aborted: {}", err);
        if matches!(err, AppError::Config(_)) {
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL must be set and must not be a development default");
        }
        std::process::exit(1);
    }

    info!("schema bootstrap finished");
}
