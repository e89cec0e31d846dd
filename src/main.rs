//! Parking Core - Parking-lot ticketing service
//!
//! Issues a ticket when a vehicle enters a lot and computes the amount
//! owed when it leaves, billed in 15-minute slots.

use std::sync::Arc;

use sqlx::sqlite::SqlitePool;
use tokio::net::TcpListener;

mod api;
mod config;
mod domain;
mod engine;
mod error;
mod logging;
mod storage;

use crate::api::build_router;
use crate::config::Config;
use crate::engine::{RandomDigits, SystemClock, Tariff, TicketDesk};
use crate::storage::TicketRepository;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Ticket lifecycle and billing.
    pub desk: Arc<TicketDesk>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    // This is optional and won't fail if .env doesn't exist
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    // Load configuration; logging is configured from it, so report failures on stderr
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    // Initialize logging
    logging::init(&config.logging);

    tracing::info!("Starting Parking Core v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        anyhow::anyhow!("{}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        database = %config.database.url,
        table = %config.database.table,
        price_per_hour = config.billing.price_per_hour,
        slot_minutes = config.billing.slot_minutes,
        "Configuration loaded"
    );

    // Connect to database
    let pool = SqlitePool::connect(&config.database.url)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to database");
            anyhow::anyhow!("Database connection error: {}", e)
        })?;

    // Initialize repository and schema
    let repository = TicketRepository::new(pool, config.database.table.clone());
    repository.init_schema().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to initialize database schema");
        anyhow::anyhow!("Schema initialization error: {}", e)
    })?;

    tracing::info!(
        table = %repository.table(),
        "Database connected and schema initialized"
    );

    // Build the ticket desk
    let desk = TicketDesk::new(
        repository,
        Tariff::from_config(&config.billing),
        Arc::new(SystemClock),
        Box::new(RandomDigits::new(config.tickets.id_length)),
        config.tickets.max_id_attempts,
    );

    let state = AppState {
        desk: Arc::new(desk),
    };

    // Build router
    let app = build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
