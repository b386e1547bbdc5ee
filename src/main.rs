//! court-reserve-gateway server entry point.
//!
//! Starts the Axum HTTP server with the reservation REST endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use court_reserve_gateway::api;
use court_reserve_gateway::app_state::AppState;
use court_reserve_gateway::config::GatewayConfig;
use court_reserve_gateway::domain::SystemClock;
use court_reserve_gateway::persistence::{
    InMemoryReservationStore, PostgresReservationStore, ReservationStore,
};
use court_reserve_gateway::service::{ReservationService, SharedSecretVerifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, zone = %config.park_timezone, "starting court-reserve-gateway");

    // Build the store
    let store: Arc<dyn ReservationStore> = if config.persistence_enabled {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("connected to PostgreSQL");
        Arc::new(PostgresReservationStore::new(pool))
    } else {
        tracing::warn!("persistence disabled; reservations are held in memory only");
        Arc::new(InMemoryReservationStore::new())
    };

    // Build service layer
    let reservation_service = Arc::new(ReservationService::new(
        store,
        Arc::new(SystemClock),
        Arc::new(SharedSecretVerifier::new(config.admin_override_code.clone())),
        config.park_timezone,
        config.radius_miles,
    ));

    // Build application state
    let app_state = AppState {
        reservation_service,
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
