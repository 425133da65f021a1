use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bontatea::config::AppConfig;
use bontatea::handlers;
use bontatea::services::notify::BroadcastNotifier;
use bontatea::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let (events_tx, _) = broadcast::channel(256);
    let notifier = BroadcastNotifier::new(events_tx.clone(), config.ack_delay);

    let state = Arc::new(AppState {
        config: config.clone(),
        notifier: Box::new(notifier),
        events_tx,
    });

    let mut app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/", get(handlers::page::booking_page))
        .route("/booking", post(handlers::page::submit_form))
        .route("/api/bookings", post(handlers::booking::create_booking))
        .route("/api/bookings/min-date", get(handlers::booking::min_date))
        .route("/api/fields/check", post(handlers::booking::check_field))
        .route("/api/events", get(handlers::events::events_stream))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = config.cors_layer()? {
        tracing::info!(origin = ?config.allowed_origin, "enabling CORS");
        app = app.layer(cors);
    }

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting {} booking server on {addr}", config.cafe_name);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
