use std::env;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::errors::AppError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub cafe_name: String,
    pub ack_delay: Duration,
    pub allowed_origin: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cafe_name: env::var("CAFE_NAME").unwrap_or_else(|_| "BontaTea Café".to_string()),
            ack_delay: Duration::from_millis(
                env::var("ACK_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(500),
            ),
            allowed_origin: env::var("ALLOWED_ORIGIN").ok().filter(|o| !o.is_empty()),
        }
    }
}

impl AppConfig {
    /// CORS for a presentation layer served from another origin. `None` when
    /// no origin is configured.
    pub fn cors_layer(&self) -> Result<Option<CorsLayer>, AppError> {
        let Some(origin) = &self.allowed_origin else {
            return Ok(None);
        };

        let origin: HeaderValue = origin
            .parse()
            .map_err(|e| AppError::Config(format!("invalid ALLOWED_ORIGIN {origin:?}: {e}")))?;

        Ok(Some(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        ))
    }
}
