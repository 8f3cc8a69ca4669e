use axum::{
    Router,
    http::{HeaderValue, Method, header::InvalidHeaderValue},
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use std::sync::Arc;

use crate::{config::Config, handler, service::BookingNotifier};

pub fn router(
    config: &Config,
    notifier: Arc<BookingNotifier>,
) -> Result<Router, InvalidHeaderValue> {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true);

    let mut router = Router::new()
        .route("/api/send-meeting-link", post(handler::send_meeting_link))
        .route("/health", get(handler::health_check))
        .with_state(notifier);

    // Built frontend, with client-side routes falling back to index.html
    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving frontend from {}", dir.display());
        router = router.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        );
    }

    Ok(router.layer(cors).layer(TraceLayer::new_for_http()))
}
