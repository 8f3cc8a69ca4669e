mod app;
mod booking;
mod config;
mod dto;
mod handler;
mod mailer;
mod service;
mod templates;

use std::{env, sync::Arc};

use mailer::SmtpMailer;
use service::BookingNotifier;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` directives when set and valid, INFO otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() {
    // Log setup
    let rust_log = env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    // Load config
    let cfg = config::load_config().expect("failed to locate or load config file");
    tracing::info!("Successfully loaded booking notifier config");

    // Mail transport is shared read-only by every request
    let mailer = SmtpMailer::new(&cfg).expect("failed to configure SMTP relay");
    let notifier = Arc::new(BookingNotifier::new(&cfg, Arc::new(mailer)));

    // Setup router
    let router = app::router(&cfg, notifier).expect("invalid CORS origin in config");

    // Start server
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cfg.port))
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().expect("Failed to read bound address");

    tracing::info!("Server running on {}", addr);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}

#[cfg(test)]
mod tests {
    use super::*;

    use tracing::level_filters::LevelFilter;

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn log_filter_honours_rust_log() {
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
