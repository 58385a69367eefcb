//! Product configuration HTTP server
//!
//! Serves the configurator API over an in-memory catalog. The catalog is
//! seeded with the `laptop_x` demo template unless `--no-sample-data` is
//! given. See `--help` for all configuration options.
//!
//! # Example
//!
//! ```bash
//! configurator-server --listen 0.0.0.0:8000 --debug
//! ```

use std::sync::Arc;

use clap::Parser;
use product_configurator::catalog::InMemoryStore;
use product_configurator::config::Settings;
use product_configurator::http;
use product_configurator::sample::seed_sample_catalog;
use product_configurator::service::ConfiguratorService;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let settings = Settings::parse();

    tracing_subscriber::fmt()
        .with_env_filter(settings.env_filter())
        .init();

    info!(
        listen = %settings.listen,
        app_name = %settings.app_name,
        sample_data = settings.seed_sample_data(),
        "Starting product configuration server"
    );

    let store = InMemoryStore::new();
    if settings.seed_sample_data() {
        if let Err(e) = seed_sample_catalog(&store) {
            error!(error = %e, "Failed to seed sample catalog");
            std::process::exit(1);
        }
    }

    let service = Arc::new(ConfiguratorService::new(store).with_name(settings.app_name.clone()));

    let listener = tokio::net::TcpListener::bind(settings.listen)
        .await
        .expect("Failed to bind address");
    info!(address = %settings.listen, "Server listening");
    http::serve(service, listener).await.expect("Server error");
}
