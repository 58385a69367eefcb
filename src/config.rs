//! Server settings, read from flags and environment variables.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::service::DEFAULT_APP_NAME;

/// Product configuration HTTP server
#[derive(Parser, Debug, Clone)]
#[command(name = "configurator-server")]
#[command(about = "HTTP server for product templates, options and compatibility rules")]
pub struct Settings {
    /// Listen address
    #[arg(long, default_value = "127.0.0.1:8000", env = "CONFIGURATOR_LISTEN")]
    pub listen: SocketAddr,

    /// Name reported by the welcome and health endpoints
    #[arg(long, default_value = DEFAULT_APP_NAME, env = "CONFIGURATOR_APP_NAME")]
    pub app_name: String,

    /// Log at debug level instead of info
    #[arg(long, env = "CONFIGURATOR_DEBUG")]
    pub debug: bool,

    /// Start with an empty catalog instead of the laptop_x demo data
    #[arg(long, env = "CONFIGURATOR_NO_SAMPLE_DATA")]
    pub no_sample_data: bool,
}

impl Settings {
    pub fn seed_sample_data(&self) -> bool {
        !self.no_sample_data
    }

    /// `RUST_LOG` when set, otherwise this crate and tower_http at the
    /// level selected by `--debug`.
    pub fn env_filter(&self) -> EnvFilter {
        let level = if self.debug { "debug" } else { "info" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "product_configurator={level},configurator_server={level},tower_http={level}"
            ))
        })
    }
}
