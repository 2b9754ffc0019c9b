//! ECOLOGIC Server - Main entry point

use anyhow::Result;
use ecologic_common::logging::{init_logging, LogConfig};
use tracing::info;

use ecologic_server::{api, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // LOG_* variables take precedence over these defaults
    let log_config = LogConfig::builder()
        .log_file_prefix("ecologic-server")
        .filter_directives("ecologic_server=debug,tower_http=debug,reqwest=info")
        .build()
        .merge_lookup(|key| std::env::var(key).ok())?;

    let _log_guard = init_logging(&log_config)?;

    info!("Starting ECOLOGIC Server");

    let config = Config::load()?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        erp_configured = config.erp.is_configured(),
        "Configuration loaded"
    );

    api::serve(config).await
}
