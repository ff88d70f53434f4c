//! MediClean Site Server
//!
//! Run with: cargo run --bin mediclean
//!
//! # Configuration
//!
//! Read from `<config_dir>/mediclean/config.toml` or `./mediclean.toml`,
//! then overridden by environment variables:
//! - `MEDICLEAN_HOST`: Host to bind to (default: 0.0.0.0)
//! - `MEDICLEAN_PORT`: Port to listen on (default: 8080)
//! - `MEDICLEAN_DIST_DIR`: Built frontend (default: ./mediclean-ui/dist)
//! - `MEDICLEAN_LOG_LEVEL`, `MEDICLEAN_LOG_FORMAT`
//! - `RUST_LOG`: Full filter, wins over the log level

use anyhow::Context;
use mediclean::config::Config;
use mediclean::logging::init_tracing;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Config::load_default();
    init_tracing(&loaded.config.logging);
    loaded.log();
    let config = loaded.config;

    tracing::info!("Starting MediClean site server v{}", env!("CARGO_PKG_VERSION"));

    let index = Path::new(&config.site.dist_dir).join("index.html");
    if !index.exists() {
        tracing::warn!(
            "No index.html in {:?}; build the frontend with `trunk build` first",
            config.site.dist_dir
        );
    }

    mediclean::site::serve(&config.site)
        .await
        .context("site server failed")?;

    tracing::info!("MediClean site server stopped");
    Ok(())
}
