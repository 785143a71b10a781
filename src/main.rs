use byway_cors_rs::config::AppConfig;
use byway_cors_rs::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    logging::init(&config.log);
    tracing::info!("Configuration loaded successfully");

    server::serve(&config).await
}
