//! Coffee Resource Service binary.
//!
//! Loads configuration from the environment (and an optional `.env` file for
//! local development) and runs the HTTP server until shutdown.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Database credentials come from .env during local development.
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;
    server::start_server(config).await?;

    Ok(())
}
