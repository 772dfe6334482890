use anyhow::Context;
use tracing_subscriber::EnvFilter;

use otgraph_core::ApiConfig;
use otgraph_server::db;
use otgraph_server::http::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("otgraph_server=info,tower_http=info")),
        )
        .init();

    let config = ApiConfig::load()?;

    let pool = db::pool::create_pool_with_options(
        &config.database_url(),
        config.database.max_connections,
    )
    .await
    .context("failed to connect to database")?;
    tracing::info!("Connected to database");

    let server_config = ServerConfig {
        bind_addr: config
            .bind_addr()
            .parse()
            .context("invalid server bind address")?,
        ..ServerConfig::default()
    };

    run_server(pool, server_config).await?;
    Ok(())
}
