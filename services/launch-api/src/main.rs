use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use launch_api::{app, AppState, Config};
use launchdeck_core::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = Config::from_env();
    let state = Arc::new(AppState::new(config.clone()).await?);

    let router = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Launch API listening on {}", bind_addr);

    axum::serve(listener, router).await?;
    Ok(())
}
