use std::sync::Arc;

use anyhow::{Error, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use notification_service::{
    api::run_api_server,
    config::Config,
    storage::{Storage, connect_mongo_in_background},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;

    let storage = Arc::new(Storage::in_memory());

    match config.provided_mongo_uri() {
        Some(uri) => connect_mongo_in_background(storage.clone(), uri.to_string()),
        None => info!("No MONGO_URI, using memory storage"),
    }

    run_api_server(config, storage).await
}
