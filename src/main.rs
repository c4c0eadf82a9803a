mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;

#[cfg(test)]
mod test_util;

use std::sync::Arc;

use crate::{config::Config, error::AppError, scheduler::server_status};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!("{}", e);
    })?;

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config).await?;

    let service = Arc::new(startup::build_status_service(&config, discord_http).await?);

    // Start server status scheduler
    tokio::spawn(async move {
        if let Err(e) = server_status::start_scheduler(service).await {
            tracing::error!("Server status scheduler error: {}", e);
        }
    });

    bot::start::start_bot(bot_client).await
}
