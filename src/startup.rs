use std::{sync::Arc, time::Duration};

use serenity::http::Http;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    data::{
        discord::DiscordStatusChannel, fallback_api::FallbackApiRepository,
        server_query::A2sServerQuery,
    },
    error::AppError,
    service::server_status::{
        fetch::StatusFetcher, publish::StatusPublisher, render::StatusRenderer,
        ServerStatusService,
    },
};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client used for the fallback API.
///
/// Redirects are disabled and every request is bounded by `timeout` so an
/// unresponsive fallback cannot stall a status cycle.
pub fn setup_reqwest_client(timeout: Duration) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .build()?;

    Ok(client)
}

/// Wires the status service from configuration.
///
/// # Arguments
/// - `config` - Application configuration
/// - `discord_http` - Discord HTTP client shared with the bot
///
/// # Returns
/// - `Ok(ServerStatusService)` - Service ready to be scheduled
/// - `Err(AppError)` - Failed to bind the query socket or build the HTTP client
pub async fn build_status_service(
    config: &Config,
    discord_http: Arc<Http>,
) -> Result<ServerStatusService, AppError> {
    let query = Arc::new(A2sServerQuery::new(config.query_timeout).await?);

    let fallback = match &config.fallback_api_url {
        Some(url) => Some(FallbackApiRepository::new(
            setup_reqwest_client(config.fallback_timeout)?,
            url.clone(),
        )),
        None => None,
    };

    let fetcher = StatusFetcher::new(
        query,
        fallback,
        config.server_host.clone(),
        config.server_port,
        config.server_name.clone(),
    );
    let renderer = StatusRenderer::new(
        config.player_names,
        config.connect_url.clone(),
        config.server_name.clone(),
    );
    let publisher = StatusPublisher::new(Arc::new(DiscordStatusChannel::new(
        discord_http,
        config.status_channel_id,
    )));

    Ok(ServerStatusService::new(fetcher, renderer, publisher))
}
