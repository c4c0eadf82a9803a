//! Status polling with HTTP fallback.

use std::sync::Arc;

use crate::{
    data::{fallback_api::FallbackApiRepository, server_query::ServerQuery},
    error::AppError,
    model::server_status::{
        PlayerEntry, PollSource, ServerPoll, ServerStatus, MAX_SESSION_MINUTES,
    },
};

/// Polls the game server, falling back to the HTTP API when the query fails.
pub struct StatusFetcher {
    /// Query protocol collaborator
    query: Arc<dyn ServerQuery>,
    /// Fallback API, if one is configured
    fallback: Option<FallbackApiRepository>,
    host: String,
    port: u16,
    /// Server name used when the server reports an empty one
    default_name: String,
}

impl StatusFetcher {
    /// Creates a new StatusFetcher instance.
    ///
    /// # Arguments
    /// - `query` - Query protocol collaborator
    /// - `fallback` - Optional fallback API repository
    /// - `host` - Game server host
    /// - `port` - Game server query port
    /// - `default_name` - Placeholder for a missing server name
    pub fn new(
        query: Arc<dyn ServerQuery>,
        fallback: Option<FallbackApiRepository>,
        host: String,
        port: u16,
        default_name: String,
    ) -> Self {
        Self {
            query,
            fallback,
            host,
            port,
            default_name,
        }
    }

    /// Polls the server.
    ///
    /// Tries the query protocol first. On failure the fallback API is asked once if
    /// configured. Every failure is logged and collapses into `ServerPoll::Offline`;
    /// this never returns an error.
    ///
    /// # Returns
    /// - `ServerPoll::Online` - Status from the query or the fallback API
    /// - `ServerPoll::Offline` - Both sources failed or no fallback is configured
    pub async fn fetch(&self) -> ServerPoll {
        let query_error = match self.query_server().await {
            Ok(status) => {
                tracing::info!(
                    "Queried {}:{} - {} ({}/{} players)",
                    self.host,
                    self.port,
                    status.name,
                    status.current_players,
                    status.max_players
                );
                return ServerPoll::Online {
                    status,
                    source: PollSource::Query,
                };
            }
            Err(e) => e,
        };

        tracing::error!(
            "Failed to query server {}:{}: {}",
            self.host,
            self.port,
            query_error
        );

        let Some(fallback) = &self.fallback else {
            return ServerPoll::Offline;
        };

        match fallback.fetch_status(&self.default_name).await {
            Ok(status) => {
                tracing::info!("Fallback API query to {} successful", fallback.url());
                ServerPoll::Online {
                    status,
                    source: PollSource::Fallback,
                }
            }
            Err(e) => {
                tracing::error!("Fallback API query to {} failed: {}", fallback.url(), e);
                ServerPoll::Offline
            }
        }
    }

    /// Requests info and the player list and maps them into a `ServerStatus`.
    ///
    /// Empty server and map names are replaced with placeholders and each player's
    /// connected time is truncated to whole minutes.
    async fn query_server(&self) -> Result<ServerStatus, AppError> {
        let info = self.query.info(&self.host, self.port).await?;
        let players = self.query.players(&self.host, self.port).await?;

        Ok(ServerStatus {
            name: non_empty_or(info.server_name, &self.default_name),
            map: non_empty_or(info.map_name, "Unknown"),
            current_players: info.player_count,
            max_players: info.max_players,
            players: players
                .into_iter()
                .map(|player| {
                    PlayerEntry::new(
                        non_empty_or(player.name, "Unknown"),
                        (player.duration_seconds.max(0.0) as i64 / 60).min(MAX_SESSION_MINUTES),
                    )
                })
                .collect(),
        })
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}
