//! Game server query over the Steam A2S protocol.

use std::time::Duration;

use a2s::A2SClient;
use serenity::async_trait;

use crate::error::AppError;

/// Server information returned by an A2S_INFO request.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryInfo {
    pub server_name: String,
    pub map_name: String,
    pub player_count: u32,
    pub max_players: u32,
}

/// A connected player returned by an A2S_PLAYER request.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlayer {
    pub name: String,
    /// Seconds the player has been connected.
    pub duration_seconds: f32,
}

/// Query protocol collaborator.
#[async_trait]
pub trait ServerQuery: Send + Sync {
    /// Requests server information.
    async fn info(&self, host: &str, port: u16) -> Result<QueryInfo, AppError>;

    /// Requests the connected player list in server order.
    async fn players(&self, host: &str, port: u16) -> Result<Vec<QueryPlayer>, AppError>;
}

/// `ServerQuery` backed by the `a2s` crate.
///
/// Every request is bounded by the configured timeout; a server that never answers
/// surfaces as `AppError::QueryErr`.
pub struct A2sServerQuery {
    client: A2SClient,
    timeout: Duration,
}

impl A2sServerQuery {
    /// Binds the UDP socket used for all queries.
    ///
    /// # Arguments
    /// - `timeout` - Upper bound for each individual request
    ///
    /// # Returns
    /// - `Ok(A2sServerQuery)` - Socket bound and ready
    /// - `Err(AppError::QueryErr)` - Failed to bind the local UDP socket
    pub async fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = A2SClient::new()
            .await
            .map_err(|e| AppError::QueryErr(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    async fn bounded<T, E, F>(&self, request: F) -> Result<T, AppError>
    where
        E: std::fmt::Display,
        F: std::future::Future<Output = Result<T, E>>,
    {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result.map_err(|e| AppError::QueryErr(e.to_string())),
            Err(_) => Err(AppError::QueryErr(format!(
                "no response within {}s",
                self.timeout.as_secs_f32()
            ))),
        }
    }
}

#[async_trait]
impl ServerQuery for A2sServerQuery {
    async fn info(&self, host: &str, port: u16) -> Result<QueryInfo, AppError> {
        let info = self.bounded(self.client.info((host, port))).await?;

        Ok(QueryInfo {
            server_name: info.name,
            map_name: info.map,
            player_count: u32::from(info.players),
            max_players: u32::from(info.max_players),
        })
    }

    async fn players(&self, host: &str, port: u16) -> Result<Vec<QueryPlayer>, AppError> {
        let players = self.bounded(self.client.players((host, port))).await?;

        Ok(players
            .into_iter()
            .map(|player| QueryPlayer {
                name: player.name,
                duration_seconds: player.duration,
            })
            .collect())
    }
}
