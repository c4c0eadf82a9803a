//! HTTP fallback status API.
//!
//! Queried only when the UDP query fails. The API answers with
//! `{"status": "success", "data": {...}}`; any other status is a failure.

use serde::Deserialize;

use crate::{
    error::AppError,
    model::server_status::{PlayerEntry, ServerStatus, MAX_SESSION_MINUTES},
};

const SUCCESS: &str = "success";

#[derive(Debug, Deserialize)]
struct FallbackResponse {
    status: String,
    #[serde(default)]
    data: Option<FallbackServerData>,
}

/// Server data as published by the fallback API.
#[derive(Debug, Deserialize)]
struct FallbackServerData {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    map: Option<String>,
    #[serde(default)]
    players: u32,
    #[serde(default)]
    max_players: u32,
    #[serde(default)]
    player_list: Vec<FallbackPlayer>,
}

#[derive(Debug, Deserialize)]
struct FallbackPlayer {
    #[serde(default)]
    name: Option<String>,
    /// Minutes connected, possibly fractional.
    #[serde(default)]
    duration: f64,
}

/// Converts a reported duration into whole minutes within `0..=MAX_SESSION_MINUTES`.
fn session_minutes(duration: f64) -> i64 {
    // NaN casts to 0
    duration.clamp(0.0, MAX_SESSION_MINUTES as f64) as i64
}

impl FallbackServerData {
    /// Converts the wire data into a `ServerStatus`, filling in the same defaults the
    /// query path uses for missing fields.
    fn into_status(self, default_name: &str) -> ServerStatus {
        ServerStatus {
            name: self
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| default_name.to_string()),
            map: self
                .map
                .filter(|map| !map.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            current_players: self.players,
            max_players: self.max_players,
            players: self
                .player_list
                .into_iter()
                .map(|player| {
                    PlayerEntry::new(
                        player
                            .name
                            .filter(|name| !name.is_empty())
                            .unwrap_or_else(|| "Unknown".to_string()),
                        session_minutes(player.duration),
                    )
                })
                .collect(),
        }
    }
}

pub struct FallbackApiRepository {
    http_client: reqwest::Client,
    url: String,
}

impl FallbackApiRepository {
    /// Creates a repository for the given fallback URL.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client; its timeout bounds each request
    /// - `url` - Fallback API endpoint
    pub fn new(http_client: reqwest::Client, url: String) -> Self {
        Self { http_client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the server status from the fallback API.
    ///
    /// Issues a single GET request; there is no retry within a cycle.
    ///
    /// # Arguments
    /// - `default_name` - Server name used when the API omits one
    ///
    /// # Returns
    /// - `Ok(ServerStatus)` - API reported `success` with server data
    /// - `Err(AppError::ReqwestErr)` - Network failure, timeout or malformed body
    /// - `Err(AppError::FallbackErr)` - API reported a non-success status or no data
    pub async fn fetch_status(&self, default_name: &str) -> Result<ServerStatus, AppError> {
        let response: FallbackResponse = self
            .http_client
            .get(&self.url)
            .send()
            .await?
            .json()
            .await?;

        if response.status != SUCCESS {
            return Err(AppError::FallbackErr(format!(
                "API reported status '{}'",
                response.status
            )));
        }

        let data = response
            .data
            .ok_or_else(|| AppError::FallbackErr("success response without data".to_string()))?;

        Ok(data.into_status(default_name))
    }
}
