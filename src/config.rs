use std::{str::FromStr, time::Duration};

use crate::{error::config::ConfigError, model::player_display::PlayerNameDisplay};

const PLACEHOLDER_TOKEN: &str = "YOUR_BOT_TOKEN_HERE";
const DEFAULT_SERVER_NAME: &str = "Conan Exiles Server";
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 5;
const DEFAULT_FALLBACK_TIMEOUT_SECS: u64 = 10;

pub struct Config {
    pub discord_bot_token: String,

    pub server_host: String,
    pub server_port: u16,
    /// Name shown when the server reports none, and on the offline message.
    pub server_name: String,

    pub status_channel_id: u64,
    /// Connect string disclosed by the join button, e.g. `steam://connect/1.2.3.4:27015`.
    pub connect_url: String,
    pub player_names: PlayerNameDisplay,

    pub fallback_api_url: Option<String>,

    pub query_timeout: Duration,
    pub fallback_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value of an environment variable by name
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidValue)` - A variable failed to parse
    /// - `Err(ConfigError::PlaceholderToken)` - The bot token was left as the placeholder
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let discord_bot_token = require("DISCORD_BOT_TOKEN")?;
        if discord_bot_token.trim() == PLACEHOLDER_TOKEN {
            return Err(ConfigError::PlaceholderToken);
        }

        let status_channel_id: u64 = parse_var("STATUS_CHANNEL_ID", &require("STATUS_CHANNEL_ID")?)?;
        if status_channel_id == 0 {
            return Err(ConfigError::InvalidValue {
                name: "STATUS_CHANNEL_ID".to_string(),
                reason: "channel id must be non-zero".to_string(),
            });
        }

        let fallback_api_url = match get("FALLBACK_API_URL") {
            Some(value) => {
                url::Url::parse(value.trim()).map_err(|e| ConfigError::InvalidValue {
                    name: "FALLBACK_API_URL".to_string(),
                    reason: e.to_string(),
                })?;
                Some(value.trim().to_string())
            }
            None => None,
        };

        Ok(Self {
            discord_bot_token,
            server_host: require("SERVER_HOST")?,
            server_port: parse_var("SERVER_PORT", &require("SERVER_PORT")?)?,
            server_name: get("SERVER_NAME").unwrap_or_else(|| DEFAULT_SERVER_NAME.to_string()),
            status_channel_id,
            connect_url: require("CONNECT_URL")?,
            player_names: match get("PLAYER_NAMES") {
                Some(value) => parse_var("PLAYER_NAMES", &value)?,
                None => PlayerNameDisplay::default(),
            },
            fallback_api_url,
            query_timeout: Duration::from_secs(match get("QUERY_TIMEOUT_SECS") {
                Some(value) => parse_var("QUERY_TIMEOUT_SECS", &value)?,
                None => DEFAULT_QUERY_TIMEOUT_SECS,
            }),
            fallback_timeout: Duration::from_secs(match get("FALLBACK_TIMEOUT_SECS") {
                Some(value) => parse_var("FALLBACK_TIMEOUT_SECS", &value)?,
                None => DEFAULT_FALLBACK_TIMEOUT_SECS,
            }),
        })
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidValue {
            name: name.to_string(),
            reason: e.to_string(),
        })
}
