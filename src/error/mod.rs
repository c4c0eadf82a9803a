//! Error types for the status bot.
//!
//! `AppError` is the top-level error returned from startup and from a status cycle.
//! Errors inside a cycle are logged at the cycle boundary and never stop the
//! scheduler; only configuration and bot start-up errors end the process.

pub mod channel;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{channel::ChannelError, config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure creating, fetching or editing the status message.
    #[error(transparent)]
    ChannelErr(#[from] ChannelError),

    /// Discord client error from Serenity outside of message publishing.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// The game server query failed or timed out.
    #[error("Server query failed: {0}")]
    QueryErr(String),

    /// The fallback API was unreachable or reported a failure.
    #[error("Fallback API failed: {0}")]
    FallbackErr(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
