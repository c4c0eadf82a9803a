use serenity::http::HttpError;
use thiserror::Error;

use crate::error::internal::InternalError;

/// Discord JSON error code for an unknown channel.
const UNKNOWN_CHANNEL: isize = 10003;
/// Discord JSON error code for an unknown message.
const UNKNOWN_MESSAGE: isize = 10008;

/// Errors raised while talking to the status channel.
///
/// Only `NotFound` changes publisher state; every other failure is treated as
/// transient and retried on the next scheduled cycle.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// The referenced channel or message no longer exists.
    #[error("Discord resource not found: {0}")]
    NotFound(String),

    /// Any other Discord failure (network error, rate limit, permissions).
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(Box<serenity::Error>),

    /// The status message could not be built.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl ChannelError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Classifies Serenity errors, separating 404 / unknown resource responses from
/// transient failures.
impl From<serenity::Error> for ChannelError {
    fn from(err: serenity::Error) -> Self {
        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &err {
            if is_not_found_response(response.status_code.as_u16(), response.error.code) {
                return ChannelError::NotFound(response.error.message.clone());
            }
        }

        ChannelError::Discord(Box::new(err))
    }
}

/// Whether a Discord error response means the resource is gone.
///
/// # Arguments
/// - `status` - HTTP status code of the response
/// - `code` - Discord JSON error code from the response body
pub fn is_not_found_response(status: u16, code: isize) -> bool {
    status == 404 || code == UNKNOWN_MESSAGE || code == UNKNOWN_CHANNEL
}
