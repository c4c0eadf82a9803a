//! Server status service.
//!
//! One status cycle runs fetch, render and publish in order:
//! - `fetch` - polls the game server with HTTP fallback
//! - `render` - builds the size-bounded status payload
//! - `publish` - creates or edits the single status message
//!
//! The message handle is owned by the caller (the scheduler job) and lent to each
//! cycle, so no state lives in the service itself.

pub mod fetch;
pub mod publish;
pub mod render;

#[cfg(test)]
mod test;

use chrono::Utc;

use crate::{error::AppError, model::message_handle::MessageHandle};

use self::{
    fetch::StatusFetcher,
    publish::{PublishOutcome, StatusPublisher},
    render::StatusRenderer,
};

pub struct ServerStatusService {
    fetcher: StatusFetcher,
    renderer: StatusRenderer,
    publisher: StatusPublisher,
}

impl ServerStatusService {
    pub fn new(fetcher: StatusFetcher, renderer: StatusRenderer, publisher: StatusPublisher) -> Self {
        Self {
            fetcher,
            renderer,
            publisher,
        }
    }

    /// Polls the server and publishes the result.
    ///
    /// Skips the cycle without polling if the status channel cannot be resolved.
    ///
    /// # Arguments
    /// - `handle` - Tracked status message, updated in place
    ///
    /// # Returns
    /// - `Ok(PublishOutcome)` - Status message created, edited or recreated
    /// - `Err(AppError::ChannelErr)` - Channel missing or Discord call failed
    pub async fn update_status(
        &self,
        handle: &mut MessageHandle,
    ) -> Result<PublishOutcome, AppError> {
        self.publisher.check_channel().await?;

        let poll = self.fetcher.fetch().await;
        match poll.source() {
            Some(source) => tracing::debug!("Rendering online status from {}", source.as_str()),
            None => tracing::debug!("Rendering offline status"),
        }
        let rendered = self.renderer.render(poll.status(), Utc::now());

        Ok(self.publisher.publish(handle, &rendered).await?)
    }

    /// Runs one status cycle, logging any failure.
    ///
    /// This is the error boundary of the scheduled job: nothing escapes it, so a
    /// failed cycle never stops later ones.
    pub async fn run_cycle(&self, handle: &mut MessageHandle) -> Option<PublishOutcome> {
        match self.update_status(handle).await {
            Ok(outcome) => {
                tracing::debug!("Status cycle finished with message {}", outcome.message_id());
                Some(outcome)
            }
            Err(e) => {
                tracing::error!("Error updating server status: {}", e);
                None
            }
        }
    }
}
