//! Keeps exactly one status message alive in the target channel.

use std::sync::Arc;

use crate::{
    data::discord::StatusChannel,
    error::channel::ChannelError,
    model::{message_handle::MessageHandle, rendered::RenderedStatus},
};

/// What a publish call did to the status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// No message was tracked; a new one was sent.
    Created(u64),
    /// The tracked message was edited in place.
    Edited(u64),
    /// The tracked message had been deleted; a replacement was sent.
    Recreated { previous: u64, message_id: u64 },
}

impl PublishOutcome {
    pub fn message_id(&self) -> u64 {
        match *self {
            Self::Created(id) | Self::Edited(id) => id,
            Self::Recreated { message_id, .. } => message_id,
        }
    }
}

pub struct StatusPublisher {
    channel: Arc<dyn StatusChannel>,
}

impl StatusPublisher {
    pub fn new(channel: Arc<dyn StatusChannel>) -> Self {
        Self { channel }
    }

    /// Confirms the target channel is reachable before a cycle publishes.
    pub async fn check_channel(&self) -> Result<(), ChannelError> {
        self.channel.check_channel().await
    }

    /// Publishes the rendered status, editing the tracked message when possible.
    ///
    /// With no tracked message a new one is sent and stored in `handle`. With a
    /// tracked message it is fetched and edited in place. If Discord reports the
    /// message as missing, the handle is cleared and a replacement is sent within
    /// the same call. Any other failure leaves `handle` untouched so the next cycle
    /// retries the edit.
    ///
    /// # Arguments
    /// - `handle` - Tracked status message, updated in place
    /// - `rendered` - Status to display
    ///
    /// # Returns
    /// - `Ok(PublishOutcome)` - Message created, edited or recreated
    /// - `Err(ChannelError)` - Sending or editing failed; nothing is retried
    pub async fn publish(
        &self,
        handle: &mut MessageHandle,
        rendered: &RenderedStatus,
    ) -> Result<PublishOutcome, ChannelError> {
        let Some(message_id) = handle.message_id() else {
            let message_id = self.create(handle, rendered).await?;
            tracing::info!("Sent initial server status message with ID {}", message_id);
            return Ok(PublishOutcome::Created(message_id));
        };

        match self.update(message_id, rendered).await {
            Ok(()) => {
                tracing::info!("Updated server status message {}", message_id);
                Ok(PublishOutcome::Edited(message_id))
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!(
                    "Server status message {} not found, sending new one",
                    message_id
                );
                handle.clear();

                let new_id = self.create(handle, rendered).await?;
                tracing::info!("Sent new server status message with ID {}", new_id);

                Ok(PublishOutcome::Recreated {
                    previous: message_id,
                    message_id: new_id,
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn create(
        &self,
        handle: &mut MessageHandle,
        rendered: &RenderedStatus,
    ) -> Result<u64, ChannelError> {
        let message_id = self.channel.send_message(rendered).await?;
        handle.set(message_id);

        Ok(message_id)
    }

    async fn update(&self, message_id: u64, rendered: &RenderedStatus) -> Result<(), ChannelError> {
        self.channel.fetch_message(message_id).await?;
        self.channel.edit_message(message_id, rendered).await
    }
}
