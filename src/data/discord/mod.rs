//! Status channel on Discord.
//!
//! `StatusChannel` is the chat platform collaborator used by the publisher. The
//! production implementation, `DiscordStatusChannel`, talks to Discord through
//! Serenity's HTTP client; `embed` converts a `RenderedStatus` into an embed.

pub mod channel;
pub mod embed;

use serenity::async_trait;

use crate::{error::channel::ChannelError, model::rendered::RenderedStatus};

pub use channel::DiscordStatusChannel;

/// Chat platform operations needed to keep one status message alive.
///
/// Every message sent or edited carries the join button alongside the rendered
/// status.
#[async_trait]
pub trait StatusChannel: Send + Sync {
    /// Confirms the target channel exists and is reachable.
    async fn check_channel(&self) -> Result<(), ChannelError>;

    /// Posts a new status message and returns its id.
    async fn send_message(&self, rendered: &RenderedStatus) -> Result<u64, ChannelError>;

    /// Confirms the message with the given id still exists.
    async fn fetch_message(&self, message_id: u64) -> Result<(), ChannelError>;

    /// Replaces the content of an existing status message.
    async fn edit_message(
        &self,
        message_id: u64,
        rendered: &RenderedStatus,
    ) -> Result<(), ChannelError>;
}
