use serenity::{
    all::{ChannelId, CreateMessage, EditMessage, MessageId},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{
    bot::component::join_server::join_server_row,
    data::discord::{embed::build_status_embed, StatusChannel},
    error::channel::ChannelError,
    model::rendered::RenderedStatus,
};

/// `StatusChannel` implementation backed by Serenity's HTTP client.
pub struct DiscordStatusChannel {
    /// Discord HTTP client shared with the bot
    http: Arc<Http>,
    /// Channel the status message lives in
    channel_id: ChannelId,
}

impl DiscordStatusChannel {
    /// Creates a status channel bound to a single Discord channel.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    /// - `channel_id` - Discord channel ID to post the status message in
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }
}

#[async_trait]
impl StatusChannel for DiscordStatusChannel {
    async fn check_channel(&self) -> Result<(), ChannelError> {
        self.http.get_channel(self.channel_id).await?;

        Ok(())
    }

    async fn send_message(&self, rendered: &RenderedStatus) -> Result<u64, ChannelError> {
        let message = CreateMessage::new()
            .embed(build_status_embed(rendered)?)
            .components(vec![join_server_row()]);

        let sent = self.channel_id.send_message(&self.http, message).await?;

        Ok(sent.id.get())
    }

    async fn fetch_message(&self, message_id: u64) -> Result<(), ChannelError> {
        self.http
            .get_message(self.channel_id, MessageId::new(message_id))
            .await?;

        Ok(())
    }

    async fn edit_message(
        &self,
        message_id: u64,
        rendered: &RenderedStatus,
    ) -> Result<(), ChannelError> {
        let edit_message = EditMessage::new()
            .embed(build_status_embed(rendered)?)
            .components(vec![join_server_row()]);

        self.http
            .edit_message(
                self.channel_id,
                MessageId::new(message_id),
                &edit_message,
                vec![],
            )
            .await?;

        Ok(())
    }
}
