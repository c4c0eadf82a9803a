use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// Connect string disclosed by the join button
    pub connect_url: String,
    /// Server name shown in the bot's activity
    pub server_name: String,
}

impl Handler {
    pub fn new(connect_url: String, server_name: String) -> Self {
        Self {
            connect_url,
            server_name,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.server_name, ctx, ready).await;
    }

    /// Called when a user interacts with a command or message component
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.connect_url, ctx, interaction).await;
    }
}
