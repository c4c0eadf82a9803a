//! Interaction handler for the status message components.

use serenity::all::{
    Context, CreateInteractionResponse, CreateInteractionResponseMessage, Interaction,
};

use crate::bot::component::join_server::{join_server_reply, JOIN_BUTTON_ID};

/// Handles component interactions.
///
/// Only the join button is handled: the connect string is sent back as an
/// ephemeral message visible to the user who pressed it. Other interactions are
/// ignored.
///
/// # Arguments
/// - `connect_url` - Connect string to disclose
/// - `ctx` - Discord context for responding to the interaction
/// - `interaction` - Incoming interaction
pub async fn handle_interaction(connect_url: &str, ctx: Context, interaction: Interaction) {
    let Interaction::Component(component) = interaction else {
        return;
    };

    if component.data.custom_id != JOIN_BUTTON_ID {
        tracing::debug!(
            "Ignoring component interaction with id {}",
            component.data.custom_id
        );
        return;
    }

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(join_server_reply(connect_url))
            .ephemeral(true),
    );

    if let Err(e) = component.create_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to respond to join button for user {}: {}",
            component.user.id,
            e
        );
    }
}
