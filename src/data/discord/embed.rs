//! Status embed builder.

use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::{
    error::internal::InternalError,
    model::rendered::{RenderedStatus, EMBED_TOTAL_LIMIT},
};

/// Embed colour while the server is reachable.
pub const ONLINE_COLOR: u32 = 0x3498DB;
/// Embed colour while the server is offline or unreachable.
pub const OFFLINE_COLOR: u32 = 0xE74C3C;

/// Builds the Discord embed for a rendered status.
///
/// Blocks become embed fields in order. The footer carries the attribution and the
/// embed timestamp is the render time.
///
/// # Arguments
/// - `rendered` - Rendered status to display
///
/// # Returns
/// - `Ok(CreateEmbed)` - Discord embed ready for posting
/// - `Err(InternalError::InvalidDiscordTimestamp)` - Render time out of range
pub fn build_status_embed(rendered: &RenderedStatus) -> Result<CreateEmbed, InternalError> {
    let unix = rendered.generated_at.timestamp();
    let timestamp = Timestamp::from_unix_timestamp(unix).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: unix,
            reason: e.to_string(),
        }
    })?;

    let size = rendered.total_size() + rendered.footer.chars().count();
    if size > EMBED_TOTAL_LIMIT {
        tracing::warn!(
            "Status embed is {} characters, above Discord's limit of {}",
            size,
            EMBED_TOTAL_LIMIT
        );
    }

    let color = if rendered.online {
        ONLINE_COLOR
    } else {
        OFFLINE_COLOR
    };

    let embed = CreateEmbed::new()
        .title(&rendered.title)
        .description(&rendered.description)
        .color(color)
        .fields(
            rendered
                .blocks
                .iter()
                .map(|block| (block.name.clone(), block.value.clone(), block.inline)),
        )
        .footer(CreateEmbedFooter::new(&rendered.footer))
        .timestamp(timestamp);

    Ok(embed)
}
