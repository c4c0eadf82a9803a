//! Join button shown under the status message.
//!
//! The button holds no per-message state, so it is rebuilt on every publish and
//! keeps working across bot restarts.

use serenity::all::{ButtonStyle, CreateActionRow, CreateButton};

/// Custom id routed to the join button handler.
pub const JOIN_BUTTON_ID: &str = "server_status:join";

pub fn join_server_button() -> CreateButton {
    CreateButton::new(JOIN_BUTTON_ID)
        .label("Join Server")
        .style(ButtonStyle::Primary)
}

/// Action row containing only the join button.
pub fn join_server_row() -> CreateActionRow {
    CreateActionRow::Buttons(vec![join_server_button()])
}

/// Text sent privately to the user who pressed the button.
pub fn join_server_reply(connect_url: &str) -> String {
    format!("Join the server: `{}`", connect_url)
}
