use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::{
    data::fallback_api::FallbackApiRepository,
    model::{
        message_handle::MessageHandle, player_display::PlayerNameDisplay,
        server_status::ServerPoll,
    },
    service::server_status::{
        fetch::StatusFetcher,
        publish::{PublishOutcome, StatusPublisher},
        render::{
            degrade_oversized, pack_player_lines, player_lines, StatusRenderer, MAP_FIELD,
            PLAYERS_FIELD, PLAYERS_ONLINE_CONTINUED_FIELD, PLAYERS_ONLINE_FIELD, STATUS_FIELD,
        },
        ServerStatusService,
    },
    test_util::{
        factory,
        fallback_server,
        mock::{ChannelCall, MockServerQuery, MockStatusChannel},
    },
};


const CONNECT_URL: &str = "steam://connect/127.0.0.1:27015";
const DEFAULT_NAME: &str = "Conan Exiles Server";

/// Fixed render time so connect-time markers are predictable.
fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn renderer(display: PlayerNameDisplay) -> StatusRenderer {
    StatusRenderer::new(display, CONNECT_URL.to_string(), DEFAULT_NAME.to_string())
}

fn fetcher(query: MockServerQuery, fallback_url: Option<String>) -> StatusFetcher {
    StatusFetcher::new(
        Arc::new(query),
        fallback_url
            .map(|url| FallbackApiRepository::new(fallback_server::test_http_client(), url)),
        "127.0.0.1".to_string(),
        27015,
        DEFAULT_NAME.to_string(),
    )
}
