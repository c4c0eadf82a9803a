//! Rendering of a polled status into a size-bounded display payload.
//!
//! Rendering runs in two independent passes:
//! 1. `pack_player_lines` greedily packs player lines into blocks that each fit a
//!    single embed field.
//! 2. `degrade_oversized` checks the size of the whole message and replaces the
//!    player breakdown with a one-line summary when it would not fit.

use chrono::{DateTime, Utc};

use crate::model::{
    player_display::PlayerNameDisplay,
    rendered::{
        RenderedStatus, StatusBlock, FIELD_VALUE_LIMIT, PLAYER_LIST_BUDGET, TITLE_LIMIT,
    },
    server_status::{PlayerEntry, ServerStatus},
};

pub const STATUS_FIELD: &str = "Status";
pub const MAP_FIELD: &str = "Map";
pub const PLAYERS_FIELD: &str = "Players";
pub const PLAYERS_ONLINE_FIELD: &str = "Players Online";
pub const PLAYERS_ONLINE_CONTINUED_FIELD: &str = "Players Online (cont.)";

const FOOTER: &str = "Server Status Bot • Updates every 5 minutes";

/// Turns a polled status into a `RenderedStatus`.
pub struct StatusRenderer {
    player_names: PlayerNameDisplay,
    connect_url: String,
    /// Title used for the offline message
    default_name: String,
}

impl StatusRenderer {
    pub fn new(player_names: PlayerNameDisplay, connect_url: String, default_name: String) -> Self {
        Self {
            player_names,
            connect_url,
            default_name,
        }
    }

    /// Renders the status message.
    ///
    /// An absent status renders the offline message: placeholder name, `Unknown`
    /// map, `0/0` players and no player breakdown.
    ///
    /// # Arguments
    /// - `status` - Polled status, or `None` when the server is offline
    /// - `now` - Current time, used for connect-time markers and the timestamp
    pub fn render(&self, status: Option<&ServerStatus>, now: DateTime<Utc>) -> RenderedStatus {
        let Some(status) = status else {
            return self.render_offline(now);
        };

        let mut blocks = vec![
            StatusBlock::new(STATUS_FIELD, "Online", false),
            StatusBlock::new(MAP_FIELD, &status.map, true),
            StatusBlock::new(
                PLAYERS_FIELD,
                format!("{}/{}", status.current_players, status.max_players),
                true,
            ),
        ];

        if self.player_names.shows_section() {
            if status.players.is_empty() {
                blocks.push(StatusBlock::player(
                    PLAYERS_ONLINE_FIELD,
                    format!("{} players (names unavailable)", status.current_players),
                ));
            } else {
                let lines = player_lines(&status.players, self.player_names, now.timestamp());
                blocks.extend(pack_player_lines(&lines));
            }
        }

        let mut rendered = RenderedStatus {
            title: truncate_chars(status.name.clone(), TITLE_LIMIT),
            description: self.description(),
            online: true,
            blocks,
            footer: FOOTER.to_string(),
            generated_at: now,
        };

        if degrade_oversized(&mut rendered, status.current_players) {
            tracing::warn!(
                "Player list for {} players exceeds message size, showing summary",
                status.current_players
            );
        }

        rendered
    }

    fn render_offline(&self, now: DateTime<Utc>) -> RenderedStatus {
        RenderedStatus {
            title: truncate_chars(self.default_name.clone(), TITLE_LIMIT),
            description: self.description(),
            online: false,
            blocks: vec![
                StatusBlock::new(STATUS_FIELD, "Offline", false),
                StatusBlock::new(MAP_FIELD, "Unknown", true),
                StatusBlock::new(PLAYERS_FIELD, "0/0", true),
            ],
            footer: FOOTER.to_string(),
            generated_at: now,
        }
    }

    fn description(&self) -> String {
        format!("Join the server: `{}`", self.connect_url)
    }
}

/// Formats one display line per player.
///
/// Each line carries a Discord relative timestamp of the estimated connect time.
/// Anonymized lines are numbered in list order. Lines longer than a single field
/// are truncated. Connect times saturate on absurd session lengths.
///
/// # Arguments
/// - `players` - Players in query order
/// - `display` - Whether to show real or anonymized names
/// - `now` - Current time as a Unix timestamp
pub fn player_lines(players: &[PlayerEntry], display: PlayerNameDisplay, now: i64) -> Vec<String> {
    players
        .iter()
        .enumerate()
        .map(|(index, player)| {
            let connected_at =
                now.saturating_sub(player.session_minutes.saturating_mul(60));
            let label = match display {
                PlayerNameDisplay::Anonymize => format!("Player {}", index + 1),
                _ => player.display_name.clone(),
            };

            truncate_chars(
                format!("{} (Time: <t:{}:R>)", label, connected_at),
                FIELD_VALUE_LIMIT,
            )
        })
        .collect()
}

/// Greedily packs lines into player blocks.
///
/// Lines are joined with newlines into the current block while the result stays
/// within `FIELD_VALUE_LIMIT` characters; the line that would overflow starts the
/// next block. The first block is titled `Players Online`, later ones
/// `Players Online (cont.)`. An empty block has the value `None`.
///
/// # Arguments
/// - `lines` - Lines no longer than `FIELD_VALUE_LIMIT` characters each
///
/// # Returns
/// - At least one block
pub fn pack_player_lines(lines: &[String]) -> Vec<StatusBlock> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_size = 0;

    for line in lines {
        let line_size = line.chars().count();

        if !current.is_empty() && current_size + 1 + line_size > FIELD_VALUE_LIMIT {
            blocks.push(close_block(blocks.len(), &current));
            current.clear();
            current_size = 0;
        }

        if !current.is_empty() {
            current_size += 1;
        }
        current_size += line_size;
        current.push(line);
    }

    blocks.push(close_block(blocks.len(), &current));

    blocks
}

fn close_block(index: usize, lines: &[&str]) -> StatusBlock {
    let name = if index == 0 {
        PLAYERS_ONLINE_FIELD
    } else {
        PLAYERS_ONLINE_CONTINUED_FIELD
    };

    let value = if lines.is_empty() {
        "None".to_string()
    } else {
        lines.join("\n")
    };

    StatusBlock::player(name, value)
}

/// Replaces the player breakdown with a summary if the message is too large.
///
/// # Arguments
/// - `rendered` - Rendered status, modified in place
/// - `player_count` - Player count stated in the summary
///
/// # Returns
/// - `true` - Total size exceeded `PLAYER_LIST_BUDGET` and the summary was applied
/// - `false` - Message left unchanged
pub fn degrade_oversized(rendered: &mut RenderedStatus, player_count: u32) -> bool {
    if rendered.total_size() <= PLAYER_LIST_BUDGET {
        return false;
    }

    rendered.blocks.retain(|block| !block.player_section);
    rendered.blocks.push(StatusBlock::player(
        PLAYERS_ONLINE_FIELD,
        format!("{} players online (too many to list)", player_count),
    ));

    true
}

fn truncate_chars(value: String, limit: usize) -> String {
    match value.char_indices().nth(limit) {
        Some((end, _)) => value[..end].to_string(),
        None => value,
    }
}
