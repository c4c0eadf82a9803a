//! Test factories for status models.

use crate::{
    data::server_query::{QueryInfo, QueryPlayer},
    model::server_status::{PlayerEntry, ServerStatus},
};

/// Creates a status with the given players, `current_players` matching the list.
///
/// # Arguments
/// - `name` - Server name
/// - `players` - `(name, session_minutes)` pairs in list order
pub fn create_status(name: &str, players: &[(&str, i64)]) -> ServerStatus {
    ServerStatus {
        name: name.to_string(),
        map: "Isle".to_string(),
        current_players: players.len() as u32,
        max_players: 40,
        players: players
            .iter()
            .map(|(name, minutes)| PlayerEntry::new(*name, *minutes))
            .collect(),
    }
}

/// Creates a status with `count` generated players named `Survivor 1..=count`.
pub fn create_status_with_players(count: usize) -> ServerStatus {
    ServerStatus {
        name: "Fort".to_string(),
        map: "Isle".to_string(),
        current_players: count as u32,
        max_players: count as u32,
        players: (1..=count)
            .map(|i| PlayerEntry::new(format!("Survivor {}", i), i as i64))
            .collect(),
    }
}

/// Creates an A2S info response.
pub fn create_query_info(name: &str, map: &str, players: u32, max_players: u32) -> QueryInfo {
    QueryInfo {
        server_name: name.to_string(),
        map_name: map.to_string(),
        player_count: players,
        max_players,
    }
}

/// Creates an A2S player entry.
pub fn create_query_player(name: &str, duration_seconds: f32) -> QueryPlayer {
    QueryPlayer {
        name: name.to_string(),
        duration_seconds,
    }
}
