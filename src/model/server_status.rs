//! Server status snapshot produced by a single poll.

/// Snapshot of the game server produced fresh on every poll.
///
/// Built either from the query protocol or from the fallback API and discarded once
/// it has been rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerStatus {
    /// Server display name.
    pub name: String,
    /// Currently loaded map.
    pub map: String,
    /// Player count reported by the server.
    pub current_players: u32,
    /// Maximum player slots.
    pub max_players: u32,
    /// Connected players in the order the query layer returned them.
    pub players: Vec<PlayerEntry>,
}

/// Longest session a poll source may report, one year in minutes. Longer
/// durations are clamped to it.
pub const MAX_SESSION_MINUTES: i64 = 60 * 24 * 365;

/// A single connected player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerEntry {
    /// Player name as reported by the server.
    pub display_name: String,
    /// Whole minutes the player has been connected.
    pub session_minutes: i64,
}

impl PlayerEntry {
    pub fn new(display_name: impl Into<String>, session_minutes: i64) -> Self {
        Self {
            display_name: display_name.into(),
            session_minutes,
        }
    }
}

/// Where an online status was obtained from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollSource {
    /// Direct UDP query against the game server.
    Query,
    /// HTTP fallback API.
    Fallback,
}

/// Outcome of polling the server.
///
/// Polling never fails outright: every failure path collapses into `Offline`, which
/// is rendered as the offline status message.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerPoll {
    Online {
        status: ServerStatus,
        source: PollSource,
    },
    Offline,
}

impl PollSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Fallback => "fallback API",
        }
    }
}

impl ServerPoll {
    /// Returns the polled status, or `None` when the server is offline or unreachable.
    pub fn status(&self) -> Option<&ServerStatus> {
        match self {
            Self::Online { status, .. } => Some(status),
            Self::Offline => None,
        }
    }

    /// Returns where the status came from, or `None` when offline.
    pub fn source(&self) -> Option<PollSource> {
        match self {
            Self::Online { source, .. } => Some(*source),
            Self::Offline => None,
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online { .. })
    }
}
