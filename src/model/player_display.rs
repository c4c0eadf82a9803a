use std::str::FromStr;

/// Controls how connected players are listed in the status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerNameDisplay {
    /// List players as `Player 1`, `Player 2`, ... in query order.
    Anonymize,
    /// List players by their real names.
    #[default]
    ShowReal,
    /// Omit the player breakdown entirely.
    Suppress,
}

impl PlayerNameDisplay {
    /// Whether any player breakdown section is rendered.
    pub fn shows_section(self) -> bool {
        !matches!(self, Self::Suppress)
    }
}

/// Accepts the descriptive names as well as the legacy `true`/`false` spellings,
/// where `true` meant "hide player names".
impl FromStr for PlayerNameDisplay {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "anonymize" | "anonymise" | "hide" | "true" => Ok(Self::Anonymize),
            "show" | "real" | "false" => Ok(Self::ShowReal),
            "off" | "none" | "suppress" => Ok(Self::Suppress),
            other => Err(format!(
                "'{}' (expected one of: anonymize, show, off)",
                other
            )),
        }
    }
}
