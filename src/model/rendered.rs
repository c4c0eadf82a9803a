//! Display payload produced by the renderer.
//!
//! `RenderedStatus` is platform neutral: it holds the text that ends up in the
//! Discord embed, and every size check is done against it before any embed is built.

use chrono::{DateTime, Utc};

/// Maximum characters Discord accepts in a single embed field value.
pub const FIELD_VALUE_LIMIT: usize = 1024;

/// Maximum characters Discord accepts in an embed title.
pub const TITLE_LIMIT: usize = 256;

/// Maximum characters Discord accepts across a whole embed.
pub const EMBED_TOTAL_LIMIT: usize = 6000;

/// Threshold above which the player breakdown is replaced by a summary. Kept below
/// `EMBED_TOTAL_LIMIT` to leave room for the footer and timestamp.
pub const PLAYER_LIST_BUDGET: usize = 5500;

/// A name/value pair shown as one embed field.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBlock {
    pub name: String,
    pub value: String,
    pub inline: bool,
    /// Whether this block belongs to the player breakdown.
    pub player_section: bool,
}

impl StatusBlock {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
            player_section: false,
        }
    }

    /// Creates a block that is part of the player breakdown.
    pub fn player(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            player_section: true,
            ..Self::new(name, value, false)
        }
    }

    /// Size of the block in characters, counting both name and value.
    pub fn size(&self) -> usize {
        self.name.chars().count() + self.value.chars().count()
    }
}

/// Fully rendered status message ready to be published.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedStatus {
    pub title: String,
    pub description: String,
    pub online: bool,
    pub blocks: Vec<StatusBlock>,
    pub footer: String,
    pub generated_at: DateTime<Utc>,
}

impl RenderedStatus {
    /// Total size in characters of title, description and every block.
    pub fn total_size(&self) -> usize {
        self.title.chars().count()
            + self.description.chars().count()
            + self.blocks.iter().map(StatusBlock::size).sum::<usize>()
    }

    /// Returns the first block with the given name.
    #[cfg(test)]
    pub fn block(&self, name: &str) -> Option<&StatusBlock> {
        self.blocks.iter().find(|block| block.name == name)
    }

    #[cfg(test)]
    pub fn player_blocks(&self) -> impl Iterator<Item = &StatusBlock> {
        self.blocks.iter().filter(|block| block.player_section)
    }
}
