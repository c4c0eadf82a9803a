//! Discord bot integration.
//!
//! The bot keeps a gateway connection open so it can answer the join button on the
//! status message. Message publishing itself goes through the HTTP client shared
//! with the status scheduler.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is requested. Component interactions are delivered regardless of
//! intents, and the bot never reads message content or member lists.

pub mod component;
pub mod handler;
pub mod start;
