//! Domain models for server status polling and publishing.
//!
//! These types form the boundary between the data layer (query protocol, fallback
//! API, Discord) and the service layer. They carry no transport details: the data
//! layer converts wire formats into these models and the Discord layer converts
//! `RenderedStatus` into embeds.

pub mod message_handle;
pub mod player_display;
pub mod rendered;
pub mod server_status;
