//! Collaborators the status service talks to.
//!
//! - `server_query` - UDP game server query (A2S)
//! - `fallback_api` - optional HTTP status API used when the query fails
//! - `discord` - the status channel on Discord
//!
//! Each collaborator sits behind a trait so the service layer can be exercised with
//! in-memory doubles.

pub mod discord;
pub mod fallback_api;
pub mod server_query;

#[cfg(test)]
mod test;
