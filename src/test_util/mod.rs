//! Shared testing utilities.
//!
//! - `factory` - builders for `ServerStatus` and query responses
//! - `mock` - in-memory `ServerQuery` and `StatusChannel` doubles
//! - `fallback_server` - local HTTP server standing in for the fallback API

pub mod factory;
pub mod fallback_server;
pub mod mock;
