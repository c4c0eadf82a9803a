//! Message components attached to the status message.

pub mod join_server;
