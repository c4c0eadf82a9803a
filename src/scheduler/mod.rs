//! Scheduled jobs.

pub mod server_status;
