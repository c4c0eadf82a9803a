//! Service layer.
//!
//! Business logic sits between the data layer collaborators and the scheduler.
//! Services own no transport details: they receive collaborators through traits and
//! return domain models.

pub mod server_status;
