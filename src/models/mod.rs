//! Data models representing database entities.
//!
//! Each module holds three shapes of one entity: the database row, the
//! validated request payload, and the response body sent to clients.

/// Component records
pub mod component;
/// Exhibition records
pub mod exhibition;
