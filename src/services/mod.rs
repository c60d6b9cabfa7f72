//! Persistence services.
//!
//! Services hold the SQL and transaction handling, keeping HTTP handlers thin.

pub mod component_service;
pub mod exhibition_service;
