//! Shared types for PlateHub
//!
//! Wire-level value types and the unified error vocabulary used by the
//! server and by anything that talks to its HTTP API.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ErrorBody, ErrorCode};
