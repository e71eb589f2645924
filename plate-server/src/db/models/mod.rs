//! Database Models
//!
//! Documents as stored in SurrealDB. The `id` field of every document goes
//! through [`serde_helpers::option_record_key`] so clients only ever see the
//! bare record key.

pub mod serde_helpers;

pub mod order;
pub mod reservation;
pub mod restaurant;

// Re-exports
pub use order::*;
pub use reservation::*;
pub use restaurant::*;
