//! Data models
//!
//! Value types shared between plate-server and API consumers.
//! Wire field names are camelCase; store-backed documents (with ids and
//! timestamps) live in `plate-server::db::models`.

pub mod cart;
pub mod floor_plan;
pub mod menu;
pub mod order;
pub mod reservation;

// Re-exports
pub use cart::*;
pub use floor_plan::*;
pub use menu::*;
pub use order::*;
pub use reservation::*;
