//! Data models
//!
//! Shared between guest-engine and the frontend (via API).
//! Guest/table ids are opaque strings; table numbers are the join key.

pub mod checkin;
pub mod guest;
pub mod plan;
pub mod seating;
pub mod table;

// Re-exports
pub use checkin::*;
pub use guest::*;
pub use plan::*;
pub use seating::*;
pub use table::*;
