//! Shared types for the guest management platform
//!
//! Models, error codes and user-facing messages used by the seating and
//! plan engine and by whatever API layer hosts it.

pub mod error;
pub mod i18n;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use i18n::{Locale, Message};
pub use models::{Guest, PlanType, Table};
