//! Unified error codes for guest seating and plan enforcement
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 3xxx: Plan / subscription errors
//! - 4xxx: Guest errors
//! - 7xxx: Table errors
//! - 9xxx: System errors
//!
//! Codes travel to the frontend as plain numbers, which is where
//! user-facing translation keys are looked up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Invalid format
    InvalidFormat = 6,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 3xxx: Plan ====================
    /// Plan name is not recognised
    PlanUnknown = 3001,
    /// Account reached its event creation limit for the period
    EventLimitReached = 3002,
    /// Event reached the guest limit of its effective plan
    GuestLimitReached = 3003,

    // ==================== 4xxx: Guest ====================
    /// Guest not found
    GuestNotFound = 4001,
    /// Guest is already seated at the requested table
    GuestAlreadySeated = 4002,
    /// Guest has already checked in
    GuestAlreadyCheckedIn = 4003,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is full
    TableFull = 7002,
    /// Two tables share the same table number
    DuplicateTableNumber = 7004,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Plan
            ErrorCode::PlanUnknown => "Unknown plan",
            ErrorCode::EventLimitReached => "Event limit reached for the current period",
            ErrorCode::GuestLimitReached => "Guest limit reached for the event plan",

            // Guest
            ErrorCode::GuestNotFound => "Guest not found",
            ErrorCode::GuestAlreadySeated => "Guest is already seated at this table",
            ErrorCode::GuestAlreadyCheckedIn => "Guest has already checked in",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableFull => "Table is full",
            ErrorCode::DuplicateTableNumber => "Duplicate table number",

            // System
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            6 => Ok(ErrorCode::InvalidFormat),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Plan
            3001 => Ok(ErrorCode::PlanUnknown),
            3002 => Ok(ErrorCode::EventLimitReached),
            3003 => Ok(ErrorCode::GuestLimitReached),

            // Guest
            4001 => Ok(ErrorCode::GuestNotFound),
            4002 => Ok(ErrorCode::GuestAlreadySeated),
            4003 => Ok(ErrorCode::GuestAlreadyCheckedIn),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableFull),
            7004 => Ok(ErrorCode::DuplicateTableNumber),

            // System
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
