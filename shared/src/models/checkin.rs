//! Check-in value types

use crate::error::ErrorCode;
use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of a QR self check-in attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckInOutcome {
    /// Guest was stamped as present
    CheckedIn {
        table_number: Option<u32>,
        message: String,
    },
    /// Guest had checked in before; nothing changed
    AlreadyCheckedIn {
        at: Timestamp,
        code: ErrorCode,
        message: String,
    },
    /// Attempt refused
    Rejected { code: ErrorCode, message: String },
}

impl CheckInOutcome {
    /// Whether the guest may enter (new or repeated check-in)
    pub fn is_admitted(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }

    /// `Success` for a fresh check-in, otherwise the reason code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::CheckedIn { .. } => ErrorCode::Success,
            Self::AlreadyCheckedIn { code, .. } | Self::Rejected { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::CheckedIn { message, .. }
            | Self::AlreadyCheckedIn { message, .. }
            | Self::Rejected { message, .. } => message,
        }
    }
}

/// Attendance counts for an event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub total: usize,
    pub checked_in: usize,
    pub pending: usize,
    /// Checked-in guests per table number
    pub checked_in_by_table: BTreeMap<u32, usize>,
    /// Checked-in guests without a table
    pub checked_in_unassigned: usize,
}
