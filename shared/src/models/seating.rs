//! Seating value types
//!
//! Everything here is derived from a guest/table snapshot and never stored.

use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};

/// One proposed guest → table move
///
/// A distribution is an ordered `Vec<SeatAssignment>`; the caller decides
/// whether to apply it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub guest_id: String,
    pub table_number: u32,
}

/// Table occupancy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyStatus {
    /// No guest references the table
    Empty,
    /// Some seats taken, some free
    Partial,
    /// Exactly at capacity
    Full,
    /// More guests than seats (manual override)
    Overfull,
}

impl OccupancyStatus {
    /// Classify an occupied/capacity pair.
    ///
    /// Precedence is fixed: empty, then partial, full, overfull.
    pub fn classify(occupied: u32, capacity: u32) -> Self {
        if occupied == 0 {
            Self::Empty
        } else if occupied < capacity {
            Self::Partial
        } else if occupied == capacity {
            Self::Full
        } else {
            Self::Overfull
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Partial => "partial",
            Self::Full => "full",
            Self::Overfull => "overfull",
        }
    }
}

/// Occupancy snapshot of a single table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOccupancy {
    pub table_number: u32,
    pub capacity: u32,
    pub occupied: u32,
    /// capacity - occupied, negative when overfull
    pub available: i64,
    pub status: OccupancyStatus,
}

/// Occupancy of every table plus event-wide totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingOverview {
    /// Sorted by table number
    pub tables: Vec<TableOccupancy>,
    pub total_capacity: u64,
    /// Guests referencing an existing table
    pub seated: usize,
    pub unassigned: usize,
    /// Guests referencing a table number with no matching table
    pub dangling: usize,
    pub overfull_tables: Vec<u32>,
}

/// Advisory result of checking a single guest move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentCheck {
    pub valid: bool,
    pub code: ErrorCode,
    pub message: String,
}

impl AssignmentCheck {
    pub fn valid(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            valid: true,
            code,
            message: message.into(),
        }
    }

    pub fn invalid(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            code,
            message: message.into(),
        }
    }
}
