//! Guest Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Guest entity
///
/// `table_number` joins to [`super::Table::table_number`], not to the
/// table id. `None` means the guest has no seat yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub table_number: Option<u32>,
    /// Check-in time (Unix millis), `None` until the guest arrives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_in_at: Option<Timestamp>,
}

impl Guest {
    /// Unassigned guest that has not checked in
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            table_number: None,
            checked_in_at: None,
        }
    }

    /// Builder: seat the guest at `table_number`
    pub fn seated_at(mut self, table_number: u32) -> Self {
        self.table_number = Some(table_number);
        self
    }

    pub fn is_assigned(&self) -> bool {
        self.table_number.is_some()
    }

    pub fn is_checked_in(&self) -> bool {
        self.checked_in_at.is_some()
    }
}
