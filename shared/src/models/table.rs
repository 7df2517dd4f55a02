//! Event Table Model

use serde::{Deserialize, Serialize};

/// Table entity
///
/// `table_number` is unique within an event and is the join key used by
/// [`super::Guest::table_number`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub table_number: u32,
    pub capacity: u32,
}

impl Table {
    pub fn new(id: impl Into<String>, table_number: u32, capacity: u32) -> Self {
        Self {
            id: id.into(),
            table_number,
            capacity,
        }
    }
}
