//! Seating Allocator
//!
//! Pure functions over a guest/table snapshot:
//! - [`auto_distribute`] / [`redistribute`]: greedy table filling
//! - [`get_occupancy`] / [`seating_overview`]: derived occupancy
//! - [`validate_assignment`] / [`move_guest`]: single-guest moves
//! - [`can_accommodate_all`] / [`suggest_additional_tables`]: capacity planning

mod allocator;
mod capacity;
mod occupancy;
mod validation;

pub use allocator::*;
pub use capacity::*;
pub use occupancy::{get_occupancy, seating_overview};
pub use validation::*;
