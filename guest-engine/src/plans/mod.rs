//! Plan limits
//!
//! Decides whether an account may create an event and how many guests an
//! event may hold under its effective plan.

mod evaluator;
mod period;

pub use evaluator::*;
pub use period::*;
