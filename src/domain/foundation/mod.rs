//! Foundation module - AIRAC cycle primitives.
//!
//! Contains the cycle value object, identifier parsing, and the error types
//! that form the vocabulary of the AIRAC calendar.

mod cycle;
mod errors;
pub mod identifier;

pub use cycle::{
    sort_chronologically, sort_reverse_chronologically, Cycle, CYCLE_DAYS, CYCLE_SECONDS,
    DATE_FORMAT, EPOCH,
};
pub use errors::{ErrorCode, ParseCycleError};
