//! AIRAC - Aeronautical Information Regulation And Control cycles
//!
//! This crate computes AIRAC cycle identifiers and effective dates on the
//! fixed 28-day ICAO schedule, anchored at 1901-01-10.

pub mod adapters;
pub mod config;
pub mod domain;

pub use domain::foundation::{Cycle, ParseCycleError};
