//! Domain layer containing the AIRAC calendar arithmetic.
//!
//! # Module Organization
//!
//! - `foundation` - Cycle value object, identifier parsing, errors
pub mod foundation;
