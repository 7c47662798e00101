//! Adapters - Conversions between cycles and external representations.
//!
//! - `wire` - Single-integer message encoding for interchange
//! - `summary` - Serializable view of a cycle's derived fields
//! - `render` - Text and JSON output in the configured format

mod render;
mod summary;
mod wire;

pub use render::{render_cycle, render_cycles};
pub use summary::CycleSummary;
pub use wire::CycleMessage;
