//! Numeric wire encoding of a cycle.
//!
//! External systems exchange a cycle as its raw index in a 32-bit field.
//! Decoding is lossy on purpose: indices that do not fit a cycle collapse to
//! the epoch cycle instead of failing.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Cycle;

/// Wire message carrying the number of cycles since 1901-01-10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CycleMessage {
    pub airac_19010110: u32,
}

impl CycleMessage {
    /// Sentinel cycle returned for indices that do not fit.
    pub const OVERFLOW_SENTINEL: Cycle = Cycle::new(0);

    /// Creates a message from a raw index.
    pub fn new(airac_19010110: u32) -> Self {
        Self { airac_19010110 }
    }

    /// Decodes the message, clamping out-of-range indices to the sentinel.
    pub fn to_cycle(&self) -> Cycle {
        match u16::try_from(self.airac_19010110) {
            Ok(index) => Cycle::new(index),
            Err(_) => {
                tracing::warn!(
                    index = self.airac_19010110,
                    "airac index out of range, using epoch cycle"
                );
                Self::OVERFLOW_SENTINEL
            }
        }
    }
}

impl From<Cycle> for CycleMessage {
    fn from(cycle: Cycle) -> Self {
        Self::new(u32::from(cycle.index()))
    }
}

impl From<CycleMessage> for Cycle {
    fn from(message: CycleMessage) -> Self {
        message.to_cycle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_preserves_every_cycle_through_2092() {
        let last = Cycle::from_identifier_must("9213");
        for index in 0..last.index() {
            let want = Cycle::new(index);
            let got: Cycle = CycleMessage::from(want).into();
            assert_eq!(want, got);
        }
    }

    #[test]
    fn message_keeps_largest_index() {
        let message = CycleMessage::from(Cycle::new(u16::MAX));
        assert_eq!(message.airac_19010110, 65535);
        assert_eq!(message.to_cycle(), Cycle::new(u16::MAX));
    }

    #[test]
    fn overflowing_index_decodes_to_sentinel() {
        let message = CycleMessage::new(u32::from(u16::MAX) + 1);
        assert_eq!(message.to_cycle(), CycleMessage::OVERFLOW_SENTINEL);
        assert_eq!(Cycle::from(CycleMessage::new(u32::MAX)), Cycle::new(0));
    }

    #[test]
    fn message_serializes_with_field_name() {
        let message = CycleMessage::from(Cycle::new(1442));
        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"airac_19010110":1442}"#);
    }

    #[test]
    fn message_deserializes_from_json() {
        let message: CycleMessage = serde_json::from_str(r#"{"airac_19010110":70000}"#).unwrap();
        assert_eq!(message.to_cycle(), Cycle::new(0));
    }
}
