//! Serializable summary of a cycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Cycle;

/// Derived fields of a cycle, as reported to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSummary {
    pub identifier: String,
    pub year: i32,
    pub ordinal: u32,
    pub effective: NaiveDate,
    pub expires: NaiveDate,
    pub index: u16,
}

impl From<Cycle> for CycleSummary {
    fn from(cycle: Cycle) -> Self {
        Self {
            identifier: cycle.to_string(),
            year: cycle.year(),
            ordinal: cycle.ordinal(),
            effective: cycle.effective(),
            expires: cycle.expires(),
            index: cycle.index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_copies_derived_fields() {
        let summary = CycleSummary::from(Cycle::from_identifier_must("1209"));
        assert_eq!(summary.identifier, "1209");
        assert_eq!(summary.year, 2012);
        assert_eq!(summary.ordinal, 9);
        assert_eq!(summary.effective, NaiveDate::from_ymd_opt(2012, 8, 23).unwrap());
        assert_eq!(summary.expires, NaiveDate::from_ymd_opt(2012, 9, 19).unwrap());
    }

    #[test]
    fn summary_serializes_dates_as_iso() {
        let summary = CycleSummary::from(Cycle::new(0));
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""identifier":"0101""#));
        assert!(json.contains(r#""effective":"1901-01-10""#));
        assert!(json.contains(r#""expires":"1901-02-06""#));
        assert!(json.contains(r#""index":0"#));
    }
}
