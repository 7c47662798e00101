//! AIRAC cycle value object.
//!
//! A cycle is counted from the epoch 1901-01-10 and lasts exactly 28 days.
//! The identifier `YYOO` is derived from the effective date: the last two
//! digits of its year and the 1-based position of the cycle within that year.
//!
//! Calculations before the epoch, or past the `u16` index range, wrap
//! silently and produce wrong but well-defined values.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::identifier::parse_parts;
use super::ParseCycleError;

/// Length of every cycle in days.
pub const CYCLE_DAYS: i64 = 28;

/// Length of every cycle in seconds.
pub const CYCLE_SECONDS: i64 = CYCLE_DAYS * 24 * 60 * 60;

/// Date format used by [`Cycle::long_string`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Effective date of cycle 0, 63 years before ICAO introduced the system.
pub static EPOCH: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(1901, 1, 10).expect("epoch is a valid date"));

/// An AIRAC cycle, identified by its index since the epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cycle(u16);

impl Cycle {
    /// Creates a cycle from its raw index.
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the raw index since the epoch.
    pub fn index(&self) -> u16 {
        self.0
    }

    /// Returns the cycle in effect at `date`.
    ///
    /// Dates before the epoch floor to a negative index, which wraps.
    pub fn from_date(date: NaiveDate) -> Self {
        let days = date.signed_duration_since(*EPOCH).num_days();
        Self(days.div_euclid(CYCLE_DAYS) as u16)
    }

    /// Returns the cycle in effect at the UTC date of `datetime`.
    pub fn from_datetime(datetime: &DateTime<Utc>) -> Self {
        Self::from_date(datetime.date_naive())
    }

    /// Returns the cycle in effect right now.
    pub fn current() -> Self {
        Self::from_datetime(&Utc::now())
    }

    /// Resolves an identifier such as `"1209"`.
    ///
    /// Two-digit years 64..=99 map to 1964..=1999 and 00..=63 to 2000..=2063.
    ///
    /// # Errors
    ///
    /// - `MalformedIdentifier` if the input is not four decimal digits
    /// - `OutOfRangeOrdinal` if the ordinal is zero or the year has fewer cycles
    pub fn from_identifier(identifier: &str) -> Result<Self, ParseCycleError> {
        let parts = parse_parts(identifier)?;
        if parts.ordinal == 0 {
            return Err(ParseCycleError::out_of_range(identifier, parts.year, parts.ordinal));
        }

        let previous_year_end = NaiveDate::from_ymd_opt(parts.year - 1, 12, 31)
            .ok_or_else(|| ParseCycleError::out_of_range(identifier, parts.year, parts.ordinal))?;
        let candidate = Self::from_date(previous_year_end).advance(parts.ordinal as u16);

        if candidate.year() != parts.year {
            tracing::debug!(
                identifier,
                year = parts.year,
                ordinal = parts.ordinal,
                "airac ordinal exceeds cycles in year"
            );
            return Err(ParseCycleError::out_of_range(identifier, parts.year, parts.ordinal));
        }

        Ok(candidate)
    }

    /// Resolves an identifier known to be valid, such as a literal.
    ///
    /// # Panics
    ///
    /// Panics if `identifier` does not resolve to a cycle.
    pub fn from_identifier_must(identifier: &str) -> Self {
        match Self::from_identifier(identifier) {
            Ok(cycle) => cycle,
            Err(err) => panic!("{}", err),
        }
    }

    /// Returns the date this cycle becomes effective (00:00 UTC).
    pub fn effective(&self) -> NaiveDate {
        *EPOCH + Duration::days(i64::from(self.0) * CYCLE_DAYS)
    }

    /// Returns the last day of this cycle, the day before the next one starts.
    pub fn expires(&self) -> NaiveDate {
        self.effective() + Duration::days(CYCLE_DAYS - 1)
    }

    /// Checks if `date` falls within this cycle.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.effective() <= date && date <= self.expires()
    }

    /// Returns the year of the effective date.
    pub fn year(&self) -> i32 {
        self.effective().year()
    }

    /// Returns the 1-based position of this cycle within its year (1..=14).
    pub fn ordinal(&self) -> u32 {
        self.effective().ordinal0() / CYCLE_DAYS as u32 + 1
    }

    /// Returns the following cycle. Wraps after the last index.
    pub fn next(&self) -> Self {
        self.advance(1)
    }

    /// Returns the preceding cycle. Wraps before the epoch.
    pub fn previous(&self) -> Self {
        Self(self.0.wrapping_sub(1))
    }

    fn advance(&self, cycles: u16) -> Self {
        Self(self.0.wrapping_add(cycles))
    }

    /// Returns `"YYOO (effective: YYYY-MM-DD; expires: YYYY-MM-DD)"`.
    pub fn long_string(&self) -> String {
        format!(
            "{} (effective: {}; expires: {})",
            self,
            self.effective().format(DATE_FORMAT),
            self.expires().format(DATE_FORMAT),
        )
    }

    /// Returns all cycles that become effective during `year`, in order.
    ///
    /// Years before the epoch yield nothing.
    pub fn in_year(year: i32) -> impl Iterator<Item = Cycle> {
        let first = NaiveDate::from_ymd_opt(year, 1, 1)
            .filter(|_| year >= EPOCH.year())
            .map(|new_year| {
                let cycle = Self::from_date(new_year.max(*EPOCH));
                if cycle.year() < year {
                    cycle.next()
                } else {
                    cycle
                }
            });

        std::iter::successors(first, |cycle| Some(cycle.next()))
            .take_while(move |cycle| cycle.year() == year)
    }
}

/// Sorts cycles oldest first.
pub fn sort_chronologically(cycles: &mut [Cycle]) {
    cycles.sort_unstable();
}

/// Sorts cycles newest first.
pub fn sort_reverse_chronologically(cycles: &mut [Cycle]) {
    cycles.sort_unstable_by(|a, b| b.cmp(a));
}

impl From<u16> for Cycle {
    fn from(index: u16) -> Self {
        Self(index)
    }
}

impl From<Cycle> for u16 {
    fn from(cycle: Cycle) -> Self {
        cycle.0
    }
}

impl FromStr for Cycle {
    type Err = ParseCycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s)
    }
}

impl TryFrom<&str> for Cycle {
    type Error = ParseCycleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_identifier(value)
    }
}

/// Short identifier `YYOO`.
impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.year().rem_euclid(100), self.ordinal())
    }
}
