//! Error types for AIRAC identifier parsing.

use std::fmt;
use thiserror::Error;

/// Errors that occur when turning a `YYOO` identifier into a cycle.
///
/// Every variant carries the identifier exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCycleError {
    #[error("illegal airac identifier: {identifier:?}")]
    MalformedIdentifier { identifier: String },

    #[error("airac identifier {identifier:?}: year {year} has no cycle with ordinal {ordinal}")]
    OutOfRangeOrdinal {
        identifier: String,
        year: i32,
        ordinal: u32,
    },
}

impl ParseCycleError {
    /// Creates a malformed identifier error.
    pub fn malformed(identifier: impl Into<String>) -> Self {
        ParseCycleError::MalformedIdentifier {
            identifier: identifier.into(),
        }
    }

    /// Creates an out of range ordinal error.
    pub fn out_of_range(identifier: impl Into<String>, year: i32, ordinal: u32) -> Self {
        ParseCycleError::OutOfRangeOrdinal {
            identifier: identifier.into(),
            year,
            ordinal,
        }
    }

    /// Returns the rejected input.
    pub fn identifier(&self) -> &str {
        match self {
            ParseCycleError::MalformedIdentifier { identifier }
            | ParseCycleError::OutOfRangeOrdinal { identifier, .. } => identifier,
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseCycleError::MalformedIdentifier { .. } => ErrorCode::InvalidFormat,
            ParseCycleError::OutOfRangeOrdinal { .. } => ErrorCode::OutOfRange,
        }
    }
}

/// Error codes for reporting parse failures to external callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidFormat,
    OutOfRange,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_identifier_displays_input() {
        let err = ParseCycleError::malformed("160a");
        assert_eq!(format!("{}", err), "illegal airac identifier: \"160a\"");
    }

    #[test]
    fn out_of_range_ordinal_displays_year_and_ordinal() {
        let err = ParseCycleError::out_of_range("1514", 2015, 14);
        assert_eq!(
            format!("{}", err),
            "airac identifier \"1514\": year 2015 has no cycle with ordinal 14"
        );
    }

    #[test]
    fn identifier_returns_offending_input() {
        assert_eq!(ParseCycleError::malformed(" x ").identifier(), " x ");
        assert_eq!(ParseCycleError::out_of_range("0000", 2000, 0).identifier(), "0000");
    }

    #[test]
    fn code_matches_variant() {
        assert_eq!(ParseCycleError::malformed("abcd").code(), ErrorCode::InvalidFormat);
        assert_eq!(
            ParseCycleError::out_of_range("9914", 1999, 14).code(),
            ErrorCode::OutOfRange
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InvalidFormat), "INVALID_FORMAT");
        assert_eq!(format!("{}", ErrorCode::OutOfRange), "OUT_OF_RANGE");
    }
}
