//! `YYOO` identifier shape and the two-digit year window.

use super::ParseCycleError;

/// Number of characters in an identifier.
pub const IDENTIFIER_LEN: usize = 4;

/// Two-digit years at or above this value belong to the 1900s, the rest to
/// the 2000s. Identifiers therefore cover 1964 through 2063.
pub const CENTURY_PIVOT: u32 = 64;

/// Year and ordinal as written in an identifier, before checking that the
/// year actually has that many cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierParts {
    pub year: i32,
    pub ordinal: u32,
}

/// Splits an identifier into its full year and ordinal.
///
/// Surrounding whitespace is ignored. Anything other than exactly four ASCII
/// digits is rejected, including signs and non-ASCII digits.
pub fn parse_parts(identifier: &str) -> Result<IdentifierParts, ParseCycleError> {
    let digits = identifier.trim().as_bytes();
    if digits.len() != IDENTIFIER_LEN || !digits.iter().all(u8::is_ascii_digit) {
        tracing::trace!(identifier, "rejected malformed airac identifier");
        return Err(ParseCycleError::malformed(identifier));
    }

    Ok(IdentifierParts {
        year: expand_year(two_digits(&digits[..2])),
        ordinal: two_digits(&digits[2..]),
    })
}

/// Maps a two-digit year onto the 1964..=2063 window.
pub fn expand_year(yy: u32) -> i32 {
    let base = if yy >= CENTURY_PIVOT { 1900 } else { 2000 };
    base + yy as i32
}

fn two_digits(pair: &[u8]) -> u32 {
    u32::from(pair[0] - b'0') * 10 + u32::from(pair[1] - b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_parts_splits_year_and_ordinal() {
        let parts = parse_parts("1209").unwrap();
        assert_eq!(parts, IdentifierParts { year: 2012, ordinal: 9 });
    }

    #[test]
    fn parse_parts_trims_surrounding_whitespace() {
        let parts = parse_parts(" 2014\n").unwrap();
        assert_eq!(parts, IdentifierParts { year: 2020, ordinal: 14 });
    }

    #[test]
    fn parse_parts_keeps_zero_ordinal_for_range_check() {
        let parts = parse_parts("0000").unwrap();
        assert_eq!(parts, IdentifierParts { year: 2000, ordinal: 0 });
    }

    #[test]
    fn parse_parts_rejects_wrong_length() {
        for input in ["", "101", "12091", "1", "  12  "] {
            assert!(
                matches!(parse_parts(input), Err(ParseCycleError::MalformedIdentifier { .. })),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn parse_parts_rejects_non_digits() {
        for input in ["160a", "1a01", "+123", "-999", "12 9", "12.9", "١٢٠٩"] {
            assert!(
                matches!(parse_parts(input), Err(ParseCycleError::MalformedIdentifier { .. })),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn malformed_error_keeps_untrimmed_input() {
        let err = parse_parts(" 12a4 ").unwrap_err();
        assert_eq!(err.identifier(), " 12a4 ");
    }

    #[test]
    fn expand_year_pivots_at_64() {
        assert_eq!(expand_year(0), 2000);
        assert_eq!(expand_year(63), 2063);
        assert_eq!(expand_year(64), 1964);
        assert_eq!(expand_year(99), 1999);
    }
}
