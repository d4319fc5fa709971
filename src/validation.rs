//! Argument validation for record lookups.
//!
//! Lookups take integer keys. Ids that arrive as text (CLI arguments,
//! filters) are checked here, so a malformed key is rejected with
//! [`BlogError::InvalidArgument`] before any collection is scanned.

use crate::error::{BlogError, Result};

/// Parses a record id given as text (for example a CLI argument).
///
/// Values outside the `i64` range are rejected, never clamped.
pub fn parse_id(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BlogError::InvalidArgument("id cannot be empty".to_string()));
    }
    trimmed.parse::<i64>().map_err(|_| {
        BlogError::InvalidArgument(format!("id must be an integer, got '{}'", raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_valid() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        assert_eq!(parse_id("-3").unwrap(), -3);
        assert_eq!(parse_id("9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn test_parse_id_rejects_non_integer() {
        assert!(matches!(parse_id("abc"), Err(BlogError::InvalidArgument(_))));
        assert!(matches!(parse_id("1.5"), Err(BlogError::InvalidArgument(_))));
        assert!(matches!(parse_id("1e3"), Err(BlogError::InvalidArgument(_))));
        assert!(matches!(parse_id(""), Err(BlogError::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_id_rejects_out_of_range_instead_of_saturating() {
        for raw in ["9223372036854775808", "-9223372036854775809", "99999999999999999999"] {
            assert!(
                matches!(parse_id(raw), Err(BlogError::InvalidArgument(_))),
                "{raw}"
            );
        }
    }
}
