//! The order number scheme used across the storefront
//!
//! Every order carries a human-facing code of the form `GN905EG` followed by
//! seven decimal digits: `GN` (country), `905` (Conakry region code), `EG`
//! (business initials), then five digits derived from a seconds-resolution
//! timestamp and two digits of randomness. The prefix is fixed per
//! deployment; only the digit suffix varies.

use nutype::nutype;

/// Country field of the prefix
pub const COUNTRY: &str = "GN";
/// Region field of the prefix
pub const REGION: &str = "905";
/// Business field of the prefix
pub const BUSINESS: &str = "EG";
/// The full constant prefix shared by every order number
pub const PREFIX: &str = "GN905EG";
/// Total length of a well-formed order number
pub const ORDER_NUMBER_LEN: usize = 14;

/// A validated order number
///
/// Construction only succeeds for strings matching the canonical format
/// exactly: the constant prefix plus seven digits, nothing else. A value of
/// this type is therefore well-formed by construction.
#[nutype(
    validate(regex = r"^GN905EG\d{7}$"),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Whether a candidate string is a well-formed order number
    pub fn is_valid(candidate: &str) -> bool {
        Self::try_new(candidate.to_owned()).is_ok()
    }
}

/// The fixed-width fields of an order number, split by position
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OrderNumberParts {
    pub country: String,
    pub region: String,
    pub business: String,
    pub sequence: String,
}

impl OrderNumberParts {
    /// Split a candidate into its positional fields
    ///
    /// Returns `None` for anything that fails validation; this never panics,
    /// whatever the input. When it returns `Some`, concatenating the four
    /// fields reproduces the input exactly.
    pub fn parse(candidate: &str) -> Option<Self> {
        if !OrderNumber::is_valid(candidate) {
            return None;
        }

        Some(Self {
            country: candidate[0..2].to_string(),
            region: candidate[2..5].to_string(),
            business: candidate[5..7].to_string(),
            sequence: candidate[7..].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_order_number_is_accepted() {
        assert!(OrderNumber::is_valid("GN905EG1234567"));
        assert!(OrderNumber::try_new("GN905EG0000000".to_string()).is_ok());
        assert!(OrderNumber::try_new("GN905EG9999999".to_string()).is_ok());
    }

    #[test]
    fn test_malformed_order_numbers_are_rejected() {
        // Wrong digit count
        assert!(!OrderNumber::is_valid("GN905EG123456"));
        assert!(!OrderNumber::is_valid("GN905EG12345678"));
        // Wrong prefix
        assert!(!OrderNumber::is_valid("GN906EG1234567"));
        assert!(!OrderNumber::is_valid("gn905eg1234567"));
        // Non-digit suffix
        assert!(!OrderNumber::is_valid("GN905EG12345A7"));
        // Surrounding characters
        assert!(!OrderNumber::is_valid(" GN905EG1234567"));
        assert!(!OrderNumber::is_valid("GN905EG1234567 "));
        assert!(!OrderNumber::is_valid(""));
        assert!(!OrderNumber::is_valid("BAD"));
    }

    #[test]
    fn test_prefix_constants_compose() {
        assert_eq!(format!("{COUNTRY}{REGION}{BUSINESS}"), PREFIX);
        assert_eq!(PREFIX.len() + 7, ORDER_NUMBER_LEN);
    }

    #[test]
    fn test_parse_splits_by_position() {
        let parts = OrderNumberParts::parse("GN905EG3280242").unwrap();
        assert_eq!(parts.country, "GN");
        assert_eq!(parts.region, "905");
        assert_eq!(parts.business, "EG");
        assert_eq!(parts.sequence, "3280242");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(OrderNumberParts::parse("").is_none());
        assert!(OrderNumberParts::parse("GN905EG").is_none());
        assert!(OrderNumberParts::parse("not-an-order-number").is_none());
    }

    #[test]
    fn test_parts_reassemble_to_input() {
        let input = "GN905EG7654321";
        let parts = OrderNumberParts::parse(input).unwrap();
        let reassembled = format!(
            "{}{}{}{}",
            parts.country, parts.region, parts.business, parts.sequence
        );
        assert_eq!(reassembled, input);
    }
}
