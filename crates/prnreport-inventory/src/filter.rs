//! Printer naming convention

use std::sync::LazyLock;

use regex::Regex;

/// Four digits, `-P`, two digits, nothing else
static PRINTER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-P\d{2}$").expect("valid printer name pattern"));

/// Check whether a technical name follows the printer naming convention
#[must_use]
pub fn matches(technical_name: &str) -> bool {
    PRINTER_NAME.is_match(technical_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_convention() {
        for name in ["0000-P00", "1001-P01", "9999-P99", "2000-P10"] {
            assert!(matches(name), "{name}");
        }
    }

    #[test]
    fn test_rejects_partial_and_extended() {
        for name in [
            "1234-P1",
            "12345-P12",
            "123-P12",
            "1234-P123",
            "1234-P12 ",
            " 1234-P12",
            "1234-P12x",
            "x1234-P12",
            "1234-p12",
            "1234_P12",
            "1234P12",
            "abc-P01",
            "",
        ] {
            assert!(!matches(name), "{name:?}");
        }
    }

    #[test]
    fn test_rejects_trailing_newline() {
        assert!(!matches("1234-P12\n"));
    }

    #[test]
    fn test_accepts_unicode_decimal_digits() {
        assert!(matches("١٢٣٤-P١٢"));
        assert!(matches("١٢٣٤-P12"));
        assert!(!matches("١٢٣-P12"));
    }
}
