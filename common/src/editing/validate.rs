//! Cell value validators.

/// Integers at or past this magnitude are rendered in exponent form by the
/// browser's number formatting, so they never round-trip as plain digits.
const EXPONENT_FORM_THRESHOLD: f64 = 1e21;

/// Whitespace as browsers trim it: Unicode `White_Space` plus the byte order
/// mark, minus U+0085 (NEXT LINE).
fn is_input_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Strips leading and trailing whitespace from an editor value.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(is_input_whitespace)
}

/// Returns `true` when `value` is a clean, non-negative integer literal.
///
/// Surrounding whitespace is ignored and leading zeros are allowed (`"042"`).
/// Signs, decimal points, exponents and any other characters are rejected,
/// as are literals too large to be represented exactly as a double.
pub fn is_positive_integer(value: &str) -> bool {
    let trimmed = trim_input(value);
    if trimmed.is_empty() {
        return false;
    }

    let stripped = match trimmed.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    };

    // Rust's float parser accepts "inf", "+5" and "-0"; none of them are
    // digit strings.
    if !stripped.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let n = match stripped.parse::<f64>() {
        Ok(n) => n.floor(),
        Err(_) => return false,
    };

    n.is_finite() && n < EXPONENT_FORM_THRESHOLD && n.to_string() == stripped && n >= 0.0
}

#[cfg(test)]
mod tests {
    use super::{is_positive_integer, trim_input};

    #[test]
    fn accepts_plain_integer_literals() {
        for value in ["0", "7", "042", "00042", "12", "  15  ", "\t3\n", "000"] {
            assert!(is_positive_integer(value), "{:?} should be accepted", value);
        }
    }

    #[test]
    fn rejects_fractions_signs_and_garbage() {
        for value in [
            "", "   ", "3.5", "9.99", "-1", "-0", "+5", "abc", "12abc", "1e5", "0x10", "inf",
            "NaN", "1 000", "3.", ".5",
        ] {
            assert!(!is_positive_integer(value), "{:?} should be rejected", value);
        }
    }

    #[test]
    fn rejects_integers_that_lose_precision() {
        assert!(is_positive_integer("9007199254740992"));
        assert!(!is_positive_integer("9007199254740993"));
    }

    #[test]
    fn rejects_integers_in_exponent_range() {
        assert!(is_positive_integer("100000000000000000000"));
        assert!(!is_positive_integer("1000000000000000000000"));
    }

    #[test]
    fn trims_like_browser_input() {
        assert!(is_positive_integer("\u{feff}5\u{feff}"));
        assert!(is_positive_integer("\u{a0}5\u{2028}"));
        assert!(!is_positive_integer("\u{85}5"));
        assert!(!is_positive_integer("\u{feff}"));

        assert_eq!(trim_input("\u{feff} x \u{feff}"), "x");
        assert_eq!(trim_input("\u{85}x"), "\u{85}x");
    }
}
