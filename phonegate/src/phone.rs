//! Phone number masking.
//!
//! Numbers are rendered as `(AAA) BBB-CCCC` while typed. The group after the dash
//! holds whatever the country's expected length leaves once the first six digits
//! are placed, so a 9-digit country renders `(AAA) BBB-CCC`.

/// Mask shown while no country is selected.
pub const DEFAULT_MASK: &str = "(000) 000-0000";

/// Upper bound of tracked digits, whatever the selected country.
pub const MAX_DIGITS: usize = 20;

/// Keeps the ASCII decimal digits of `text`, in order.
pub fn digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Renders `value` with the phone mask.
///
/// Non-digit characters of `value` are discarded first. Digits past
/// `expected_length` are dropped from the last group.
pub fn format(value: &str, expected_length: usize) -> String {
    let d = digits(value);
    let n = d.len();

    if n <= 3 {
        format!("({}", d)
    } else if n <= 6 {
        format!("({}) {}", &d[0..3], &d[3..n])
    } else {
        // A country shorter than six digits still shows the full second group.
        let end = n.min(expected_length).max(6);
        format!("({}) {}-{}", &d[0..3], &d[3..6], &d[6..end])
    }
}

/// Placeholder mask for a country expecting `expected_length` digits, or the
/// [`DEFAULT_MASK`] when no country is selected.
pub fn placeholder(expected_length: Option<usize>) -> String {
    match expected_length {
        None => DEFAULT_MASK.to_string(),
        Some(len) => format!("(000) 000-{}", "0".repeat(len.saturating_sub(6))),
    }
}

/// Message shown when the typed digit count differs from the expected one.
pub fn length_error(expected_length: usize) -> String {
    format!("Phone number must be {} digits long.", expected_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(digits("(555) 123-4567"), "5551234567");
        assert_eq!(digits("+1 abc"), "1");
        assert_eq!(digits(""), "");
        // Non ascii digits are not phone digits.
        assert_eq!(digits("٣12"), "12");
    }

    #[test]
    fn test_format_short() {
        assert_eq!(format("", 10), "(");
        assert_eq!(format("5", 10), "(5");
        assert_eq!(format("555", 10), "(555");
        assert_eq!(format("5a5b5", 10), "(555");
    }

    #[test]
    fn test_format_middle() {
        assert_eq!(format("5551", 10), "(555) 1");
        assert_eq!(format("555123", 10), "(555) 123");
        assert_eq!(format("(555) 12", 10), "(555) 12");
    }

    #[test]
    fn test_format_full() {
        assert_eq!(format("5551234", 10), "(555) 123-4");
        assert_eq!(format("5551234567", 10), "(555) 123-4567");
        assert_eq!(format("(555) 123-4567", 10), "(555) 123-4567");
        // Extra digits are not displayed.
        assert_eq!(format("555123456789", 10), "(555) 123-4567");
        assert_eq!(format("555123456", 9), "(555) 123-456");
        assert_eq!(format("55512345678", 11), "(555) 123-45678");
    }

    #[test]
    fn test_format_dash_position() {
        for n in 7..=MAX_DIGITS {
            let d: String = "0123456789".chars().cycle().take(n).collect();
            for expected in 7..=12 {
                let out = format(&d, expected);
                assert_eq!(out.matches('-').count(), 1);
                let (head, tail) = out.split_once('-').unwrap();
                assert_eq!(digits(head).len(), 6);
                assert_eq!(tail.len(), n.min(expected) - 6);
            }
        }
    }

    #[test]
    fn test_format_is_stable_on_its_own_digits() {
        for input in ["5", "55512", "5551234567", "555 123 45", "555123456789"] {
            let first = format(input, 10);
            assert_eq!(format(&digits(&first), 10), first);
        }
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(placeholder(None), "(000) 000-0000");
        assert_eq!(placeholder(Some(10)), "(000) 000-0000");
        assert_eq!(placeholder(Some(9)), "(000) 000-000");
        assert_eq!(placeholder(Some(12)), "(000) 000-000000");
        assert_eq!(placeholder(Some(4)), "(000) 000-");
    }

    #[test]
    fn test_length_error() {
        assert_eq!(length_error(10), "Phone number must be 10 digits long.");
    }
}
