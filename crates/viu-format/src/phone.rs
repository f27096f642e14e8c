//! Brazilian phone number formatting and masking.

fn digits_of(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Formats a Brazilian phone number by digit count: 10 digits as a
/// landline `(11) 1234-5678`, 11 as a mobile `(11) 91234-5678`, 13
/// starting with 55 as `+55 (11) 91234-5678`. Anything else comes back
/// unchanged.
pub fn format_phone(phone: &str) -> String {
    let digits = digits_of(phone);
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        13 if digits.starts_with("55") => format!(
            "+55 ({}) {}-{}",
            &digits[2..4],
            &digits[4..9],
            &digits[9..]
        ),
        _ => phone.to_string(),
    }
}

/// Strips everything except digits.
pub fn unformat_phone(phone: &str) -> String {
    digits_of(phone)
}

/// Masks the middle of a formatted number for display:
/// `(11) 91234-5678` becomes `(11) 9****-5678`. Numbers that cannot be
/// formatted come back unchanged.
pub fn mask_phone(phone: &str) -> String {
    let formatted = format_phone(phone);
    // Only mask when one of the known layouts was produced; arbitrary
    // pass-through input may contain hyphens of its own.
    if !formatted.contains(')') {
        return phone.to_string();
    }
    let Some((head, tail)) = formatted.rsplit_once('-') else {
        return phone.to_string();
    };
    let Some(keep) = head.chars().count().checked_sub(4) else {
        return phone.to_string();
    };
    let visible: String = head.chars().take(keep).collect();
    format!("{visible}****-{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_by_digit_count() {
        assert_eq!(format_phone("1112345678"), "(11) 1234-5678");
        assert_eq!(format_phone("11912345678"), "(11) 91234-5678");
        assert_eq!(format_phone("5511912345678"), "+55 (11) 91234-5678");
    }

    #[test]
    fn formatting_ignores_existing_punctuation() {
        assert_eq!(format_phone("(11) 91234-5678"), "(11) 91234-5678");
        assert_eq!(format_phone("+55 11 91234 5678"), "+55 (11) 91234-5678");
    }

    #[test]
    fn unformattable_input_passes_through() {
        assert_eq!(format_phone("123"), "123");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn unformat_strips_punctuation() {
        assert_eq!(unformat_phone("(11) 91234-5678"), "11912345678");
    }

    #[test]
    fn masking_hides_the_middle() {
        assert_eq!(mask_phone("11912345678"), "(11) 9****-5678");
        assert_eq!(mask_phone("1112345678"), "(11) ****-5678");
        assert_eq!(mask_phone("abc"), "abc");
    }

    #[test]
    fn masking_unformattable_input_passes_through() {
        // Hyphenated input that is not a Brazilian layout stays intact.
        assert_eq!(mask_phone("1-2345"), "1-2345");
        assert_eq!(mask_phone("-1234"), "-1234");
        assert_eq!(mask_phone("123-456-789"), "123-456-789");
    }
}
