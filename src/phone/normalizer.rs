//! Validation and national formatting of phone numbers.
//!
//! Accepts the common ways subscribers write a local number (`+7 916 ...`,
//! `8 (916) ...`, bare ten digits) and canonicalizes all of them to the
//! domestic dialing format `8-DDD-DDD-DD-DD`.

use thiserror::Error;

/// Non-digit characters permitted in a raw phone string.
const SEPARATORS: [char; 6] = [' ', '(', ')', '-', '.', '+'];

/// Why a raw phone string was rejected.
///
/// The `Display` messages are shown to the user verbatim next to the
/// input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("invalid input: disallowed characters in phone number")]
    InvalidCharacters,
    #[error("invalid input: wrong digit count")]
    WrongDigitCount,
}

/// Validate a raw phone string and format it as `D-DDD-DDD-DD-DD`.
///
/// Three input forms are recognized by prefix of the raw string:
/// - `+7...` — international form, 11 digits expected, leading digit `7`
///   replaced with `8`;
/// - `8...` — domestic form, 11 digits expected, kept as-is;
/// - anything else — bare 10-digit subscriber number, `8` prepended.
pub fn validate_phone(raw: &str) -> Result<String, PhoneError> {
    if !raw
        .chars()
        .all(|c| c.is_ascii_digit() || SEPARATORS.contains(&c))
    {
        return Err(PhoneError::InvalidCharacters);
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let expected_len = if raw.starts_with("+7") {
        // The first extracted digit must be the 7 of the prefix.
        if !digits.starts_with('7') {
            return Err(PhoneError::WrongDigitCount);
        }
        11
    } else if raw.starts_with('8') {
        11
    } else {
        10
    };

    if digits.len() != expected_len {
        return Err(PhoneError::WrongDigitCount);
    }

    let national = if raw.starts_with("+7") {
        // +7 and a leading 8 dial the same number domestically.
        format!("8{}", &digits[1..])
    } else if raw.starts_with('8') {
        // Only the count is checked for this form; the digits are
        // carried over unchanged.
        digits
    } else {
        format!("8{}", digits)
    };

    Ok(format!(
        "{}-{}-{}-{}-{}",
        &national[..1],
        &national[1..4],
        &national[4..7],
        &national[7..9],
        &national[9..11]
    ))
}
