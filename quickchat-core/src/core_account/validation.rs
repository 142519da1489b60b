//! Validation module
//!
//! Stateless validators for user-entered account fields. Expected-bad
//! input comes back as `false` (or `0` for digit counts), never as an
//! error and never as a panic.

use crate::limits;

/// True when `username` contains the required underscore and stays
/// within six characters overall (five beside the separator).
pub fn valid_username(username: &str) -> bool {
    username.contains('_') && username.chars().count() <= limits::MAX_USERNAME_CHARS
}

/// True when `password` is at least eight characters and mixes an
/// uppercase letter, a digit, and a special character.
pub fn valid_password(password: &str) -> bool {
    password.chars().count() >= limits::MIN_PASSWORD_CHARS
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(is_special)
}

/// Digit count of an international cell number, or `0` when the number
/// is implausible.
///
/// Plausible means a leading `+` followed by ASCII digits only, with the
/// digit count inside the `limits` bounds. Numbers without a country
/// code (no `+`) count as zero.
pub fn msisdn_digits(number: &str) -> usize {
    let digits = match number.strip_prefix('+') {
        Some(rest) => rest,
        None => return 0,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }
    let count = digits.len();
    if (limits::MIN_MSISDN_DIGITS..=limits::MAX_MSISDN_DIGITS).contains(&count) {
        count
    } else {
        0
    }
}

/// Boolean form of `msisdn_digits` for credential checks.
pub fn valid_cell_number(number: &str) -> bool {
    msisdn_digits(number) > 0
}

fn is_special(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}
