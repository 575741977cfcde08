//! Character variety checks - lowercase, uppercase, digits, special characters.

use super::CheckResult;
use crate::config::PolicyConfig;

/// Fails unless the password contains an ASCII lowercase letter (`a-z`).
pub fn lowercase_check(password: &str, _config: &PolicyConfig) -> CheckResult {
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("The password must contain at least one lowercase letter.".to_string());
    }
    None
}

/// Fails unless the password contains an ASCII uppercase letter (`A-Z`).
pub fn uppercase_check(password: &str, _config: &PolicyConfig) -> CheckResult {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("The password must contain at least one uppercase letter.".to_string());
    }
    None
}

/// Fails unless the password contains an ASCII digit (`0-9`).
pub fn digit_check(password: &str, _config: &PolicyConfig) -> CheckResult {
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("The password must contain at least one number.".to_string());
    }
    None
}

/// Anything outside ASCII `A-Z`, `a-z`, `0-9` counts as special, whitespace
/// and non-ASCII letters included.
pub fn special_check(password: &str, _config: &PolicyConfig) -> CheckResult {
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Some("The password must contain at least one special character.".to_string());
    }
    None
}
