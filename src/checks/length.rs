//! Length checks - enforce the configured minimum and maximum length.

use super::CheckResult;
use crate::config::PolicyConfig;

/// Length in Unicode scalar values.
pub(crate) fn char_len(password: &str) -> usize {
    password.chars().count()
}

/// Fails if the password is shorter than `min_length`.
pub fn min_length_check(password: &str, config: &PolicyConfig) -> CheckResult {
    if char_len(password) < config.min_length {
        return Some(format!(
            "The password must be at least {} characters long.",
            config.min_length
        ));
    }
    None
}

/// Fails if the password is longer than `max_length`.
pub fn max_length_check(password: &str, config: &PolicyConfig) -> CheckResult {
    if char_len(password) > config.max_length {
        return Some(format!(
            "The password must be fewer than {} characters.",
            config.max_length
        ));
    }
    None
}
