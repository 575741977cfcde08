//! Repetition check - forbids runs of three or more identical characters.

use super::CheckResult;
use crate::config::PolicyConfig;

const MAX_RUN: usize = 2;

/// Characters that never form a run.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Fails if any character appears three or more times in a row.
///
/// Line terminators break a run and never start one, so `"\n\n\n"` passes.
///
/// # Returns
/// - `Some(reason)` if a run of three or more is found
/// - `None` otherwise
pub fn repetition_check(password: &str, _config: &PolicyConfig) -> CheckResult {
    let mut prev: Option<char> = None;
    let mut run = 0;
    for c in password.chars() {
        if is_line_terminator(c) {
            prev = None;
            run = 0;
        } else if prev == Some(c) {
            run += 1;
            if run > MAX_RUN {
                return Some(
                    "The password may not contain sequences of three or more repeated characters."
                        .to_string(),
                );
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    None
}
