//! Evaluation result.

use serde::Serialize;

/// Outcome of a single policy evaluation.
///
/// Error lists keep check order: required failures first, then optional ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub strong: bool,
    /// Optional checks were skipped because the input is a passphrase.
    pub is_passphrase: bool,
    pub errors: Vec<String>,
    pub required_test_errors: Vec<String>,
    /// Always empty for passphrases.
    pub optional_test_errors: Vec<String>,
    pub passed_tests: Vec<usize>,
    pub failed_tests: Vec<usize>,
    /// Always 0 for passphrases.
    pub optional_tests_passed: usize,
}
