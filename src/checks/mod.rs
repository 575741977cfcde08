//! Policy checks
//!
//! Each check inspects one aspect of the password against the current
//! [`PolicyConfig`]. Required checks always run; optional checks only run
//! for inputs that are not exempted as passphrases.

mod length;
mod repetition;
mod variety;

pub(crate) use length::char_len;
pub use length::{max_length_check, min_length_check};
pub use repetition::repetition_check;
pub use variety::{digit_check, lowercase_check, special_check, uppercase_check};

use crate::config::PolicyConfig;

/// Result type for check functions.
/// - `Some(message)` - Check failed with message
/// - `None` - Check passed
pub type CheckResult = Option<String>;

/// Signature shared by every check.
pub type CheckFn = fn(&str, &PolicyConfig) -> CheckResult;

/// Whether a failing check always makes the verdict weak.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckKind {
    /// Always runs; any failure makes the password weak.
    Required,
    /// Counts towards `min_optional_tests_to_pass`; skipped for passphrases.
    Optional,
}

/// A check bound to its position in the evaluator's check order.
#[derive(Clone, Copy, Debug)]
pub struct Check {
    index: usize,
    name: &'static str,
    kind: CheckKind,
    run: CheckFn,
}

impl Check {
    /// Index reported in `passed_tests` / `failed_tests`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Short stable identifier, e.g. `"min_length"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Required or optional.
    pub fn kind(&self) -> CheckKind {
        self.kind
    }

    /// Runs the check.
    ///
    /// # Returns
    /// - `Some(message)` if the password fails the check
    /// - `None` if it passes
    pub fn run(&self, password: &str, config: &PolicyConfig) -> CheckResult {
        (self.run)(password, config)
    }
}

fn build(kind: CheckKind, offset: usize, table: &[(&'static str, CheckFn)]) -> Vec<Check> {
    table
        .iter()
        .enumerate()
        .map(|(i, &(name, run))| Check {
            index: offset + i,
            name,
            kind,
            run,
        })
        .collect()
}

/// Required checks, indexed from 0.
pub fn required_checks() -> Vec<Check> {
    let table: [(&'static str, CheckFn); 3] = [
        ("min_length", min_length_check),
        ("max_length", max_length_check),
        ("repetition", repetition_check),
    ];
    build(CheckKind::Required, 0, &table)
}

/// Optional checks, indexed from `offset` (the number of required checks).
pub fn optional_checks(offset: usize) -> Vec<Check> {
    let table: [(&'static str, CheckFn); 4] = [
        ("lowercase", lowercase_check),
        ("uppercase", uppercase_check),
        ("digit", digit_check),
        ("special", special_check),
    ];
    build(CheckKind::Optional, offset, &table)
}
