//! OWASP-style password policy evaluation
//!
//! This library checks passwords against a configurable policy modeled on
//! the OWASP password strength guidelines: required length and repetition
//! checks, optional character-class checks with a pass threshold, and an
//! exemption from the optional checks for long passphrases.
//!
//! # Features
//!
//! - `async` (default): Enables delivering verdicts over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use owasp_pwd_policy::{PolicyEvaluator, PolicyOverrides};
//! use secrecy::SecretString;
//!
//! let mut evaluator = PolicyEvaluator::new();
//! let password = SecretString::new("L0veSexSecre+God".to_string().into());
//!
//! let verdict = evaluator.evaluate(&password);
//! assert!(verdict.strong);
//!
//! evaluator.configure(&PolicyOverrides::default().min_length(20));
//! assert!(!evaluator.evaluate(&password).strong);
//! ```

mod checks;
mod config;
mod evaluator;
mod verdict;

#[cfg(test)]
mod proptest;

// Public API
pub use checks::{Check, CheckFn, CheckKind, CheckResult};
pub use config::{ConfigError, PolicyConfig, PolicyOverrides};
pub use evaluator::{PolicyEvaluator, evaluate_password};
pub use verdict::Verdict;
