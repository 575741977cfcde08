//! Policy evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::checks::{self, Check, CheckKind, char_len};
use crate::config::{PolicyConfig, PolicyOverrides};
use crate::verdict::Verdict;

/// Evaluates passwords against an OWASP-style policy.
///
/// Holds the configuration and the ordered required/optional checks, both set
/// up at construction. `evaluate` only needs `&self`, so one evaluator can be
/// shared between threads; reconfiguring needs `&mut self`.
#[derive(Clone, Debug)]
pub struct PolicyEvaluator {
    config: PolicyConfig,
    required: Vec<Check>,
    optional: Vec<Check>,
}

impl Default for PolicyEvaluator {
    fn default() -> Self {
        Self::with_config(PolicyConfig::default())
    }
}

impl PolicyEvaluator {
    /// Creates an evaluator with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with `overrides` merged over the default policy.
    pub fn with_overrides(overrides: &PolicyOverrides) -> Self {
        let mut config = PolicyConfig::default();
        config.merge(overrides);
        Self::with_config(config)
    }

    /// Creates an evaluator from a complete configuration.
    ///
    /// Required checks are indexed from 0, optional checks continue after them.
    pub fn with_config(config: PolicyConfig) -> Self {
        let required = checks::required_checks();
        let optional = checks::optional_checks(required.len());
        Self {
            config,
            required,
            optional,
        }
    }

    /// Returns the configuration used by subsequent evaluations.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the required checks in evaluation order.
    pub fn required_checks(&self) -> &[Check] {
        &self.required
    }

    /// Returns the optional checks in evaluation order.
    pub fn optional_checks(&self) -> &[Check] {
        &self.optional
    }

    /// Merges `overrides` into the current configuration.
    ///
    /// Only affects evaluations made after the call.
    pub fn configure(&mut self, overrides: &PolicyOverrides) {
        self.config.merge(overrides);

        #[cfg(feature = "tracing")]
        tracing::debug!("Password policy reconfigured: {:?}", self.config);
    }

    /// Evaluates `password` and returns the full verdict.
    ///
    /// Every required check runs. Unless the input qualifies as a passphrase,
    /// every optional check runs too, without short-circuiting, and at least
    /// `min_optional_tests_to_pass` of them must pass.
    pub fn evaluate(&self, password: &SecretString) -> Verdict {
        let pwd = password.expose_secret();
        let mut verdict = Verdict {
            strong: true,
            ..Verdict::default()
        };

        for check in &self.required {
            if !self.record(check, pwd, &mut verdict) {
                verdict.strong = false;
            }
        }

        verdict.is_passphrase =
            self.config.allow_passphrases && char_len(pwd) >= self.config.min_phrase_length;

        if !verdict.is_passphrase {
            for check in &self.optional {
                if self.record(check, pwd, &mut verdict) {
                    verdict.optional_tests_passed += 1;
                }
            }

            if verdict.optional_tests_passed < self.config.min_optional_tests_to_pass {
                verdict.strong = false;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            strong = verdict.strong,
            is_passphrase = verdict.is_passphrase,
            failed = ?verdict.failed_tests,
            "Password evaluated"
        );

        verdict
    }

    /// Runs one check and records its outcome. Returns `true` on pass.
    fn record(&self, check: &Check, password: &str, verdict: &mut Verdict) -> bool {
        match check.run(password, &self.config) {
            Some(reason) => {
                match check.kind() {
                    CheckKind::Required => verdict.required_test_errors.push(reason.clone()),
                    CheckKind::Optional => verdict.optional_test_errors.push(reason.clone()),
                }
                verdict.errors.push(reason);
                verdict.failed_tests.push(check.index());
                false
            }
            None => {
                verdict.passed_tests.push(check.index());
                true
            }
        }
    }

    /// Async version that sends the verdict via channel.
    ///
    /// A closed receiver is logged (with the `tracing` feature) and otherwise ignored.
    #[cfg(feature = "async")]
    pub async fn evaluate_tx(&self, password: &SecretString, tx: mpsc::Sender<Verdict>) {
        let verdict = self.evaluate(password);

        if let Err(e) = tx.send(verdict).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password verdict: {}", e);
            #[cfg(not(feature = "tracing"))]
            let _ = e;
        }
    }
}

/// Evaluates `password` against the default policy.
pub fn evaluate_password(password: &SecretString) -> Verdict {
    PolicyEvaluator::new().evaluate(password)
}
