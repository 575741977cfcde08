//! Property-based tests for the policy evaluator.

use crate::config::PolicyOverrides;
use crate::evaluator::PolicyEvaluator;
use proptest::prelude::*;
use secrecy::SecretString;

fn secret(pwd: &str) -> SecretString {
    SecretString::new(pwd.to_string().into())
}

/// Passwords without any run of three identical characters.
fn arb_no_triples(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..max).prop_map(|chars| {
        let mut out: Vec<char> = Vec::with_capacity(chars.len());
        for c in chars {
            let n = out.len();
            if n >= 2 && out[n - 1] == c && out[n - 2] == c {
                continue;
            }
            out.push(c);
        }
        out.into_iter().collect()
    })
}

proptest! {
    #[test]
    fn short_passwords_fail_min_length(pwd in "\\PC{0,9}") {
        let verdict = PolicyEvaluator::new().evaluate(&secret(&pwd));
        prop_assert!(!verdict.strong);
        prop_assert!(verdict.failed_tests.contains(&0));
    }

    #[test]
    fn long_passwords_fail_max_length(pwd in "\\PC{129,200}") {
        let verdict = PolicyEvaluator::new().evaluate(&secret(&pwd));
        prop_assert!(!verdict.strong);
        prop_assert!(verdict.failed_tests.contains(&1));
    }

    #[test]
    fn triple_runs_fail_repetition(
        prefix in "\\PC{0,20}",
        c in any::<char>().prop_filter("line terminators never form a run", |c| {
            !matches!(*c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
        }),
        run in 3usize..6,
        suffix in "\\PC{0,20}",
    ) {
        let pwd = format!("{}{}{}", prefix, c.to_string().repeat(run), suffix);
        let verdict = PolicyEvaluator::new().evaluate(&secret(&pwd));
        prop_assert!(!verdict.strong);
        prop_assert!(verdict.failed_tests.contains(&2));
    }

    #[test]
    fn passphrases_skip_optional_checks(pwd in arb_no_triples(128)) {
        let len = pwd.chars().count();
        prop_assume!((20..=128).contains(&len));

        let verdict = PolicyEvaluator::new().evaluate(&secret(&pwd));
        prop_assert!(verdict.is_passphrase);
        prop_assert!(verdict.strong);
        prop_assert_eq!(verdict.optional_tests_passed, 0);
        prop_assert!(verdict.optional_test_errors.is_empty());
        prop_assert_eq!(verdict.passed_tests, vec![0, 1, 2]);
    }

    #[test]
    fn below_threshold_is_weak(pwd in "[a-z]{10,19}", threshold in 2usize..=4) {
        prop_assume!(!pwd.as_bytes().windows(3).any(|w| w[0] == w[1] && w[1] == w[2]));

        let evaluator = PolicyEvaluator::with_overrides(
            &PolicyOverrides::default().min_optional_tests_to_pass(threshold),
        );
        let verdict = evaluator.evaluate(&secret(&pwd));
        prop_assert_eq!(verdict.optional_tests_passed, 1);
        prop_assert!(!verdict.strong);
        prop_assert!(verdict.required_test_errors.is_empty());
    }

    #[test]
    fn evaluation_is_idempotent(pwd in "\\PC{0,150}") {
        let evaluator = PolicyEvaluator::new();
        let pwd = secret(&pwd);
        prop_assert_eq!(evaluator.evaluate(&pwd), evaluator.evaluate(&pwd));
    }

    #[test]
    fn every_check_reported_once(pwd in "\\PC{0,150}") {
        let verdict = PolicyEvaluator::new().evaluate(&secret(&pwd));
        let mut all: Vec<usize> = verdict
            .passed_tests
            .iter()
            .chain(verdict.failed_tests.iter())
            .copied()
            .collect();
        all.sort_unstable();

        let expected: Vec<usize> = if verdict.is_passphrase {
            vec![0, 1, 2]
        } else {
            (0..7).collect()
        };
        prop_assert_eq!(all, expected);
        prop_assert_eq!(verdict.errors.len(), verdict.failed_tests.len());
    }
}
