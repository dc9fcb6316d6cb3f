//! Edit distance properties.
//!
//! Metric axioms plus differential checks against the full-matrix oracle and
//! the `strsim` crate.

use super::oracles::oracle_levenshtein;
use linkfind::levenshtein;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: distance to self is zero.
    #[test]
    fn prop_identity(s in "\\PC{0,20}") {
        prop_assert_eq!(levenshtein(&s, &s), 0);
    }

    /// Property: distance to the empty string is the char length.
    #[test]
    fn prop_empty_base_case(s in "\\PC{0,20}") {
        let len = s.chars().count();
        prop_assert_eq!(levenshtein(&s, ""), len);
        prop_assert_eq!(levenshtein("", &s), len);
    }

    /// Property: argument order does not matter.
    #[test]
    fn prop_symmetry(a in "[a-e]{0,12}", b in "[a-e]{0,12}") {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    /// Property: d(a, c) <= d(a, b) + d(b, c).
    #[test]
    fn prop_triangle_inequality(
        a in "[a-d]{0,8}",
        b in "[a-d]{0,8}",
        c in "[a-d]{0,8}",
    ) {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
    }

    /// Property: bounded by the longer length, at least the length difference.
    #[test]
    fn prop_bounds(a in "\\PC{0,15}", b in "\\PC{0,15}") {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = levenshtein(&a, &b);
        prop_assert!(d <= la.max(lb));
        prop_assert!(d >= la.abs_diff(lb));
    }

    /// Differential: matches the full-matrix oracle.
    #[test]
    fn diff_levenshtein_oracle(a in "[a-z ]{0,15}", b in "[a-z ]{0,15}") {
        prop_assert_eq!(
            levenshtein(&a, &b),
            oracle_levenshtein(&a, &b),
            "levenshtein({:?}, {:?})", a, b
        );
    }

    /// Differential: matches strsim on arbitrary Unicode.
    #[test]
    fn diff_levenshtein_strsim(a in "\\PC{0,15}", b in "\\PC{0,15}") {
        prop_assert_eq!(levenshtein(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Differential: accented words measure in chars, not bytes.
    #[test]
    fn diff_levenshtein_unicode(
        a in prop::sample::select(vec![
            "cafe", "caf\u{00e9}", "na\u{00ef}ve", "r\u{00e9}sum\u{00e9}",
            "\u{00fc}ber", "t\u{014d}ky\u{014d}", "m\u{00fa}sica", "hello"
        ]),
        b in prop::sample::select(vec![
            "cafe", "caf\u{00e9}", "na\u{00ef}ve", "r\u{00e9}sum\u{00e9}",
            "\u{00fc}ber", "t\u{014d}ky\u{014d}", "musica", "world"
        ])
    ) {
        prop_assert_eq!(levenshtein(a, b), oracle_levenshtein(a, b));
    }
}
