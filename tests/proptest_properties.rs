//! Property-based tests for the toolkit's algebraic guarantees.
//!
//! Uses proptest to generate random input and verify that:
//! 1. Folding is idempotent and direction-consistent under every casemapping
//! 2. Mask normalization is idempotent and matching never panics
//! 3. Mode line parsing/condensing/diffing hold their invariants
//!
//! Run with: `cargo test --test proptest_properties`

use proptest::prelude::*;

use irctext::{
    gen_mode_change, has_formatting, irc_eq, matches_mask, normalize_mask, parse_mode_line,
    strip_formatting, unparse_mode_line, Casemapping, ChannelModeSpec,
};

// =============================================================================
// STRATEGIES
// =============================================================================

fn any_casemapping() -> impl Strategy<Value = Casemapping> {
    prop_oneof![
        Just(Casemapping::Rfc1459),
        Just(Casemapping::StrictRfc1459),
        Just(Casemapping::Ascii),
    ]
}

/// Strings weighted toward the characters the fold ranges care about.
fn foldable_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9\\[\\]{}^~|\\\\#&!@*?._-]{0,40}").expect("valid regex")
}

/// Mask-shaped strings, full and partial.
fn mask_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9*?\\[\\]{}^~._-]{0,12}(![a-zA-Z0-9*?._-]{0,10})?(@[a-zA-Z0-9*?._-]{0,16})?")
        .expect("valid regex")
}

/// Mode token strings with interleaved signs.
fn mode_tokens() -> impl Strategy<Value = String> {
    prop::string::string_regex("[+\\-a-zA-Z]{0,20}").expect("valid regex")
}

/// Mode-letter sets for diffing.
fn mode_letters() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{0,12}").expect("valid regex")
}

// =============================================================================
// CASEMAPPING PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn fold_is_idempotent(s in foldable_string(), m in any_casemapping()) {
        let lower = m.to_lower(&s);
        prop_assert_eq!(m.to_lower(&lower), lower.clone());

        let upper = m.to_upper(&s);
        prop_assert_eq!(m.to_upper(&upper), upper.clone());
    }

    #[test]
    fn fold_preserves_char_count(s in any::<String>(), m in any_casemapping()) {
        prop_assert_eq!(m.to_lower(&s).chars().count(), s.chars().count());
        prop_assert_eq!(m.to_upper(&s).chars().count(), s.chars().count());
    }

    #[test]
    fn upper_and_lower_folds_are_equal_irc(s in foldable_string(), m in any_casemapping()) {
        // Both directions land in the same equivalence class.
        prop_assert!(m.eq_irc(&m.to_upper(&s), &m.to_lower(&s)));
    }

    #[test]
    fn eq_agrees_with_folded_comparison(a in foldable_string(), b in foldable_string(), m in any_casemapping()) {
        prop_assert_eq!(m.eq_irc(&a, &b), m.to_lower(&a) == m.to_lower(&b));
    }

    #[test]
    fn default_eq_is_rfc1459(a in foldable_string(), b in foldable_string()) {
        prop_assert_eq!(irc_eq(&a, &b), Casemapping::Rfc1459.eq_irc(&a, &b));
    }
}

// =============================================================================
// MASK PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn normalize_is_idempotent(mask in mask_string()) {
        let once = normalize_mask(&mask);
        prop_assert_eq!(normalize_mask(&once), once);
    }

    #[test]
    fn normalized_masks_have_three_parts(mask in mask_string()) {
        let full = normalize_mask(&mask);
        let bang = full.find('!');
        prop_assert!(bang.is_some());
        prop_assert!(full[bang.unwrap() + 1..].contains('@'));
    }

    #[test]
    fn matching_never_panics(mask in any::<String>(), candidate in any::<String>()) {
        let _ = matches_mask(&mask, &candidate);
    }

    #[test]
    fn candidate_always_matches_itself(candidate in mask_string()) {
        // Any candidate matches the mask spelled exactly like it, wildcards
        // matching themselves at worst.
        prop_assert!(matches_mask(&candidate, &candidate));
    }

    #[test]
    fn full_wildcard_matches_everything(candidate in mask_string()) {
        prop_assert!(matches_mask("*!*@*", &candidate));
    }
}

// =============================================================================
// MODE LINE PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn parse_never_panics(tokens in any::<String>(), args in prop::collection::vec(any::<String>(), 0..6)) {
        let borrowed: Vec<&str> = args.iter().map(String::as_str).collect();
        let _ = parse_mode_line(&tokens, &borrowed, &ChannelModeSpec::default());
    }

    #[test]
    fn parse_emits_explicit_signs(tokens in mode_tokens()) {
        // With enough arguments, every change carries a sign character.
        let args = vec!["x"; 24];
        let line = parse_mode_line(&tokens, &args, &ChannelModeSpec::default());
        for change in &line.changes {
            let flag = change.flag();
            prop_assert!(flag.starts_with('+') || flag.starts_with('-'));
        }
    }

    #[test]
    fn parse_consumed_args_match_changes(tokens in mode_tokens()) {
        let args = vec!["x"; 24];
        let line = parse_mode_line(&tokens, &args, &ChannelModeSpec::default());
        let with_args = line.changes.iter().filter(|c| c.arg.is_some()).count();
        prop_assert_eq!(with_args, line.args.len());
    }

    #[test]
    fn unparse_is_a_fixpoint(tokens in mode_tokens()) {
        let once = unparse_mode_line(&tokens);
        prop_assert_eq!(unparse_mode_line(&once), once);
    }

    #[test]
    fn unparse_keeps_letters(tokens in mode_tokens()) {
        let letters: String = tokens.chars().filter(|c| !matches!(c, '+' | '-')).collect();
        let out_letters: String = unparse_mode_line(&tokens)
            .chars()
            .filter(|c| !matches!(c, '+' | '-'))
            .collect();
        prop_assert_eq!(letters, out_letters);
    }

    #[test]
    fn diff_of_equal_sets_is_empty(set in mode_letters()) {
        prop_assert_eq!(gen_mode_change(&set, &set), "");
    }

    #[test]
    fn diff_never_mentions_shared_letters(before in mode_letters(), after in mode_letters()) {
        let diff = gen_mode_change(&before, &after);
        for c in diff.chars().filter(|c| !matches!(c, '+' | '-')) {
            prop_assert!(before.contains(c) != after.contains(c));
        }
    }
}

// =============================================================================
// FORMATTING PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn strip_formatting_is_complete(s in any::<String>()) {
        prop_assert!(!has_formatting(&strip_formatting(&s)));
    }

    #[test]
    fn strip_formatting_is_idempotent(s in any::<String>()) {
        let once = strip_formatting(&s).into_owned();
        prop_assert_eq!(strip_formatting(&once).into_owned(), once.clone());
    }
}
