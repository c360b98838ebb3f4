//! Hostmask normalization and wildcard matching.
//!
//! Ban, exception, and invite masks take the form `nick!user@host`, where
//! each part may contain `*` (zero or more characters) and `?` (exactly one
//! character). Partial masks are completed before matching: a bare nick
//! becomes `nick!*@*`, a `user@host` pair becomes `*!user@host`, and a mask
//! missing only its host gains `@*`.
//!
//! Matching is anchored whole-string and case-insensitive under a
//! [`Casemapping`]: both the mask and the candidate are folded down with the
//! same mapping before comparison. Matching never fails — a malformed mask
//! or candidate simply does not match.

use std::collections::HashMap;

use crate::casemap::Casemapping;

/// Expand a partial mask into full `nick!user@host` form.
///
/// Missing user and host parts are filled with `*`; an input with neither
/// `!` nor `@` is taken as a nick. Already-full masks are returned
/// unchanged, so the function is idempotent.
///
/// Note that only `*` is a wildcard: an empty part stays empty, and after
/// normalization it will only match an exactly-empty part in the candidate.
///
/// # Examples
///
/// ```
/// use irctext::normalize_mask;
///
/// assert_eq!(normalize_mask("stalin*"), "stalin*!*@*");
/// assert_eq!(normalize_mask("joe@kremlin.ru"), "*!joe@kremlin.ru");
/// assert_eq!(normalize_mask("stalin!joe"), "stalin!joe@*");
/// assert_eq!(normalize_mask("a!b@c"), "a!b@c");
/// ```
pub fn normalize_mask(mask: &str) -> String {
    match mask.find('!') {
        Some(bang) => {
            if mask[bang + 1..].contains('@') {
                mask.to_string()
            } else {
                format!("{}@*", mask)
            }
        }
        None => {
            if mask.contains('@') {
                format!("*!{}", mask)
            } else {
                format!("{}!*@*", mask)
            }
        }
    }
}

/// A mask compiled for repeated matching under one casemapping.
///
/// Compiling normalizes the mask and folds it down once; each call to
/// [`matches`](MaskMatcher::matches) then only folds the candidate. Use
/// this when testing one mask against many candidates.
#[derive(Clone, Debug)]
pub struct MaskMatcher {
    pattern: Vec<char>,
    casemapping: Casemapping,
}

impl MaskMatcher {
    /// Normalize `mask` and compile it under `casemapping`.
    pub fn compile(mask: &str, casemapping: Casemapping) -> Self {
        let full = normalize_mask(mask);
        MaskMatcher {
            pattern: full.chars().map(|c| casemapping.lower_char(c)).collect(),
            casemapping,
        }
    }

    /// Test a candidate against this mask.
    ///
    /// The candidate is completed to full `nick!user@host` form with the
    /// same rule masks are (so a bare nick tests as `nick!*@*`), then folded
    /// with the same casemapping the mask was compiled with. Matching never
    /// errors; a candidate the mask does not cover simply returns `false`.
    pub fn matches(&self, candidate: &str) -> bool {
        let full = normalize_mask(candidate);
        let folded: Vec<char> = full
            .chars()
            .map(|c| self.casemapping.lower_char(c))
            .collect();
        wildcard_match(&self.pattern, &folded)
    }
}

/// Anchored wildcard match over folded char slices.
///
/// `*` matches any run of characters including the empty run, `?` matches
/// exactly one character. Iterative with single-star backtracking, so
/// pathological patterns stay linear-ish rather than exponential.
fn wildcard_match(pattern: &[char], text: &[char]) -> bool {
    let mut p = 0;
    let mut t = 0;
    // Position after the most recent '*', and the text position to resume
    // from on the next backtrack.
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('*') => {
                star = Some((p + 1, t));
                p += 1;
            }
            Some(&pc) if pc == '?' || pc == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match star {
                Some((resume_p, resume_t)) => {
                    // Let the last '*' swallow one more character.
                    star = Some((resume_p, resume_t + 1));
                    p = resume_p;
                    t = resume_t + 1;
                }
                None => return false,
            },
        }
    }

    // Text exhausted; any trailing '*'s match empty.
    pattern[p..].iter().all(|&c| c == '*')
}

/// Test a candidate against a mask, RFC 1459 casemapping.
///
/// Normalizes, compiles, and matches in one call; never fails.
///
/// # Examples
///
/// ```
/// use irctext::matches_mask;
///
/// assert!(matches_mask("stalin*!*@*", "stalin!joe@kremlin.ru"));
/// assert!(!matches_mask("stalin*!*@*", "josef!joe@kremlin.ru"));
/// assert!(matches_mask("*!*@*.example.com", "nick!user@host.example.com"));
/// ```
pub fn matches_mask(mask: &str, candidate: &str) -> bool {
    matches_mask_with(mask, candidate, Casemapping::default())
}

/// Test a candidate against a mask under an explicit casemapping.
pub fn matches_mask_with(mask: &str, candidate: &str, casemapping: Casemapping) -> bool {
    MaskMatcher::compile(mask, casemapping).matches(candidate)
}

/// Match a set of masks against a sequence of candidates.
///
/// Returns a map from each mask (as given, un-normalized) to the candidates
/// it matched, in candidate input order. Masks with no matches are absent
/// from the map entirely; duplicate candidates appear once per occurrence.
///
/// # Examples
///
/// ```
/// use irctext::{matches_mask_many, Casemapping};
///
/// let hits = matches_mask_many(
///     &["a*", "z*"],
///     &["abc", "Axe"],
///     Casemapping::Rfc1459,
/// );
/// assert_eq!(hits["a*"], vec!["abc", "Axe"]);
/// assert!(!hits.contains_key("z*"));
/// ```
pub fn matches_mask_many(
    masks: &[&str],
    candidates: &[&str],
    casemapping: Casemapping,
) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();
    for &mask in masks {
        let matcher = MaskMatcher::compile(mask, casemapping);
        let hits: Vec<String> = candidates
            .iter()
            .filter(|c| matcher.matches(c))
            .map(|c| c.to_string())
            .collect();
        if !hits.is_empty() {
            result.insert(mask.to_string(), hits);
        }
    }
    result
}
