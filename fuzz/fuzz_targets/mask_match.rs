//! Fuzz target for mask normalization and matching
//!
//! Splits the input into a mask and a candidate and checks that
//! normalization is idempotent and matching never panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

use irctext::{matches_mask, normalize_mask};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if input.len() > 512 {
            return;
        }

        let (mask, candidate) = input.split_once(' ').unwrap_or((input, ""));

        let once = normalize_mask(mask);
        assert_eq!(normalize_mask(&once), once);

        // Matching is total: any (mask, candidate) pair just answers
        let _ = matches_mask(mask, candidate);

        // A normalized mask must behave like the original
        assert_eq!(matches_mask(&once, candidate), matches_mask(mask, candidate));
    }
});
