//! Fuzz target for mode line parsing and condensation
//!
//! Feeds random token strings and argument lists through the mode line
//! parser and the condenser to ensure they never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

use irctext::{parse_mode_line, unparse_mode_line, ChannelModeSpec};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        // Mode lines beyond a real MODE command's length are uninteresting
        if input.len() > 512 {
            return;
        }

        // First word is the token string, the rest are its arguments
        let mut words = input.split(' ');
        let tokens = words.next().unwrap_or("");
        let args: Vec<&str> = words.collect();

        let spec = ChannelModeSpec::default();
        let line = parse_mode_line(tokens, &args, &spec);

        // Every change must carry an explicit sign
        for change in &line.changes {
            assert!(matches!(change.flag().chars().next(), Some('+') | Some('-')));
        }

        // Condensation must be a fixpoint
        let once = unparse_mode_line(tokens);
        assert_eq!(unparse_mode_line(&once), once);
    }
});
