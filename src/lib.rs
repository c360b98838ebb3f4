//! # irctext
//!
//! A Rust toolkit for the string-level corners of the IRC protocol:
//! casemapping, hostmask matching, mode lines, formatting codes, and
//! lenient text decoding.
//!
//! This is a library for clients, servers, and bots to build on. It owns no
//! connection and no state: every function is a pure, thread-safe function
//! of its inputs, with configuration (casemapping, mode tables) passed
//! explicitly per call.
//!
//! ## Features
//!
//! - The three IRC casemappings (`rfc1459`, `strict-rfc1459`, `ascii`)
//!   with folding and case-insensitive comparison
//! - Ban/invite mask normalization and wildcard matching
//! - Channel mode line parsing, condensation, and mode set diffing with
//!   configurable CHANMODES/PREFIX tables
//! - mIRC color/formatting code detection and stripping
//! - Numeric reply code ↔ symbolic name lookup
//! - Channel and nickname syntax validation
//! - UTF-8-with-Windows-1252-fallback byte decoding

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Masks
//!
//! ```rust
//! use irctext::{matches_mask, normalize_mask};
//!
//! // Partial masks are completed before matching.
//! assert_eq!(normalize_mask("troll*"), "troll*!*@*");
//!
//! // Matching is case-insensitive under the rfc1459 casemapping.
//! assert!(matches_mask("troll*!*@*", "Troll42!spam@evil.example"));
//! ```
//!
//! ### Mode lines
//!
//! ```rust
//! use irctext::{gen_mode_change, parse_mode_line, unparse_mode_line, ChannelModeSpec};
//!
//! let spec = ChannelModeSpec::default();
//! let line = parse_mode_line("+oo-v", &["alice", "bob", "carol"], &spec);
//! assert_eq!(line.changes[2].flag(), "-v");
//!
//! assert_eq!(unparse_mode_line("+o+o+o-v+v"), "+ooo-v+v");
//! assert_eq!(gen_mode_change("imnt", "mnts"), "-i+s");
//! ```

pub mod casemap;
pub mod chan;
pub mod colors;
pub mod decode;
pub mod error;
pub mod mask;
pub mod mode;
pub mod nick;
pub mod response;

pub use self::casemap::{irc_eq, irc_to_lower, irc_to_upper, Casemapping};
pub use self::chan::{is_channel_name, is_channel_name_with, DEFAULT_CHANNEL_PREFIXES};
pub use self::colors::{has_color, has_formatting, strip_color, strip_formatting};
pub use self::decode::decode_text;
pub use self::error::InvalidCasemapping;
pub use self::mask::{matches_mask, matches_mask_many, matches_mask_with, normalize_mask, MaskMatcher};
pub use self::mode::{
    gen_mode_change, parse_mode_changes, parse_mode_line, unparse_mode_line, ChannelModeSpec,
    ModeChange, ModeLine, ModeSign,
};
pub use self::nick::{is_valid_nick, is_valid_nick_len, DEFAULT_NICK_MAX_LEN};
pub use self::response::Response;
