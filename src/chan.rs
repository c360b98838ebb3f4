//! Channel name validation.
//!
//! # Reference
//! - RFC 2812 Section 1.3: Channel names

/// The channel prefixes accepted when no CHANTYPES value is supplied.
pub const DEFAULT_CHANNEL_PREFIXES: &[char] = &['#', '&'];

/// Maximum channel name length, prefix included, per RFC 2812.
const MAX_CHANNEL_LEN: usize = 50;

/// Check a channel name against the default prefix set.
///
/// Valid channel names start with `#` or `&`, are at most 50 characters,
/// and contain no space, comma, or control characters.
///
/// # Examples
///
/// ```
/// use irctext::is_channel_name;
///
/// assert!(is_channel_name("#rust"));
/// assert!(is_channel_name("&local"));
/// assert!(!is_channel_name("rust"));
/// assert!(!is_channel_name("#has space"));
/// ```
pub fn is_channel_name(s: &str) -> bool {
    is_channel_name_with(s, DEFAULT_CHANNEL_PREFIXES)
}

/// Check a channel name against a server's own prefix set.
///
/// `prefixes` is the server's CHANTYPES characters; networks that support
/// modeless (`+`) or safe (`!`) channels pass them here.
pub fn is_channel_name_with(s: &str, prefixes: &[char]) -> bool {
    let mut chars = s.chars();

    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !prefixes.contains(&first) {
        return false;
    }

    if s.chars().count() > MAX_CHANNEL_LEN {
        return false;
    }

    for c in chars {
        if c == ' ' || c == ',' || c.is_control() {
            return false;
        }
    }

    true
}
