//! Mode line condensation and mode set diffing.

/// Re-serialize a verbose mode change string in condensed form.
///
/// The input is read with the same sign-carry rule as parsing (`+` assumed
/// until a sign appears); consecutive changes sharing a sign are coalesced
/// under a single sign character. Letters are NOT deduplicated within a
/// run: `+o+o` condenses to `+oo`, which applies the same change twice.
///
/// # Examples
///
/// ```
/// use irctext::unparse_mode_line;
///
/// assert_eq!(unparse_mode_line("+o+o+o-v+v"), "+ooo-v+v");
/// assert_eq!(unparse_mode_line("nt"), "+nt");
/// assert_eq!(unparse_mode_line(""), "");
/// ```
pub fn unparse_mode_line(tokens: &str) -> String {
    let mut out = String::with_capacity(tokens.len());
    let mut sign = '+';
    let mut emitted: Option<char> = None;

    for c in tokens.chars() {
        match c {
            '+' | '-' => sign = c,
            _ => {
                if emitted != Some(sign) {
                    out.push(sign);
                    emitted = Some(sign);
                }
                out.push(c);
            }
        }
    }

    out
}

/// Compute the minimal mode change string between two mode sets.
///
/// `before` and `after` are unordered sets of mode letters. Letters only in
/// `before` are emitted as one `-` group (in `before`'s order of first
/// appearance), letters only in `after` as one `+` group (in `after`'s
/// order); letters in both are omitted. Equal sets produce `""`.
///
/// # Examples
///
/// ```
/// use irctext::gen_mode_change;
///
/// assert_eq!(gen_mode_change("abcde", "befmZ"), "-acd+fmZ");
/// assert_eq!(gen_mode_change("", "nt"), "+nt");
/// assert_eq!(gen_mode_change("imnt", "imnt"), "");
/// ```
pub fn gen_mode_change(before: &str, after: &str) -> String {
    let removed: String = unique_chars(before).filter(|&c| !after.contains(c)).collect();
    let added: String = unique_chars(after).filter(|&c| !before.contains(c)).collect();

    let mut out = String::with_capacity(removed.len() + added.len() + 2);
    if !removed.is_empty() {
        out.push('-');
        out.push_str(&removed);
    }
    if !added.is_empty() {
        out.push('+');
        out.push_str(&added);
    }
    out
}

/// Each character of `s` once, at its first occurrence.
fn unique_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.char_indices()
        .filter(|&(i, c)| s.find(c) == Some(i))
        .map(|(_, c)| c)
}
