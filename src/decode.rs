//! Lenient decoding of wire bytes into text.
//!
//! IRC predates any encoding agreement: most traffic today is UTF-8, but
//! legacy clients still emit Windows-1252/Latin-1 bytes, sometimes in the
//! middle of an otherwise-UTF-8 line. The conventional client behavior is
//! to try strict UTF-8 first and reinterpret the whole input as
//! Windows-1252 when that fails, so every byte sequence decodes to *some*
//! text.

use std::borrow::Cow;

use encoding::WINDOWS_1252;

/// Decode bytes as UTF-8, falling back to Windows-1252.
///
/// Valid UTF-8 is returned borrowed, without copying. Anything else is
/// decoded as Windows-1252, which is total over all byte values, so this
/// function never fails and never drops input.
///
/// # Examples
///
/// ```
/// use irctext::decode_text;
///
/// assert_eq!(decode_text(b"caf\xc3\xa9"), "café"); // UTF-8
/// assert_eq!(decode_text(b"caf\xe9"), "café"); // Windows-1252 fallback
/// ```
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => {
            let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text
        }
    }
}
