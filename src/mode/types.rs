//! Mode change types and the channel mode tables.
//!
//! Which letters take arguments and which grant status prefixes is ircd
//! configuration, advertised in ISUPPORT `CHANMODES` and `PREFIX`. The
//! [`ChannelModeSpec`] defaults follow the commonly documented channel mode
//! set (`CHANMODES=b,k,l,...` with `PREFIX=(ohv)@%+`); servers that differ
//! can be mirrored with [`ChannelModeSpec::from_tokens`].

use std::fmt;

/// Direction of a mode change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModeSign {
    /// Mode is being added (`+`).
    Plus,
    /// Mode is being removed (`-`).
    Minus,
}

impl ModeSign {
    /// The wire character for this sign.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            ModeSign::Plus => '+',
            ModeSign::Minus => '-',
        }
    }
}

impl fmt::Display for ModeSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single signed mode change with its argument, if it consumed one.
///
/// The sign is always explicit, even when the source mode line relied on
/// the leading-`+` default.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeChange {
    /// Whether the mode is added or removed.
    pub sign: ModeSign,
    /// The mode letter, kept verbatim (unknown letters included).
    pub mode: char,
    /// The positional argument this change consumed, if any.
    pub arg: Option<String>,
}

impl ModeChange {
    /// A `+mode` change.
    pub fn plus(mode: char, arg: Option<&str>) -> Self {
        ModeChange {
            sign: ModeSign::Plus,
            mode,
            arg: arg.map(String::from),
        }
    }

    /// A `-mode` change.
    pub fn minus(mode: char, arg: Option<&str>) -> Self {
        ModeChange {
            sign: ModeSign::Minus,
            mode,
            arg: arg.map(String::from),
        }
    }

    /// The sign-prefixed flag string, e.g. `+o`.
    pub fn flag(&self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.sign.as_char());
        s.push(self.mode);
        s
    }
}

impl fmt::Display for ModeChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.mode)?;
        if let Some(arg) = &self.arg {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// The full result of parsing a mode line.
///
/// `args` repeats, in order, the arguments the changes consumed; each one is
/// also attached to its [`ModeChange`]. A malformed line parses to the empty
/// value (see [`parse_mode_line`](crate::mode::parse_mode_line)).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeLine {
    /// The parsed changes, in source order.
    pub changes: Vec<ModeChange>,
    /// The arguments consumed, in source order.
    pub args: Vec<String>,
}

impl ModeLine {
    /// True when nothing was parsed, either because the input was empty or
    /// because it was rejected.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Which channel modes take arguments, and which grant status prefixes.
///
/// Passed explicitly into parsing so the tables can differ per server
/// without any process-wide state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelModeSpec {
    /// Letters that consume an argument whether set or unset (list modes).
    always_arg: Vec<char>,
    /// Letters that consume an argument only when set with `+`.
    arg_when_set: Vec<char>,
    /// Status letters with their display prefix, in privilege order.
    status: Vec<(char, char)>,
}

impl Default for ChannelModeSpec {
    /// The commonly documented defaults: ban/exception/invite-exception
    /// lists always take a mask, key and limit take an argument when set,
    /// and op/halfop/voice carry `@`/`%`/`+`.
    fn default() -> Self {
        ChannelModeSpec {
            always_arg: vec!['b', 'e', 'I'],
            arg_when_set: vec!['k', 'l'],
            status: vec![('o', '@'), ('h', '%'), ('v', '+')],
        }
    }
}

impl ChannelModeSpec {
    /// Build a spec from explicit tables.
    pub fn new(
        always_arg: impl IntoIterator<Item = char>,
        arg_when_set: impl IntoIterator<Item = char>,
        status: impl IntoIterator<Item = (char, char)>,
    ) -> Self {
        ChannelModeSpec {
            always_arg: always_arg.into_iter().collect(),
            arg_when_set: arg_when_set.into_iter().collect(),
            status: status.into_iter().collect(),
        }
    }

    /// Build a spec from ISUPPORT `CHANMODES` and `PREFIX` values.
    ///
    /// `chanmodes` is the four comma-separated type lists, e.g.
    /// `"b,k,l,imnpst"`: type A goes to the always-argument table, types B
    /// and C take an argument when set, type D takes none. `prefix` is the
    /// `"(ohv)@%+"` form; the letter and symbol runs must pair up.
    ///
    /// Returns `None` when either value does not have the expected shape.
    pub fn from_tokens(chanmodes: &str, prefix: &str) -> Option<Self> {
        let mut types = chanmodes.splitn(4, ',');
        let (a, b, c, _d) = (
            types.next()?,
            types.next()?,
            types.next()?,
            types.next()?,
        );

        let rest = prefix.strip_prefix('(')?;
        let (letters, symbols) = rest.split_once(')')?;
        if letters.is_empty() || letters.chars().count() != symbols.chars().count() {
            return None;
        }

        Some(ChannelModeSpec {
            always_arg: a.chars().collect(),
            arg_when_set: b.chars().chain(c.chars()).collect(),
            status: letters.chars().zip(symbols.chars()).collect(),
        })
    }

    /// Whether `mode` is a status mode (op, voice, ...).
    pub fn is_status(&self, mode: char) -> bool {
        self.status.iter().any(|&(letter, _)| letter == mode)
    }

    /// The display prefix for a status letter, e.g. `o` → `@`.
    pub fn prefix_for(&self, mode: char) -> Option<char> {
        self.status
            .iter()
            .find(|&&(letter, _)| letter == mode)
            .map(|&(_, symbol)| symbol)
    }

    /// The status letter for a display prefix, e.g. `@` → `o`.
    pub fn letter_for_prefix(&self, symbol: char) -> Option<char> {
        self.status
            .iter()
            .find(|&&(_, s)| s == symbol)
            .map(|&(letter, _)| letter)
    }

    /// Whether a `sign mode` change consumes a positional argument.
    ///
    /// Status modes always take a target; list modes always take a mask;
    /// the set-only table applies to `+` changes. Letters in no table take
    /// nothing, which is also how unknown letters parse.
    pub fn takes_arg(&self, sign: ModeSign, mode: char) -> bool {
        self.is_status(mode)
            || self.always_arg.contains(&mode)
            || (sign == ModeSign::Plus && self.arg_when_set.contains(&mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_change_display() {
        assert_eq!(format!("{}", ModeChange::plus('o', Some("Bob"))), "+o Bob");
        assert_eq!(format!("{}", ModeChange::minus('i', None)), "-i");
        assert_eq!(ModeChange::plus('v', None).flag(), "+v");
    }

    #[test]
    fn test_default_tables() {
        let spec = ChannelModeSpec::default();
        assert!(spec.takes_arg(ModeSign::Plus, 'b'));
        assert!(spec.takes_arg(ModeSign::Minus, 'b'));
        assert!(spec.takes_arg(ModeSign::Plus, 'k'));
        assert!(!spec.takes_arg(ModeSign::Minus, 'k'));
        assert!(spec.takes_arg(ModeSign::Plus, 'o'));
        assert!(spec.takes_arg(ModeSign::Minus, 'o'));
        assert!(!spec.takes_arg(ModeSign::Plus, 'i'));
        // Unknown letters take nothing.
        assert!(!spec.takes_arg(ModeSign::Plus, 'Z'));
    }

    #[test]
    fn test_status_lookup() {
        let spec = ChannelModeSpec::default();
        assert!(spec.is_status('o'));
        assert!(!spec.is_status('b'));
        assert_eq!(spec.prefix_for('h'), Some('%'));
        assert_eq!(spec.prefix_for('x'), None);
        assert_eq!(spec.letter_for_prefix('+'), Some('v'));
        assert_eq!(spec.letter_for_prefix('!'), None);
    }

    #[test]
    fn test_from_tokens() {
        let spec = ChannelModeSpec::from_tokens("beI,k,l,imnpst", "(qaohv)~&@%+").unwrap();
        assert!(spec.takes_arg(ModeSign::Minus, 'e'));
        assert!(spec.takes_arg(ModeSign::Plus, 'l'));
        assert!(!spec.takes_arg(ModeSign::Minus, 'l'));
        assert_eq!(spec.prefix_for('q'), Some('~'));
        assert_eq!(spec.letter_for_prefix('&'), Some('a'));
        // Type D letters take no argument.
        assert!(!spec.takes_arg(ModeSign::Plus, 't'));
    }

    #[test]
    fn test_from_tokens_malformed() {
        assert!(ChannelModeSpec::from_tokens("b,k,l", "(ohv)@%+").is_none());
        assert!(ChannelModeSpec::from_tokens("b,k,l,imnpst", "ohv@%+").is_none());
        assert!(ChannelModeSpec::from_tokens("b,k,l,imnpst", "(ohv)@%").is_none());
        assert!(ChannelModeSpec::from_tokens("b,k,l,imnpst", "()").is_none());
    }
}
