//! Mode line parsing.

use super::types::{ChannelModeSpec, ModeChange, ModeLine, ModeSign};

/// Parse a mode token string and its argument list into structured changes.
///
/// The token string is scanned left to right: `+` and `-` update the current
/// sign (initially `+`) without being emitted, every other character becomes
/// a [`ModeChange`] carrying an explicit sign. Whether a letter consumes the
/// next positional argument is decided by `spec` (see
/// [`ChannelModeSpec::takes_arg`]); unrecognized letters are kept verbatim
/// and take no argument.
///
/// If a letter needs an argument and the list is exhausted the whole line is
/// rejected and the EMPTY [`ModeLine`] is returned. An under-supplied mode
/// line from the wire is routine, so this is a soft total failure rather
/// than an error or a partial result. Surplus arguments are ignored.
///
/// # Examples
///
/// ```
/// use irctext::{parse_mode_line, ChannelModeSpec};
///
/// let spec = ChannelModeSpec::default();
/// let line = parse_mode_line("ov+b-i", &["Bob", "sue", "stalin*!*@*"], &spec);
/// assert_eq!(line.changes.len(), 4);
/// assert_eq!(line.changes[0].flag(), "+o");
/// assert_eq!(line.changes[3].flag(), "-i");
/// assert_eq!(line.args, vec!["Bob", "sue", "stalin*!*@*"]);
///
/// // Argument underflow rejects the whole line.
/// assert!(parse_mode_line("ov", &[], &spec).is_empty());
/// ```
pub fn parse_mode_line(tokens: &str, args: &[&str], spec: &ChannelModeSpec) -> ModeLine {
    let mut changes = Vec::new();
    let mut consumed = Vec::new();
    let mut remaining = args.iter();
    let mut sign = ModeSign::Plus;

    for c in tokens.chars() {
        match c {
            '+' => sign = ModeSign::Plus,
            '-' => sign = ModeSign::Minus,
            _ => {
                let arg = if spec.takes_arg(sign, c) {
                    match remaining.next() {
                        Some(arg) => {
                            consumed.push(arg.to_string());
                            Some(arg.to_string())
                        }
                        None => return ModeLine::default(),
                    }
                } else {
                    None
                };
                changes.push(ModeChange { sign, mode: c, arg });
            }
        }
    }

    ModeLine {
        changes,
        args: consumed,
    }
}

/// Parse a mode line, returning only the changes.
///
/// The primary-value companion to [`parse_mode_line`] for callers that do
/// not need the separate argument list (each change still carries its own
/// argument). Rejected lines yield an empty vector.
pub fn parse_mode_changes(tokens: &str, args: &[&str], spec: &ChannelModeSpec) -> Vec<ModeChange> {
    parse_mode_line(tokens, args, spec).changes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> ChannelModeSpec {
        ChannelModeSpec::default()
    }

    #[test]
    fn test_basic_parse() {
        let line = parse_mode_line("ov+b-i", &["Bob", "sue", "stalin*!*@*"], &spec());
        assert_eq!(
            line.changes,
            vec![
                ModeChange::plus('o', Some("Bob")),
                ModeChange::plus('v', Some("sue")),
                ModeChange::plus('b', Some("stalin*!*@*")),
                ModeChange::minus('i', None),
            ]
        );
        assert_eq!(line.args, vec!["Bob", "sue", "stalin*!*@*"]);
    }

    #[test]
    fn test_sign_carries_forward() {
        let line = parse_mode_line("-ov+mi", &["Bob", "sue"], &spec());
        assert_eq!(
            line.changes,
            vec![
                ModeChange::minus('o', Some("Bob")),
                ModeChange::minus('v', Some("sue")),
                ModeChange::plus('m', None),
                ModeChange::plus('i', None),
            ]
        );
    }

    #[test]
    fn test_default_sign_is_plus() {
        let line = parse_mode_line("nt", &[], &spec());
        assert_eq!(line.changes[0].flag(), "+n");
        assert_eq!(line.changes[1].flag(), "+t");
    }

    #[test]
    fn test_underflow_rejects_whole_line() {
        assert_eq!(parse_mode_line("ov", &[], &spec()), ModeLine::default());
        // Even when earlier changes had their arguments.
        let line = parse_mode_line("+ob", &["Bob"], &spec());
        assert!(line.is_empty());
        assert!(line.args.is_empty());
    }

    #[test]
    fn test_key_and_limit_only_consume_on_plus() {
        let line = parse_mode_line("+kl", &["hunter2", "40"], &spec());
        assert_eq!(
            line.changes,
            vec![
                ModeChange::plus('k', Some("hunter2")),
                ModeChange::plus('l', Some("40")),
            ]
        );

        let line = parse_mode_line("-kl", &[], &spec());
        assert_eq!(
            line.changes,
            vec![ModeChange::minus('k', None), ModeChange::minus('l', None)]
        );
    }

    #[test]
    fn test_list_modes_consume_on_minus() {
        let line = parse_mode_line("-b", &["*!*@spam.example"], &spec());
        assert_eq!(
            line.changes,
            vec![ModeChange::minus('b', Some("*!*@spam.example"))]
        );
    }

    #[test]
    fn test_unknown_letter_passes_through() {
        let line = parse_mode_line("+Zi", &[], &spec());
        assert_eq!(
            line.changes,
            vec![ModeChange::plus('Z', None), ModeChange::plus('i', None)]
        );
    }

    #[test]
    fn test_surplus_args_ignored() {
        let line = parse_mode_line("+i", &["leftover"], &spec());
        assert_eq!(line.changes, vec![ModeChange::plus('i', None)]);
        assert!(line.args.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(parse_mode_line("", &[], &spec()).is_empty());
        assert!(parse_mode_line("+-", &[], &spec()).is_empty());
    }

    #[test]
    fn test_changes_only_variant() {
        let changes = parse_mode_changes("+o", &["Bob"], &spec());
        assert_eq!(changes, vec![ModeChange::plus('o', Some("Bob"))]);
        assert!(parse_mode_changes("ov", &[], &spec()).is_empty());
    }

    #[test]
    fn test_custom_spec() {
        // A server where 'j' (join throttle) takes a value when set.
        let spec = ChannelModeSpec::from_tokens("beI,k,jl,imnpst", "(ohv)@%+").unwrap();
        let line = parse_mode_line("+j", &["5:10"], &spec);
        assert_eq!(line.changes, vec![ModeChange::plus('j', Some("5:10"))]);
        let line = parse_mode_line("-j", &[], &spec);
        assert_eq!(line.changes, vec![ModeChange::minus('j', None)]);
    }
}
