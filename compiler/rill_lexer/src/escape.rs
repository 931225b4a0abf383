//! Backslash escapes inside quoted literals.
//!
//! Six escapes decode to a single character. Any other escaped character
//! is kept as written, backslash included, so `\q` stays two characters.

/// Resolve a single escape character to its replacement.
///
/// Returns `Some(char)` for recognized escapes, `None` for unrecognized ones.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

/// Append the decoded form of the escape `\c` to `out`.
///
/// Unrecognized escapes are preserved literally (`\q` stays `\q`).
#[inline]
pub(crate) fn push_escape(out: &mut String, c: char) {
    if let Some(resolved) = resolve_escape(c) {
        out.push(resolved);
    } else {
        out.push('\\');
        out.push(c);
    }
}
