//! String normalization for source-code-style escaped strings.
//!
//! Turns raw escaped text as it appears embedded in source code into the
//! logical in-memory string (`unescape_string`), and into the canonical
//! human-facing form used for source/target text (`clean_string`).
//! Resource keys come from [`make_key`], which never collapses whitespace,
//! so a key and its cleaned source can legitimately differ.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Pass order matters: line continuations go first, then backslash pairs,
    // then quotes. Each anchored pattern has a general sibling that keeps the
    // preceding character.
    static ref LINE_CONT_MARKER: Regex = Regex::new(r"\\\\n").unwrap();
    static ref LINE_CONT_NEWLINE: Regex = Regex::new(r"\\\n").unwrap();
    static ref LEADING_BACKSLASH: Regex = Regex::new(r"^\\\\").unwrap();
    static ref INNER_BACKSLASH: Regex = Regex::new(r"([^\\])\\\\").unwrap();
    static ref LEADING_SQUOTE: Regex = Regex::new(r"^\\'").unwrap();
    static ref INNER_SQUOTE: Regex = Regex::new(r"([^\\])\\'").unwrap();
    static ref LEADING_DQUOTE: Regex = Regex::new(r#"^\\""#).unwrap();
    static ref INNER_DQUOTE: Regex = Regex::new(r#"([^\\])\\""#).unwrap();
    static ref CONTROL_ESCAPE: Regex = Regex::new(r"\\[btnfr]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"[ \n\t\r\f]+").unwrap();
}

/// Unescape a string to the form it would have in memory in the target
/// programming language.
///
/// Removes `\\n` line-continuation markers and backslash-newline
/// continuations entirely, then unescapes `\\`, `\'` and `\"`.
/// Empty input comes back unchanged.
pub fn unescape_string(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let s = LINE_CONT_MARKER.replace_all(input, "");
    let s = LINE_CONT_NEWLINE.replace_all(&s, "");
    let s = LEADING_BACKSLASH.replace(&s, r"\");
    let s = INNER_BACKSLASH.replace_all(&s, "${1}\\");
    let s = LEADING_SQUOTE.replace(&s, "'");
    let s = INNER_SQUOTE.replace_all(&s, "${1}'");
    let s = LEADING_DQUOTE.replace(&s, "\"");
    let s = INNER_DQUOTE.replace_all(&s, "${1}\"");
    s.into_owned()
}

/// Clean a string for use as the human-facing source or target text.
///
/// Unescapes first, then replaces `\b \t \n \f \r` escape sequences with a
/// single space each, collapses literal whitespace runs into one space, and
/// trims. This changes the string from what it looks like in source code but
/// increases matching across extractions.
pub fn clean_string(input: &str) -> String {
    let unescaped = unescape_string(input);
    let spaced = CONTROL_ESCAPE.replace_all(&unescaped, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&spaced, " ");
    collapsed.trim().to_string()
}

/// Make a resource key for the given source string.
///
/// Keys must be stable and reproducible across extraction runs, so they use
/// the unescaped (not whitespace-collapsed) text.
pub fn make_key(source: &str) -> String {
    unescape_string(source)
}
