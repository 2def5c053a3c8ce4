//! JavaScript literal and comment helpers.
//!
//! Descriptor values are spliced into generated source in two places: quoted
//! string literals (server URL, path, method, content type) and trailing line
//! comments (labels and descriptions). These helpers keep both well-formed
//! regardless of what the descriptor contains.

/// One level of indentation in generated source.
pub const INDENT: &str = "  ";

/// Renders `value` as a single-quoted JavaScript string literal.
///
/// ## Examples
///
/// ```
/// use clientele_gen::codegen::literal::js_string;
///
/// assert_eq!(js_string("/users"), "'/users'");
/// assert_eq!(js_string("it's"), r"'it\'s'");
/// ```
pub fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

/// Folds `text` onto a single line so it can follow `//`.
///
/// Every run of line breaks becomes one space and surrounding whitespace is
/// trimmed.
///
/// ## Examples
///
/// ```
/// use clientele_gen::codegen::literal::comment_text;
///
/// assert_eq!(comment_text("first\nsecond"), "first second");
/// ```
pub fn comment_text(text: &str) -> String {
    text.split(['\n', '\r', '\u{2028}', '\u{2029}'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns ` // text` for a non-empty comment, or an empty string.
pub fn trailing_comment(text: &str) -> String {
    let folded = comment_text(text);
    if folded.is_empty() {
        String::new()
    } else {
        format!(" // {folded}")
    }
}
