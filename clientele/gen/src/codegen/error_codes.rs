//! Generation of the exported `ERROR_CODE` mapping.

use std::fmt::Write;

use clientele_define::ErrorCodeEntry;

use super::literal::{INDENT, trailing_comment};

/// Name of the exported error-code constant.
pub const ERROR_CODE_CONST: &str = "ERROR_CODE";

/// Generates the `ERROR_CODE` constant.
///
/// One `tag: code` line per entry, in input order, each followed by the
/// entry's description as a line comment. Tags are emitted verbatim, so
/// duplicate or malformed tags produce duplicate or malformed keys.
///
/// ## Examples
///
/// ```
/// use clientele_define::ErrorCodeEntry;
/// use clientele_gen::codegen::generate_error_code_table;
///
/// let table = generate_error_code_table(&[
///     ErrorCodeEntry::new("SUCCESS", 0, "Success"),
///     ErrorCodeEntry::new("NOT_FOUND", 404, "missing"),
/// ]);
/// assert_eq!(
///     table,
///     "const ERROR_CODE = {\n  SUCCESS: 0, // Success\n  NOT_FOUND: 404 // missing\n}\n"
/// );
/// ```
pub fn generate_error_code_table(entries: &[ErrorCodeEntry]) -> String {
    if entries.is_empty() {
        return format!("const {ERROR_CODE_CONST} = {{}}\n");
    }

    let mut out = format!("const {ERROR_CODE_CONST} = {{\n");
    let last = entries.len() - 1;
    for (idx, entry) in entries.iter().enumerate() {
        let separator = if idx < last { "," } else { "" };
        let _ = writeln!(
            out,
            "{INDENT}{}: {}{separator}{}",
            entry.tag,
            entry.code,
            trailing_comment(&entry.description)
        );
    }
    out.push_str("}\n");
    out
}
