//! Error-code table entries.
//!
//! Every generated client exports an `ERROR_CODE` mapping built from a list of
//! [`ErrorCodeEntry`] values. The framework-level codes returned by
//! [`default_error_codes`] are normally placed ahead of application codes.

use serde::{Deserialize, Serialize};

/// One entry of the exported `ERROR_CODE` mapping.
///
/// ## Examples
///
/// ```
/// use clientele_define::ErrorCodeEntry;
///
/// let entry = ErrorCodeEntry::new("NOT_FOUND", 404, "missing");
/// assert_eq!(entry.tag, "NOT_FOUND");
/// assert_eq!(entry.code, 404);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCodeEntry {
    /// Constant key; must be unique and identifier-safe.
    pub tag: String,
    /// Numeric value returned by the server.
    pub code: i64,
    /// Human-readable description, emitted as a trailing comment.
    #[serde(default)]
    pub description: String,
}

impl ErrorCodeEntry {
    /// Creates an entry.
    pub fn new(tag: impl Into<String>, code: i64, description: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            code,
            description: description.into(),
        }
    }
}

const DEFAULT_ERROR_CODES: &[(&str, i64, &str)] = &[
    ("SUCCESS", 0, "Success"),
    ("ERROR_UNKNOWN", -1, "Unknown Error"),
    ("ERROR_SYSTEM", -2, "System Error"),
    ("ERROR_BAD_PARAMETER", -11, "Bad Parameter Error"),
    ("ERROR_BAD_FORMAT", -12, "Bad Format Error"),
    ("ERROR_PERMISSION", -13, "Permission Error"),
];

/// Returns the framework-level error codes every API shares.
///
/// Application codes should avoid these tags and values.
///
/// ## Examples
///
/// ```
/// use clientele_define::default_error_codes;
///
/// let codes = default_error_codes();
/// assert_eq!(codes[0].tag, "SUCCESS");
/// assert_eq!(codes[0].code, 0);
/// ```
pub fn default_error_codes() -> Vec<ErrorCodeEntry> {
    DEFAULT_ERROR_CODES
        .iter()
        .map(|(tag, code, description)| ErrorCodeEntry::new(*tag, *code, *description))
        .collect()
}
