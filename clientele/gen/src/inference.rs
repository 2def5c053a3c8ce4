//! Endpoint inference for manifests that leave details unset.
//!
//! A manifest endpoint only has to name its URL and fields. Whatever else it
//! omits is derived here:
//!
//! - the identifier, from the URL (`/user/info/` -> `user_info`)
//! - the HTTP method, from the fields' kinds and lengths
//! - the content type, from whether any field uploads a file
//!
//! ## Examples
//!
//! ```
//! use clientele_define::{FieldDescriptor, FieldKind, RestMethod};
//! use clientele_gen::inference::{infer_identifier, suggest_content_type, suggest_method};
//!
//! assert_eq!(infer_identifier("/user/info/"), Some("user_info".to_string()));
//!
//! let fields = vec![FieldDescriptor::new("avatar", "Avatar").with_kind(FieldKind::File)];
//! let refs: Vec<_> = fields.iter().collect();
//! assert_eq!(suggest_method(&refs), RestMethod::Post);
//! assert_eq!(suggest_content_type(&refs), "multipart/form-data");
//! ```

use clientele_define::{FieldDescriptor, FieldKind, RestMethod};

/// Content type of bodies carrying a file.
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Content type of all other bodies.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Field names treated as secrets regardless of their declared kind.
const SECRET_FIELD_NAMES: &[&str] = &["pass", "password"];

/// More unbounded text fields than this forces POST.
const MAX_UNBOUNDED_TEXT_FIELDS: usize = 3;

/// A summed text `max_length` above this forces POST.
const MAX_QUERY_TEXT_LENGTH: u64 = 200;

/// Infers an exported identifier from an endpoint URL.
///
/// Path separators (and any other character that cannot appear in a
/// JavaScript identifier) become `_`; leading and trailing `_` are trimmed. A
/// leading digit gets an `_` prefix.
///
/// ## Returns
///
/// - `Some(identifier)` when the URL has at least one usable character
/// - `None` for URLs like `/` that leave nothing behind
///
/// ## Examples
///
/// ```
/// use clientele_gen::inference::infer_identifier;
///
/// assert_eq!(infer_identifier("/api/login"), Some("api_login".to_string()));
/// assert_eq!(infer_identifier("/users/:id"), Some("users__id".to_string()));
/// assert_eq!(infer_identifier("/"), None);
/// ```
pub fn infer_identifier(url: &str) -> Option<String> {
    let replaced: String = url
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = replaced.trim_matches('_');

    match trimmed.chars().next() {
        None => None,
        Some(first) if first.is_ascii_digit() => Some(format!("_{trimmed}")),
        Some(_) => Some(trimmed.to_string()),
    }
}

/// Suggests an HTTP method for an endpoint with the given request fields.
///
/// Every declared field counts, including ones the client never sends.
///
/// POST is chosen when the parameters should not travel in a query string:
///
/// - any field is a file or a password (by kind or by name)
/// - more than three text fields have no length bound
/// - the bounded text fields could add up to more than 200 characters
///
/// Everything else is GET.
pub fn suggest_method(fields: &[&FieldDescriptor]) -> RestMethod {
    let mut unbounded = 0usize;
    let mut total_length = 0u64;

    for field in fields {
        match field.kind {
            FieldKind::File | FieldKind::Password => return RestMethod::Post,
            FieldKind::Text => {}
        }
        if SECRET_FIELD_NAMES.contains(&field.name.as_str()) {
            return RestMethod::Post;
        }
        match field.max_length {
            Some(len) => total_length += u64::from(len),
            None => unbounded += 1,
        }
    }

    if unbounded > MAX_UNBOUNDED_TEXT_FIELDS || total_length > MAX_QUERY_TEXT_LENGTH {
        RestMethod::Post
    } else {
        RestMethod::Get
    }
}

/// Suggests a content type for an endpoint with the given request fields.
pub fn suggest_content_type(fields: &[&FieldDescriptor]) -> &'static str {
    if fields.iter().any(|field| field.kind == FieldKind::File) {
        MULTIPART_FORM_DATA
    } else {
        FORM_URLENCODED
    }
}
