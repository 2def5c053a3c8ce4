//! Validation module for descriptors.
//!
//! The generator trusts its input: duplicate or malformed names simply yield
//! broken JavaScript. This module is the check a descriptor producer runs
//! before handing descriptors over, so problems surface as errors instead of
//! as a module that fails to load.
//!
//! ## Validation Checks
//!
//! - **Uniqueness**: error tags, endpoint identifiers (including against
//!   `ERROR_CODE`), and field names within one endpoint
//! - **Identifier safety**: every name that becomes source text must be a
//!   JavaScript identifier, not a reserved word and not `__proto__`, and must
//!   not shadow the module's own `request` and `server` bindings
//! - **Module wrapper**: CommonJS output may not declare endpoints named after
//!   the wrapper's `require`, `module`, `exports`, `__filename` or `__dirname`
//! - **Soft checks**: unknown HTTP methods and excluded names that match no
//!   field are logged as warnings
//!
//! ## Examples
//!
//! ```
//! use clientele_define::{EndpointDescriptor, ErrorCodeEntry, FieldDescriptor};
//! use clientele_gen::validation::validate_descriptors;
//!
//! let codes = vec![ErrorCodeEntry::new("NOT_FOUND", 404, "missing")];
//! let endpoints = vec![
//!     EndpointDescriptor::new("Get User", "getUser", "/users/:id", "GET", "application/json")
//!         .with_fields(vec![FieldDescriptor::new("id", "User ID")]),
//! ];
//!
//! assert!(validate_descriptors(&codes, &endpoints).is_ok());
//! ```

use std::collections::HashSet;
use std::str::FromStr;

use clientele_define::{EndpointDescriptor, ErrorCodeEntry, RestMethod};

use crate::codegen::{ERROR_CODE_CONST, ModuleFormat};
use crate::errors::GeneratorError;

/// Names bound at module level in every generated client.
const MODULE_BINDINGS: &[&str] = &["request", "server"];

/// Names the CommonJS module wrapper binds around a generated client.
const COMMONJS_WRAPPER_BINDINGS: &[&str] = &[
    "require",
    "module",
    "exports",
    "__filename",
    "__dirname",
];

/// Object literals treat this key as the prototype, not as an own property.
const PROTO_KEY: &str = "__proto__";

/// JavaScript reserved words, including strict-mode and module-only ones.
const RESERVED_WORDS: &[&str] = &[
    "arguments",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "eval",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Validates descriptors for a CommonJS module.
///
/// Shorthand for [`validate_descriptors_for_format`] with
/// [`ModuleFormat::CommonJs`], the generator's default output.
pub fn validate_descriptors(
    error_codes: &[ErrorCodeEntry],
    endpoints: &[EndpointDescriptor],
) -> Result<(), GeneratorError> {
    validate_descriptors_for_format(error_codes, endpoints, ModuleFormat::CommonJs)
}

/// Validates descriptors before generating a module in `format`.
///
/// ## Errors
///
/// - `GeneratorError::DuplicateErrorTag` if two error codes share a tag
/// - `GeneratorError::DuplicateIdentifier` if two endpoints share an
///   identifier, or an endpoint is named `ERROR_CODE`
/// - `GeneratorError::DuplicateField` if an endpoint declares a field twice
/// - `GeneratorError::InvalidIdentifier` if a tag, identifier, or eligible
///   field name is not usable as a JavaScript identifier, or an endpoint
///   identifier clashes with a binding of the module wrapper
pub fn validate_descriptors_for_format(
    error_codes: &[ErrorCodeEntry],
    endpoints: &[EndpointDescriptor],
    format: ModuleFormat,
) -> Result<(), GeneratorError> {
    let mut tags = HashSet::new();
    for entry in error_codes {
        check_identifier("error code tag", &entry.tag)?;
        if !tags.insert(entry.tag.as_str()) {
            return Err(GeneratorError::DuplicateErrorTag(entry.tag.clone()));
        }
    }

    let mut identifiers = HashSet::from([ERROR_CODE_CONST]);
    for endpoint in endpoints {
        check_identifier("endpoint identifier", &endpoint.identifier)?;
        check_not_module_binding("endpoint identifier", &endpoint.identifier)?;
        if format == ModuleFormat::CommonJs {
            check_not_wrapper_binding(&endpoint.identifier)?;
        }
        if !identifiers.insert(endpoint.identifier.as_str()) {
            return Err(GeneratorError::DuplicateIdentifier(
                endpoint.identifier.clone(),
            ));
        }
        validate_endpoint(endpoint)?;
    }

    Ok(())
}

/// Validates the fields of a single endpoint.
fn validate_endpoint(endpoint: &EndpointDescriptor) -> Result<(), GeneratorError> {
    let mut names = HashSet::new();
    for field in &endpoint.request_fields {
        if !names.insert(field.name.as_str()) {
            return Err(GeneratorError::DuplicateField {
                endpoint: endpoint.identifier.clone(),
                field: field.name.clone(),
            });
        }
    }

    for field in endpoint.eligible_fields() {
        check_identifier("field name", &field.name)?;
        check_not_module_binding("field name", &field.name)?;
    }

    for excluded in &endpoint.excluded_field_names {
        if !names.contains(excluded.as_str()) {
            tracing::warn!(
                endpoint = %endpoint.identifier,
                field = %excluded,
                "Excluded field is not a request field"
            );
        }
    }

    if RestMethod::from_str(&endpoint.http_method).is_err() {
        tracing::warn!(
            endpoint = %endpoint.identifier,
            method = %endpoint.http_method,
            "Unrecognized HTTP method, emitting it verbatim"
        );
    }

    Ok(())
}

/// Returns `true` if `name` is a plain JavaScript identifier.
///
/// Only ASCII identifiers are accepted: `[A-Za-z_$][A-Za-z0-9_$]*`, minus
/// reserved words and `__proto__`, since every name also becomes an object
/// key.
///
/// ## Examples
///
/// ```
/// use clientele_gen::validation::is_identifier_safe;
///
/// assert!(is_identifier_safe("getUser"));
/// assert!(is_identifier_safe("$el"));
/// assert!(!is_identifier_safe("get-user"));
/// assert!(!is_identifier_safe("class"));
/// assert!(!is_identifier_safe("__proto__"));
/// ```
pub fn is_identifier_safe(name: &str) -> bool {
    identifier_problem(name).is_none()
}

fn identifier_problem(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("cannot be empty");
    };

    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return Some("must start with a letter, '_' or '$'");
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Some("may only contain letters, digits, '_' and '$'");
    }
    if RESERVED_WORDS.contains(&name) {
        return Some("is a reserved word");
    }
    if name == PROTO_KEY {
        return Some("is not an own property key in object literals");
    }
    None
}

fn check_identifier(kind: &'static str, name: &str) -> Result<(), GeneratorError> {
    match identifier_problem(name) {
        Some(reason) => Err(GeneratorError::InvalidIdentifier {
            kind,
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

fn check_not_module_binding(kind: &'static str, name: &str) -> Result<(), GeneratorError> {
    if MODULE_BINDINGS.contains(&name) {
        return Err(GeneratorError::InvalidIdentifier {
            kind,
            name: name.to_string(),
            reason: format!("shadows the generated module's `{name}` binding"),
        });
    }
    Ok(())
}

fn check_not_wrapper_binding(name: &str) -> Result<(), GeneratorError> {
    if COMMONJS_WRAPPER_BINDINGS.contains(&name) {
        return Err(GeneratorError::InvalidIdentifier {
            kind: "endpoint identifier",
            name: name.to_string(),
            reason: format!("clashes with the CommonJS wrapper's `{name}` binding"),
        });
    }
    Ok(())
}
