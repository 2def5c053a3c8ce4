//! Generation of per-endpoint callables.
//!
//! Each [`EndpointDescriptor`] becomes a function bound to its identifier:
//!
//! ```text
//! // Get User
//! const getUser = function({
//!   id // User ID
//! } = {}) {
//!   return request({
//!     server: server,
//!     path: '/users/:id',
//!     method: 'GET',
//!     data: {
//!       id: id
//!     },
//!     header: { 'Content-Type': 'application/json' }
//!   })
//! }
//! ```
//!
//! The destructured parameter lists exactly the eligible fields, so any other
//! key the caller passes is dropped before the request is built.

use std::fmt::Write;

use clientele_define::{EndpointDescriptor, FieldDescriptor};

use super::literal::{INDENT, comment_text, js_string, trailing_comment};

/// Generates the callable for one endpoint.
///
/// ## Examples
///
/// ```
/// use clientele_define::EndpointDescriptor;
/// use clientele_gen::codegen::generate_endpoint;
///
/// let endpoint = EndpointDescriptor::new("Ping", "ping", "/ping", "GET", "text/plain");
/// let code = generate_endpoint(&endpoint);
/// assert!(code.starts_with("// Ping\nconst ping = function() {\n"));
/// assert!(code.contains("    data: {},\n"));
/// ```
pub fn generate_endpoint(endpoint: &EndpointDescriptor) -> String {
    let fields: Vec<&FieldDescriptor> = endpoint.eligible_fields().collect();
    let mut out = String::new();

    let name = comment_text(&endpoint.name);
    if !name.is_empty() {
        let _ = writeln!(out, "// {name}");
    }

    let _ = writeln!(
        out,
        "const {} = function({}) {{",
        endpoint.identifier,
        parameter_list(&fields)
    );
    let _ = writeln!(out, "{INDENT}return request({{");
    let _ = writeln!(out, "{INDENT}{INDENT}server: server,");
    let _ = writeln!(out, "{INDENT}{INDENT}path: {},", js_string(&endpoint.url));
    let _ = writeln!(
        out,
        "{INDENT}{INDENT}method: {},",
        js_string(&endpoint.http_method)
    );
    let _ = writeln!(out, "{INDENT}{INDENT}data: {},", data_object(&fields));
    let _ = writeln!(
        out,
        "{INDENT}{INDENT}header: {{ 'Content-Type': {} }}",
        js_string(&endpoint.content_type)
    );
    let _ = writeln!(out, "{INDENT}}})");
    out.push_str("}\n");
    out
}

/// Destructured configuration parameter, or nothing when no field is eligible.
fn parameter_list(fields: &[&FieldDescriptor]) -> String {
    if fields.is_empty() {
        return String::new();
    }

    let mut out = String::from("{\n");
    let last = fields.len() - 1;
    for (idx, field) in fields.iter().enumerate() {
        let separator = if idx < last { "," } else { "" };
        let _ = writeln!(
            out,
            "{INDENT}{}{separator}{}",
            field.name,
            trailing_comment(&field.label)
        );
    }
    out.push_str("} = {}");
    out
}

/// Request body object literal mapping each field to its local binding.
fn data_object(fields: &[&FieldDescriptor]) -> String {
    if fields.is_empty() {
        return "{}".to_string();
    }

    let entries: Vec<String> = fields
        .iter()
        .map(|field| format!("{INDENT}{INDENT}{INDENT}{0}: {0}", field.name))
        .collect();
    format!("{{\n{}\n{INDENT}{INDENT}}}", entries.join(",\n"))
}
