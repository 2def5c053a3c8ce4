//! Output assembly and file writing for generated code.
//!
//! This module handles the final phase of code generation: assembling all
//! generated sections into a complete JavaScript module and writing it to disk
//! atomically.
//!
//! ## Output Structure
//!
//! ```text
//! "use strict";                       <- header
//! const request = require('./request');
//! const server = '...';
//!
//! const ERROR_CODE = { ... }          <- error-code table
//!
//! // Endpoint name                    <- one callable per endpoint
//! const identifier = function(...) { ... }
//!
//! module.exports = { ... }            <- export
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: the output depends only on the arguments; no clock,
//!   randomness, locale, or hash-map iteration order is involved
//! - **Totality**: [`generate`] cannot fail; only the file writing around it can
//! - **Atomic writes**: uses temp file + rename pattern to prevent partial writes

use std::fs;
use std::path::Path;

use clientele_define::{EndpointDescriptor, ErrorCodeEntry};

use crate::codegen::{
    GeneratorOptions, generate_endpoint, generate_error_code_table, generate_exports,
    generate_header,
};
use crate::errors::GeneratorError;
use crate::manifest::ApiDescriptors;
use crate::validation::validate_descriptors_for_format;

/// Generates a client module with the default options.
///
/// Equivalent to [`generate_with_options`] with [`GeneratorOptions::default`]:
/// a CommonJS module importing its request primitive from `./request`.
///
/// The generator does not validate its input. Run
/// [`crate::validation::validate_descriptors`] first if the descriptors are
/// not already known to be well-formed.
///
/// ## Examples
///
/// ```
/// use clientele_define::{EndpointDescriptor, ErrorCodeEntry, FieldDescriptor};
/// use clientele_gen::generate;
///
/// let code = generate(
///     "https://api.example.com",
///     &[ErrorCodeEntry::new("NOT_FOUND", 404, "missing")],
///     &[EndpointDescriptor::new("Get User", "getUser", "/users/:id", "GET", "application/json")
///         .with_fields(vec![FieldDescriptor::new("id", "User ID")])],
/// );
///
/// assert!(code.contains("  NOT_FOUND: 404 // missing\n"));
/// assert!(code.contains("const getUser = function({\n"));
/// assert!(code.ends_with("  getUser: getUser\n}\n"));
/// ```
pub fn generate(
    server: &str,
    error_codes: &[ErrorCodeEntry],
    endpoints: &[EndpointDescriptor],
) -> String {
    generate_with_options(server, error_codes, endpoints, &GeneratorOptions::default())
}

/// Generates a client module.
///
/// Sections are emitted in a fixed order, separated by blank lines: header,
/// `ERROR_CODE`, one callable per endpoint in input order, export.
pub fn generate_with_options(
    server: &str,
    error_codes: &[ErrorCodeEntry],
    endpoints: &[EndpointDescriptor],
    options: &GeneratorOptions,
) -> String {
    let mut sections = Vec::with_capacity(endpoints.len() + 3);
    sections.push(generate_header(server, options));
    sections.push(generate_error_code_table(error_codes));
    sections.extend(endpoints.iter().map(generate_endpoint));
    sections.push(generate_exports(endpoints, options.module_format));

    sections.join("\n")
}

/// Writes content to a file atomically using temp file + rename.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Validates, generates, and writes a client module.
///
/// This is the main entry point for file-based generation.
///
/// ## Arguments
///
/// * `api` - Resolved descriptors to generate from
/// * `options` - Module format and request import
/// * `output_path` - File to write the module to
/// * `dry_run` - If true, print the module to stdout instead of writing it
///
/// ## Returns
///
/// The generated module source.
///
/// ## Errors
///
/// Returns an error if the descriptors fail validation or the file cannot be
/// written.
pub fn generate_and_write(
    api: &ApiDescriptors,
    options: &GeneratorOptions,
    output_path: &Path,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    validate_descriptors_for_format(&api.error_codes, &api.endpoints, options.module_format)?;

    let code = generate_with_options(&api.server, &api.error_codes, &api.endpoints, options);
    tracing::info!(
        format = %options.module_format,
        endpoints = api.endpoints.len(),
        bytes = code.len(),
        "Generated client module"
    );

    if dry_run {
        print!("{code}");
    } else {
        write_atomic(output_path, &code)?;
        tracing::info!(path = %output_path.display(), "Wrote client module");
    }

    Ok(code)
}
