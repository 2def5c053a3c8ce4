//! Error types for the clientele generator.
//!
//! Generation itself is total and never produces these. They come from the
//! layers around it: reading manifests, validating descriptors, and writing
//! output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur around code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to read a manifest file
    #[error("Failed to read manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a manifest file
    #[error("Failed to parse manifest '{path}': {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Manifest has an extension we cannot parse
    #[error("Unsupported manifest format '{0}' (expected .json or .toml)")]
    UnsupportedManifest(PathBuf),

    /// Two error-code entries share a tag.
    #[error("Duplicate error code tag '{0}'")]
    DuplicateErrorTag(String),

    /// Two exported names collide.
    #[error("Duplicate exported identifier '{0}'")]
    DuplicateIdentifier(String),

    /// A field name appears twice in one endpoint.
    #[error("Duplicate field '{field}' in endpoint '{endpoint}'")]
    DuplicateField { endpoint: String, field: String },

    /// A name that becomes JavaScript source is not a usable identifier.
    #[error("Invalid {kind} '{name}': {reason}")]
    InvalidIdentifier {
        /// What the name is used as (error tag, endpoint identifier, field).
        kind: &'static str,
        /// The offending name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
