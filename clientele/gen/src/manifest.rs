//! Descriptor manifests.
//!
//! A manifest is a JSON or TOML file describing one API: its server URL,
//! application error codes, and endpoints. Endpoints may leave their
//! identifier, method, and content type unset; [`Manifest::resolve`] fills
//! them in via [`crate::inference`] and produces the [`ApiDescriptors`] the
//! generator consumes.
//!
//! ## Format
//!
//! ```toml
//! server = "https://api.example.com"
//! include_default_error_codes = true
//! common_excluded_fields = ["token"]
//!
//! [[error_codes]]
//! tag = "NOT_FOUND"
//! code = 404
//! description = "missing"
//!
//! [[endpoints]]
//! name = "Get User"
//! url = "/users/:id"
//! identifier = "getUser"
//! http_method = "GET"
//! content_type = "application/json"
//! fields = [{ name = "id", label = "User ID" }]
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use clientele_define::{EndpointDescriptor, ErrorCodeEntry, FieldDescriptor, default_error_codes};
use serde::{Deserialize, Serialize};

use crate::errors::GeneratorError;
use crate::inference::{infer_identifier, suggest_content_type, suggest_method};

fn default_true() -> bool {
    true
}

/// A descriptor manifest as written on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Base URL of the API. May be supplied at resolution time instead.
    #[serde(default)]
    pub server: Option<String>,
    /// Prepend the framework error codes to `error_codes`.
    #[serde(default = "default_true")]
    pub include_default_error_codes: bool,
    /// Field names bound elsewhere and excluded from every endpoint's call.
    #[serde(default)]
    pub common_excluded_fields: Vec<String>,
    /// Application error codes.
    #[serde(default)]
    pub error_codes: Vec<ErrorCodeEntry>,
    /// Endpoints, in emission order.
    #[serde(default)]
    pub endpoints: Vec<ManifestEndpoint>,
}

/// An endpoint entry in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEndpoint {
    /// Human-readable name.
    pub name: String,
    /// Path appended to the server URL.
    pub url: String,
    /// Exported name; inferred from `url` when unset.
    #[serde(default)]
    pub identifier: Option<String>,
    /// HTTP method; inferred from the fields when unset.
    #[serde(default)]
    pub http_method: Option<String>,
    /// Content type; inferred from the fields when unset.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Field names excluded from this endpoint's call.
    #[serde(default)]
    pub excluded_fields: Vec<String>,
    /// Request parameters in emission order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

/// Fully resolved generator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDescriptors {
    /// Base URL every callable sends to.
    pub server: String,
    /// Error-code table, in emission order.
    pub error_codes: Vec<ErrorCodeEntry>,
    /// Endpoints, in emission order.
    pub endpoints: Vec<EndpointDescriptor>,
}

impl Manifest {
    /// Reads and parses a manifest file.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ManifestRead` if the file cannot be read, and
    /// the errors of [`Manifest::parse`] otherwise.
    pub fn from_path(path: &Path) -> Result<Self, GeneratorError> {
        let content = fs::read_to_string(path).map_err(|source| GeneratorError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Read manifest");
        Self::parse(&content, path)
    }

    /// Parses manifest text, choosing the format from `path`'s extension.
    ///
    /// ## Errors
    ///
    /// - `GeneratorError::UnsupportedManifest` for extensions other than
    ///   `.json` and `.toml`
    /// - `GeneratorError::ManifestParse` for malformed content
    ///
    /// ## Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use clientele_gen::manifest::Manifest;
    ///
    /// let json = r#"{"server": "/", "endpoints": [{"name": "Ping", "url": "/ping"}]}"#;
    /// let manifest = Manifest::parse(json, Path::new("api.json")).unwrap();
    /// assert_eq!(manifest.endpoints.len(), 1);
    /// assert!(manifest.include_default_error_codes);
    /// ```
    pub fn parse(content: &str, path: &Path) -> Result<Self, GeneratorError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => {
                serde_json::from_str(content).map_err(|e| GeneratorError::ManifestParse {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
            Some("toml") => toml::from_str(content).map_err(|e| GeneratorError::ManifestParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            _ => Err(GeneratorError::UnsupportedManifest(path.to_path_buf())),
        }
    }

    /// Resolves the manifest into generator input.
    ///
    /// `server_override`, when given, replaces the manifest's `server`.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` if no server URL is available or
    /// an endpoint's identifier cannot be inferred from its URL.
    pub fn resolve(&self, server_override: Option<&str>) -> Result<ApiDescriptors, GeneratorError> {
        let server = server_override
            .map(str::to_string)
            .or_else(|| self.server.clone())
            .ok_or_else(|| {
                GeneratorError::ConfigError(
                    "no server URL: set `server` in the manifest or pass --server".to_string(),
                )
            })?;

        let mut error_codes = if self.include_default_error_codes {
            default_error_codes()
        } else {
            Vec::new()
        };
        error_codes.extend(self.error_codes.iter().cloned());

        let endpoints = self
            .endpoints
            .iter()
            .map(|endpoint| endpoint.resolve(&self.common_excluded_fields))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            server = %server,
            error_codes = error_codes.len(),
            endpoints = endpoints.len(),
            "Resolved manifest"
        );

        Ok(ApiDescriptors {
            server,
            error_codes,
            endpoints,
        })
    }
}

impl ManifestEndpoint {
    /// Resolves this entry into an [`EndpointDescriptor`].
    ///
    /// Common exclusions only apply to fields this endpoint declares. The
    /// method and content type are inferred from every declared field, excluded
    /// ones included, since the server still expects them.
    pub fn resolve(
        &self,
        common_excluded: &[String],
    ) -> Result<EndpointDescriptor, GeneratorError> {
        let mut excluded: BTreeSet<String> = self.excluded_fields.iter().cloned().collect();
        for name in common_excluded {
            if self.fields.iter().any(|field| &field.name == name) {
                excluded.insert(name.clone());
            }
        }

        let declared: Vec<&FieldDescriptor> = self.fields.iter().collect();

        let identifier = match &self.identifier {
            Some(identifier) => identifier.clone(),
            None => infer_identifier(&self.url).ok_or_else(|| {
                GeneratorError::ConfigError(format!(
                    "cannot infer an identifier for endpoint '{}' from url '{}'",
                    self.name, self.url
                ))
            })?,
        };

        let http_method = self
            .http_method
            .clone()
            .unwrap_or_else(|| suggest_method(&declared).to_string());
        let content_type = self
            .content_type
            .clone()
            .unwrap_or_else(|| suggest_content_type(&declared).to_string());

        tracing::debug!(
            endpoint = %identifier,
            method = %http_method,
            content_type = %content_type,
            fields = declared.len(),
            excluded = excluded.len(),
            "Resolved endpoint"
        );

        Ok(EndpointDescriptor {
            name: self.name.clone(),
            identifier,
            url: self.url.clone(),
            http_method,
            content_type,
            request_fields: self.fields.clone(),
            excluded_field_names: excluded,
        })
    }
}
