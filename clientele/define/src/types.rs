//! Core types for endpoint descriptors.
//!
//! This module provides the fundamental types for describing an API surface:
//!
//! - [`EndpointDescriptor`] - One endpoint, which becomes one generated callable
//! - [`FieldDescriptor`] - One request parameter of an endpoint
//! - [`FieldKind`] - Hint used when inferring an endpoint's method and content type
//! - [`RestMethod`] - HTTP method enumeration

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// HTTP methods supported by generated clients.
///
/// Descriptors carry their method as a free string (it is emitted verbatim),
/// so this enum is used by inference and validation rather than by the
/// generator itself.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use clientele_define::RestMethod;
///
/// let method = RestMethod::from_str("POST").unwrap();
/// assert_eq!(method, RestMethod::Post);
/// assert_eq!(RestMethod::Get.to_string(), "GET");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a new resource
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
    /// HTTP HEAD - Get headers only (no body)
    Head,
    /// HTTP OPTIONS - Get allowed methods for a resource
    Options,
}

/// The kind of value a request field carries.
///
/// The generator ignores this entirely. It only feeds
/// method and content-type inference for descriptors that leave those unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Plain text value.
    #[default]
    Text,
    /// Secret value; forces POST so it never lands in a query string.
    Password,
    /// File upload; forces POST and a multipart body.
    File,
}

/// One request parameter of an endpoint.
///
/// ## Examples
///
/// ```
/// use clientele_define::{FieldDescriptor, FieldKind};
///
/// let id = FieldDescriptor::new("id", "User ID");
/// assert_eq!(id.kind, FieldKind::Text);
///
/// let avatar = FieldDescriptor::new("avatar", "Avatar").with_kind(FieldKind::File);
/// assert_eq!(avatar.kind, FieldKind::File);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Parameter name; becomes a configuration key and a body key.
    ///
    /// Must be unique within a request and identifier-safe.
    pub name: String,
    /// Human-readable label, emitted as a trailing comment.
    #[serde(default)]
    pub label: String,
    /// Inference hint.
    #[serde(default)]
    pub kind: FieldKind,
    /// Maximum text length, if bounded. Inference hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

impl FieldDescriptor {
    /// Creates an unbounded text field.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Text,
            max_length: None,
        }
    }

    /// Sets the field kind.
    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the maximum text length.
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// A single endpoint, emitted as one exported callable.
///
/// ## Examples
///
/// ```
/// use clientele_define::{EndpointDescriptor, FieldDescriptor};
///
/// let endpoint = EndpointDescriptor::new("List Posts", "listPosts", "/posts", "GET", "text/plain")
///     .with_fields(vec![
///         FieldDescriptor::new("page", "Page"),
///         FieldDescriptor::new("token", "Session token"),
///     ])
///     .exclude("token");
///
/// let eligible: Vec<_> = endpoint.eligible_fields().map(|f| f.name.as_str()).collect();
/// assert_eq!(eligible, vec!["page"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Human-readable name, emitted as a comment above the callable.
    pub name: String,
    /// Exported name of the generated callable.
    ///
    /// Must be unique across all endpoints and identifier-safe.
    pub identifier: String,
    /// Path appended to the server URL.
    pub url: String,
    /// HTTP method, emitted verbatim.
    pub http_method: String,
    /// Value of the `Content-Type` request header.
    pub content_type: String,
    /// Request parameters in emission order.
    #[serde(default)]
    pub request_fields: Vec<FieldDescriptor>,
    /// Names present in `request_fields` that the generated call omits,
    /// typically parameters bound elsewhere.
    #[serde(default)]
    pub excluded_field_names: BTreeSet<String>,
}

impl EndpointDescriptor {
    /// Creates an endpoint with no request fields.
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        url: impl Into<String>,
        http_method: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            url: url.into(),
            http_method: http_method.into(),
            content_type: content_type.into(),
            request_fields: Vec::new(),
            excluded_field_names: BTreeSet::new(),
        }
    }

    /// Replaces the request fields.
    pub fn with_fields(mut self, fields: Vec<FieldDescriptor>) -> Self {
        self.request_fields = fields;
        self
    }

    /// Marks a field name as excluded from the generated call.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded_field_names.insert(name.into());
        self
    }

    /// Returns `true` if `name` is excluded from the generated call.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_field_names.contains(name)
    }

    /// Iterates the fields the generated call recognizes, in declaration order.
    pub fn eligible_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.request_fields
            .iter()
            .filter(|field| !self.is_excluded(&field.name))
    }
}
