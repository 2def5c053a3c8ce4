//! Clientele Definition Library
//!
//! This crate provides the descriptor types consumed by `clientele-gen` to
//! generate JavaScript API client modules. Descriptors are plain data: they
//! are authored (or loaded from a manifest) outside the generator and handed
//! to it wholesale.
//!
//! ## Core Types
//!
//! - [`EndpointDescriptor`] - One endpoint; becomes one exported callable
//! - [`FieldDescriptor`] - One request parameter of an endpoint
//! - [`FieldKind`] - Field hint used for method and content-type inference
//! - [`ErrorCodeEntry`] - One entry of the exported `ERROR_CODE` mapping
//! - [`RestMethod`] - HTTP methods (GET, POST, PUT, etc.)
//!
//! ## Examples
//!
//! ```
//! use clientele_define::{EndpointDescriptor, ErrorCodeEntry, FieldDescriptor};
//!
//! let codes = vec![ErrorCodeEntry::new("NOT_FOUND", 404, "missing")];
//! let endpoints = vec![
//!     EndpointDescriptor::new("Get User", "getUser", "/users/:id", "GET", "application/json")
//!         .with_fields(vec![FieldDescriptor::new("id", "User ID")]),
//! ];
//!
//! assert_eq!(codes.len(), 1);
//! assert_eq!(endpoints[0].eligible_fields().count(), 1);
//! ```

pub mod error_code;
pub mod prelude;
pub mod types;

// Re-export main types at crate root
pub use error_code::{ErrorCodeEntry, default_error_codes};
pub use types::{EndpointDescriptor, FieldDescriptor, FieldKind, RestMethod};
