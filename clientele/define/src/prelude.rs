//! Convenient re-exports for working with clientele descriptors.
//!
//! ```
//! use clientele_define::prelude::*;
//!
//! let endpoint = EndpointDescriptor::new("Ping", "ping", "/ping", "GET", "text/plain");
//! assert!(endpoint.request_fields.is_empty());
//! ```

pub use crate::error_code::{ErrorCodeEntry, default_error_codes};
pub use crate::types::{EndpointDescriptor, FieldDescriptor, FieldKind, RestMethod};
