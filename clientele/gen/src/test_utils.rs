//! Shared test utilities for clientele-gen tests.

use clientele_define::{EndpointDescriptor, ErrorCodeEntry, FieldDescriptor};

use crate::inference::FORM_URLENCODED;
use crate::manifest::ApiDescriptors;

/// Creates a GET endpoint without fields, named and routed after `identifier`.
pub fn make_simple_endpoint(identifier: &str) -> EndpointDescriptor {
    EndpointDescriptor::new(
        identifier,
        identifier,
        format!("/{identifier}"),
        "GET",
        FORM_URLENCODED,
    )
}

/// Creates the single-endpoint `getUser` API used throughout the docs.
pub fn make_get_user_api() -> ApiDescriptors {
    ApiDescriptors {
        server: "https://api.example.com".to_string(),
        error_codes: vec![ErrorCodeEntry::new("NOT_FOUND", 404, "missing")],
        endpoints: vec![
            EndpointDescriptor::new(
                "Get User",
                "getUser",
                "/users/:id",
                "GET",
                "application/json",
            )
            .with_fields(vec![FieldDescriptor::new("id", "User ID")]),
        ],
    }
}
