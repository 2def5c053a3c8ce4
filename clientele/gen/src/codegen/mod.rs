//! Code generation modules for clientele.
//!
//! This module contains generators that produce JavaScript source from
//! endpoint and error-code descriptors. Each submodule emits one section of
//! the generated client module.
//!
//! ## Submodules
//!
//! - [`header`] - Request import and `server` binding
//! - [`error_codes`] - The exported `ERROR_CODE` mapping
//! - [`endpoint`] - One callable per endpoint
//! - [`exports`] - The module-level export
//! - [`literal`] - String-literal escaping and comment folding
//! - [`options`] - Module format and request import configuration
//!
//! ## Code Generation Flow
//!
//! 1. The prologue is generated via [`generate_header`]
//! 2. The error table is generated via [`generate_error_code_table`]
//! 3. Each endpoint gets a callable via [`generate_endpoint`]
//! 4. The export is generated via [`generate_exports`]
//!
//! Every generator returns a `String` ending in a newline; sections are joined
//! with a blank line by [`crate::output::generate_with_options`]. No generator
//! reads anything but its arguments, which keeps the output deterministic.

pub mod endpoint;
pub mod error_codes;
pub mod exports;
pub mod header;
pub mod literal;
pub mod options;

pub use endpoint::generate_endpoint;
pub use error_codes::{ERROR_CODE_CONST, generate_error_code_table};
pub use exports::generate_exports;
pub use header::generate_header;
pub use options::{DEFAULT_REQUEST_IMPORT, GeneratorOptions, ModuleFormat};
