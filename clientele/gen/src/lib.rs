//! Clientele code generator library.
//!
//! This crate generates JavaScript API client modules from descriptors
//! created with `clientele-define`. A generated module contains:
//!
//! - A `server` binding holding the API's base URL
//! - An `ERROR_CODE` constant mapping error tags to numeric codes
//! - One callable per endpoint, forwarding its eligible fields to an external
//!   `request` primitive
//! - A single module-level export of all of the above
//!
//! ## Modules
//!
//! - [`codegen`] - Code generation for individual sections of the module
//! - [`output`] - Final assembly and file writing
//! - [`manifest`] - JSON/TOML manifest loading and resolution
//! - [`inference`] - Identifier, method, and content-type inference
//! - [`validation`] - Descriptor checks run before generation
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use clientele_gen::codegen::GeneratorOptions;
//! use clientele_gen::manifest::Manifest;
//! use clientele_gen::output::generate_and_write;
//!
//! let manifest = Manifest::from_path(Path::new("api.toml")).unwrap();
//! let api = manifest.resolve(None).unwrap();
//!
//! // dry_run=false writes to disk
//! let code = generate_and_write(&api, &GeneratorOptions::default(), Path::new("api.js"), false)
//!     .unwrap();
//! println!("{}", code);
//! ```
//!
//! ## Generated Code Structure
//!
//! For an endpoint `getUser` with one field `id`:
//!
//! ```text
//! const ERROR_CODE = {
//!   NOT_FOUND: 404 // missing
//! }
//!
//! // Get User
//! const getUser = function({
//!   id // User ID
//! } = {}) {
//!   return request({ server: server, path: '/users/:id', method: 'GET', ... })
//! }
//!
//! module.exports = {
//!   ERROR_CODE: ERROR_CODE,
//!   getUser: getUser
//! }
//! ```

pub mod codegen;
pub mod errors;
pub mod inference;
pub mod manifest;
pub mod output;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;

pub use errors::GeneratorError;
pub use output::{generate, generate_with_options};
