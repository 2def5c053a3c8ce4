//! Generator options.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Default module path of the request primitive the generated client calls.
pub const DEFAULT_REQUEST_IMPORT: &str = "./request";

/// Module system of the generated client.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use clientele_gen::codegen::ModuleFormat;
///
/// assert_eq!(ModuleFormat::from_str("esm").unwrap(), ModuleFormat::EsModule);
/// assert_eq!(ModuleFormat::default().to_string(), "commonjs");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum ModuleFormat {
    /// `require(...)` / `module.exports`.
    #[default]
    #[strum(serialize = "commonjs")]
    #[serde(rename = "commonjs")]
    CommonJs,
    /// `import` / `export`.
    #[strum(serialize = "esm")]
    #[serde(rename = "esm")]
    EsModule,
}

/// Options controlling the shape of the generated module.
///
/// Options never affect which callables or error codes are emitted, only the
/// module plumbing around them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Module system of the output.
    pub module_format: ModuleFormat,
    /// Module path the request primitive is imported from.
    pub request_import: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            module_format: ModuleFormat::CommonJs,
            request_import: DEFAULT_REQUEST_IMPORT.to_string(),
        }
    }
}
