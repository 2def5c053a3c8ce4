//! Module prologue: request import and server binding.

use super::literal::js_string;
use super::options::{GeneratorOptions, ModuleFormat};

/// Generates the module prologue.
///
/// Binds `request` to the external request primitive and `server` to the
/// base URL every generated callable sends to.
///
/// ## Examples
///
/// ```
/// use clientele_gen::codegen::{GeneratorOptions, generate_header};
///
/// let header = generate_header("https://api.example.com", &GeneratorOptions::default());
/// assert!(header.contains("const request = require('./request');"));
/// assert!(header.contains("const server = 'https://api.example.com';"));
/// ```
pub fn generate_header(server: &str, options: &GeneratorOptions) -> String {
    let import = js_string(&options.request_import);
    let server = js_string(server);

    match options.module_format {
        ModuleFormat::CommonJs => format!(
            "\"use strict\";\nconst request = require({import});\nconst server = {server};\n"
        ),
        ModuleFormat::EsModule => {
            format!("import request from {import};\nconst server = {server};\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commonjs_header() {
        let header = generate_header("https://api.example.com", &GeneratorOptions::default());
        assert_eq!(
            header,
            concat!(
                "\"use strict\";\n",
                "const request = require('./request');\n",
                "const server = 'https://api.example.com';\n",
            )
        );
    }

    #[test]
    fn esm_header_uses_custom_import() {
        let options = GeneratorOptions {
            module_format: ModuleFormat::EsModule,
            request_import: "@app/http".to_string(),
        };
        let header = generate_header("/", &options);
        assert_eq!(
            header,
            "import request from '@app/http';\nconst server = '/';\n"
        );
    }

    #[test]
    fn server_is_escaped() {
        let header = generate_header("https://x.test/'", &GeneratorOptions::default());
        assert!(header.contains(r"const server = 'https://x.test/\'';"));
    }
}
