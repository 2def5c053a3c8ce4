//! Generation of the module-level export.

use clientele_define::EndpointDescriptor;

use super::error_codes::ERROR_CODE_CONST;
use super::literal::INDENT;
use super::options::ModuleFormat;

/// Generates the single export listing `ERROR_CODE` and every callable.
///
/// ## Examples
///
/// ```
/// use clientele_define::EndpointDescriptor;
/// use clientele_gen::codegen::{ModuleFormat, generate_exports};
///
/// let endpoints = vec![EndpointDescriptor::new("Ping", "ping", "/ping", "GET", "text/plain")];
/// assert_eq!(
///     generate_exports(&endpoints, ModuleFormat::CommonJs),
///     "module.exports = {\n  ERROR_CODE: ERROR_CODE,\n  ping: ping\n}\n"
/// );
/// ```
pub fn generate_exports(endpoints: &[EndpointDescriptor], format: ModuleFormat) -> String {
    let names: Vec<&str> = std::iter::once(ERROR_CODE_CONST)
        .chain(endpoints.iter().map(|ep| ep.identifier.as_str()))
        .collect();
    let entries = names
        .iter()
        .map(|name| format!("{INDENT}{name}: {name}"))
        .collect::<Vec<_>>()
        .join(",\n");

    match format {
        ModuleFormat::CommonJs => format!("module.exports = {{\n{entries}\n}}\n"),
        ModuleFormat::EsModule => format!(
            "export {{ {} }};\nexport default {{\n{entries}\n}};\n",
            names.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(identifier: &str) -> EndpointDescriptor {
        EndpointDescriptor::new(identifier, identifier, "/", "GET", "text/plain")
    }

    #[test]
    fn commonjs_without_endpoints() {
        assert_eq!(
            generate_exports(&[], ModuleFormat::CommonJs),
            "module.exports = {\n  ERROR_CODE: ERROR_CODE\n}\n"
        );
    }

    #[test]
    fn commonjs_lists_endpoints_in_order() {
        let exports = generate_exports(
            &[endpoint("b"), endpoint("a"), endpoint("c")],
            ModuleFormat::CommonJs,
        );
        assert_eq!(
            exports,
            "module.exports = {\n  ERROR_CODE: ERROR_CODE,\n  b: b,\n  a: a,\n  c: c\n}\n"
        );
    }

    #[test]
    fn esm_named_and_default_exports() {
        let exports = generate_exports(&[endpoint("getUser")], ModuleFormat::EsModule);
        assert_eq!(
            exports,
            concat!(
                "export { ERROR_CODE, getUser };\n",
                "export default {\n  ERROR_CODE: ERROR_CODE,\n  getUser: getUser\n};\n",
            )
        );
    }
}
