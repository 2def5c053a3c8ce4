//! Generation tests: descriptors in, module text out.
//!
//! These exercise the public API end to end, from manifests or hand-built
//! descriptors to the emitted JavaScript.

use std::path::{Path, PathBuf};

use clientele_define::{EndpointDescriptor, ErrorCodeEntry, FieldDescriptor, default_error_codes};
use clientele_gen::codegen::{GeneratorOptions, ModuleFormat};
use clientele_gen::manifest::Manifest;
use clientele_gen::output::generate_and_write;
use clientele_gen::{generate, generate_with_options};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Returns the keys of the destructured configuration object of `identifier`.
fn recognized_keys(code: &str, identifier: &str) -> Vec<String> {
    let opening = format!("const {identifier} = function(");
    let start = code
        .find(&opening)
        .unwrap_or_else(|| panic!("no callable named {identifier}"))
        + opening.len();
    let rest = &code[start..];

    if rest.starts_with(") {") {
        return Vec::new();
    }

    let end = rest.find("} = {})").expect("unterminated parameter list");
    rest[..end]
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != "{")
        .map(|line| {
            line.split(|c: char| c == ',' || c == ' ')
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

/// Returns the `ERROR_CODE` entries as `(tag, code)` pairs.
fn error_code_entries(code: &str) -> Vec<(String, i64)> {
    let start = code.find("const ERROR_CODE = {").expect("no ERROR_CODE");
    let block = &code[start..];
    let end = block.find("}\n").expect("unterminated ERROR_CODE");

    block[..end]
        .lines()
        .skip(1)
        .map(|line| {
            let entry = line.split(" //").next().unwrap_or_default();
            let (tag, value) = entry.trim().trim_end_matches(',').split_once(": ").unwrap();
            (tag.to_string(), value.parse().unwrap())
        })
        .collect()
}

fn get_user_endpoint() -> EndpointDescriptor {
    EndpointDescriptor::new(
        "Get User",
        "getUser",
        "/users/:id",
        "GET",
        "application/json",
    )
    .with_fields(vec![FieldDescriptor::new("id", "User ID")])
}

#[test]
fn get_user_scenario() {
    let code = generate(
        "https://api.example.com",
        &[ErrorCodeEntry::new("NOT_FOUND", 404, "missing")],
        &[get_user_endpoint()],
    );

    let expected = "\
\"use strict\";
const request = require('./request');
const server = 'https://api.example.com';

const ERROR_CODE = {
  NOT_FOUND: 404 // missing
}

// Get User
const getUser = function({
  id // User ID
} = {}) {
  return request({
    server: server,
    path: '/users/:id',
    method: 'GET',
    data: {
      id: id
    },
    header: { 'Content-Type': 'application/json' }
  })
}

module.exports = {
  ERROR_CODE: ERROR_CODE,
  getUser: getUser
}
";
    assert_eq!(code, expected);
}

#[test]
fn excluded_field_scenario() {
    let endpoint = EndpointDescriptor::new("List", "list", "/list", "GET", "application/json")
        .with_fields(vec![
            FieldDescriptor::new("page", "Page"),
            FieldDescriptor::new("token", "Token"),
        ])
        .exclude("token");

    let code = generate("/", &[], &[endpoint]);

    assert_eq!(recognized_keys(&code, "list"), vec!["page"]);
    assert!(code.contains("    data: {\n      page: page\n    },\n"));
    assert!(!code.contains("token"));
}

#[test]
fn empty_fields_scenario() {
    let endpoint = EndpointDescriptor::new("Ping", "ping", "/ping", "GET", "text/plain");
    let code = generate("/", &[], &[endpoint]);

    assert!(recognized_keys(&code, "ping").is_empty());
    assert!(code.contains("const ping = function() {\n"));
    assert!(code.contains("    data: {},\n"));
}

#[test]
fn recognized_keys_equal_fields_minus_exclusions() {
    let endpoint = EndpointDescriptor::new("Search", "search", "/search", "GET", "text/plain")
        .with_fields(vec![
            FieldDescriptor::new("session", "Session"),
            FieldDescriptor::new("q", "Query"),
            FieldDescriptor::new("tenant", "Tenant"),
            FieldDescriptor::new("page", "Page"),
            FieldDescriptor::new("size", ""),
        ])
        .exclude("session")
        .exclude("tenant");

    let code = generate("/", &[], &[endpoint.clone()]);
    let expected: Vec<String> = endpoint.eligible_fields().map(|f| f.name.clone()).collect();

    assert_eq!(expected, vec!["q", "page", "size"]);
    assert_eq!(recognized_keys(&code, "search"), expected);
}

#[test]
fn error_code_table_matches_input() {
    let mut codes = default_error_codes();
    codes.push(ErrorCodeEntry::new("ERROR_QUOTA", 4029, "Quota exceeded"));

    let code = generate("/", &codes, &[]);
    let entries = error_code_entries(&code);
    let expected: Vec<(String, i64)> = codes.iter().map(|c| (c.tag.clone(), c.code)).collect();

    assert_eq!(entries, expected);
}

#[test]
fn generation_is_deterministic() {
    let api = Manifest::from_path(&fixture("blog.toml"))
        .unwrap()
        .resolve(None)
        .unwrap();

    let first = generate(&api.server, &api.error_codes, &api.endpoints);
    let second = generate(&api.server, &api.error_codes, &api.endpoints);
    assert_eq!(first, second);

    let options = GeneratorOptions {
        module_format: ModuleFormat::EsModule,
        ..GeneratorOptions::default()
    };
    let first = generate_with_options(&api.server, &api.error_codes, &api.endpoints, &options);
    let second = generate_with_options(&api.server, &api.error_codes, &api.endpoints, &options);
    assert_eq!(first, second);
}

#[test]
fn exclusion_set_order_does_not_matter() {
    let fields = vec![
        FieldDescriptor::new("a", "A"),
        FieldDescriptor::new("b", "B"),
        FieldDescriptor::new("c", "C"),
    ];
    let forward = EndpointDescriptor::new("E", "e", "/e", "GET", "text/plain")
        .with_fields(fields.clone())
        .exclude("a")
        .exclude("c");
    let backward = EndpointDescriptor::new("E", "e", "/e", "GET", "text/plain")
        .with_fields(fields)
        .exclude("c")
        .exclude("a");

    assert_eq!(
        generate("/", &[], &[forward]),
        generate("/", &[], &[backward])
    );
}

#[test]
fn blog_manifest_resolves_and_generates() {
    let api = Manifest::from_path(&fixture("blog.toml"))
        .unwrap()
        .resolve(None)
        .unwrap();
    let code = generate(&api.server, &api.error_codes, &api.endpoints);

    assert_eq!(api.error_codes.len(), 8);
    assert_eq!(recognized_keys(&code, "api_posts"), vec!["page", "size"]);
    assert_eq!(
        recognized_keys(&code, "api_login"),
        vec!["username", "password"]
    );
    assert_eq!(
        recognized_keys(&code, "uploadCover"),
        vec!["post_id", "cover"]
    );
    assert!(recognized_keys(&code, "api_health").is_empty());

    assert!(code.contains(concat!(
        "// Login\n",
        "const api_login = function({\n",
        "  username, // Username\n",
        "  password // Password\n",
        "} = {}) {\n",
        "  return request({\n",
        "    server: server,\n",
        "    path: '/api/login',\n",
        "    method: 'POST',\n",
    )));
    assert!(code.contains("header: { 'Content-Type': 'multipart/form-data' }"));
    assert!(code.contains("  ERROR_NOT_AUTHOR: 1002 // Only the author may edit a post\n}"));
    assert!(code.ends_with(concat!(
        "module.exports = {\n",
        "  ERROR_CODE: ERROR_CODE,\n",
        "  api_posts: api_posts,\n",
        "  api_login: api_login,\n",
        "  uploadCover: uploadCover,\n",
        "  api_health: api_health\n",
        "}\n",
    )));
}

#[test]
fn json_manifest_matches_hand_built_descriptors() {
    let api = Manifest::from_path(&fixture("users.json"))
        .unwrap()
        .resolve(None)
        .unwrap();

    let from_manifest = generate(&api.server, &api.error_codes, &api.endpoints);
    let by_hand = generate(
        "https://api.example.com",
        &[ErrorCodeEntry::new("NOT_FOUND", 404, "missing")],
        &[get_user_endpoint()],
    );

    assert_eq!(from_manifest, by_hand);
}

#[test]
fn regenerating_to_disk_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("client/api.js");
    let api = Manifest::from_path(&fixture("blog.toml"))
        .unwrap()
        .resolve(None)
        .unwrap();
    let options = GeneratorOptions::default();

    generate_and_write(&api, &options, &path, false).unwrap();
    let first = std::fs::read(&path).unwrap();
    generate_and_write(&api, &options, &path, false).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn duplicate_manifest_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("api.js");
    let api = Manifest::from_path(&fixture("duplicate.json"))
        .unwrap()
        .resolve(None)
        .unwrap();

    let err = generate_and_write(&api, &GeneratorOptions::default(), &path, false).unwrap_err();

    assert_eq!(err.to_string(), "Duplicate exported identifier 'same'");
    assert!(!path.exists());
}
