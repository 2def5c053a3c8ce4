//! Clientele Code Generator
//!
//! Generates a JavaScript API client module from a descriptor manifest.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use clientele_gen::codegen::{DEFAULT_REQUEST_IMPORT, GeneratorOptions, ModuleFormat};
use clientele_gen::errors::GeneratorError;
use clientele_gen::manifest::Manifest;
use clientele_gen::output::generate_and_write;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Command-line options for `clientele-gen`.
#[derive(Parser, Debug)]
#[command(name = "clientele-gen")]
#[command(
    author,
    version,
    about = "Clientele code generator - turns endpoint manifests into JavaScript API clients",
    long_about = None
)]
struct Cli {
    /// Descriptor manifest (.json or .toml)
    #[arg(short, long)]
    manifest: PathBuf,

    /// Output file for the generated module
    #[arg(short, long, default_value = "api.js")]
    output: PathBuf,

    /// Base URL baked into the client, overriding the manifest's `server`
    #[arg(long)]
    server: Option<String>,

    /// Module format of the generated client (commonjs or esm)
    #[arg(
        long,
        default_value = "commonjs",
        value_parser = ModuleFormat::from_str
    )]
    format: ModuleFormat,

    /// Module path the request primitive is imported from
    #[arg(long, default_value = DEFAULT_REQUEST_IMPORT)]
    request_import: String,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    tracing::info!(
        manifest = %cli.manifest.display(),
        dry_run = cli.dry_run,
        "Starting generation"
    );

    let manifest = Manifest::from_path(&cli.manifest)?;
    let api = manifest.resolve(cli.server.as_deref())?;

    for endpoint in &api.endpoints {
        tracing::debug!(
            identifier = %endpoint.identifier,
            method = %endpoint.http_method,
            url = %endpoint.url,
            "Endpoint"
        );
    }

    let options = GeneratorOptions {
        module_format: cli.format,
        request_import: cli.request_import,
    };
    generate_and_write(&api, &options, &cli.output, cli.dry_run)?;

    if !cli.dry_run {
        eprintln!(
            "{} {} endpoints and {} error codes to {}",
            "Generated".green().bold(),
            api.endpoints.len(),
            api.error_codes.len(),
            cli.output.display()
        );
    }

    Ok(())
}

/// Sends diagnostics to stderr, leaving stdout for dry-run output.
///
/// `RUST_LOG` takes precedence over the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}
