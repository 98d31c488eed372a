//! wasm-sdk - generate a Go/WebAssembly client SDK from an OpenAPI document.
//!
//! With no arguments it reads `openapi.yml` and writes `sdk.go` in the
//! working directory; `wasm-sdk.toml` and the flags below override that.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use wasm_sdk_core::{GenerateError, Generator, GeneratorConfig};

mod common;
mod logging;

use common::{format_elapsed_ms, spinner};

#[derive(Parser, Debug)]
#[command(
    name = "wasm-sdk",
    version,
    about = "Generate a Go/WebAssembly client SDK from an OpenAPI document"
)]
struct Cli {
    /// Config file (defaults to ./wasm-sdk.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Specification document to read
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Go file to write
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// API host baked into the generated request calls
    #[arg(long, value_name = "URL")]
    host: Option<String>,

    /// Doc comment wrap width
    #[arg(long, value_name = "COLUMNS")]
    line_length: Option<usize>,

    /// Package clause of the generated file
    #[arg(long = "package", value_name = "NAME")]
    package_name: Option<String>,

    /// Print the generated source to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Overlay the flags that were given on top of `config`.
    fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(host) = self.host {
            config.api_host = host;
        }
        if let Some(line_length) = self.line_length {
            config.line_length = line_length;
        }
        if let Some(package_name) = self.package_name {
            config.package_name = package_name;
        }
        config
    }
}

fn main() -> ExitCode {
    logging::init_tracing();

    let cli = Cli::parse();
    let dry_run = cli.dry_run;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(dry_run, &format!("❌ {err}"));
            ExitCode::FAILURE
        }
    }
}

/// Progress and errors go to stdout, except in dry-run mode where stdout
/// holds the generated source.
fn report(dry_run: bool, line: &str) {
    if dry_run {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

fn run(cli: Cli) -> Result<(), GenerateError> {
    let start_time = Instant::now();
    let dry_run = cli.dry_run;

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let base = GeneratorConfig::discover(cli.config.as_deref(), &cwd)?;
    let generator = Generator::new(cli.apply(base));

    let root = generator.load()?;
    if !dry_run {
        println!("Loaded document: {}", generator.config().input.display());
    }

    let sp = spinner("Generating SDK...");
    let rendered = generator.render(&root);
    sp.finish_and_clear();

    let skipped = rendered.spec.diagnostics.len();
    if skipped > 0 {
        report(
            dry_run,
            &format!("⚠️  Skipped {skipped} operation(s) with missing fields"),
        );
    }

    if dry_run {
        print!("{}", rendered.source);
        return Ok(());
    }

    let report = generator.write(&rendered)?;
    println!(
        "Created file [{}] - {} bytes",
        report.output.display(),
        report.bytes
    );
    println!(
        "✅ Generated {} function(s) in {}",
        report.endpoints,
        format_elapsed_ms(start_time)
    );
    Ok(())
}
