//! go-include CLI
//!
//! # Usage
//!
//! ```bash
//! # Print the generated file
//! go-include main.go
//!
//! # From a go:generate line
//! //go:generate go-include --out main_gen.go $GOFILE
//! ```
//!
//! Exit codes: 0 success, 1 invalid invocation (missing input argument, bad
//! options or config file), 2 transformation failure, 3 output file could not
//! be written.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use go_include::errors::{EXIT_USAGE, EXIT_WRITE};
use go_include::{transform_file, FormatterKind, IncludeError, Options};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "go-include")]
#[command(about = "Generate a Go file with include.String/include.Bytes calls replaced by file contents", long_about = None)]
#[command(version)]
struct Cli {
    /// Go source file containing placeholder calls
    input: PathBuf,

    /// Name of the output file to write to (default: stdout)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Build tag to deactivate in generated source (default: include)
    #[arg(long)]
    buildtag: Option<String>,

    /// Receiver identifier of placeholder calls (default: include)
    #[arg(long)]
    namespace: Option<String>,

    /// Directory used to resolve relative include targets (default: cwd)
    #[arg(short = 'C', long)]
    working_dir: Option<PathBuf>,

    /// Formatter run on the generated source: goimports, gofmt or none
    #[arg(long)]
    formatter: Option<FormatterKind>,

    /// YAML configuration file (version: 1)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags
    fn options(&self) -> Result<Options, IncludeError> {
        let mut options = match &self.config {
            Some(path) => Options::from_yaml(path)?,
            None => Options::default(),
        };
        if let Some(tag) = &self.buildtag {
            options.tag = tag.clone();
        }
        if let Some(namespace) = &self.namespace {
            options.namespace = namespace.clone();
        }
        if let Some(dir) = &self.working_dir {
            options.working_dir = Some(dir.clone());
        }
        if let Some(formatter) = self.formatter {
            options.formatter = formatter;
        }
        Ok(options)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "go_include=debug" } else { "go_include=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let prog = std::env::args()
        .next()
        .unwrap_or_else(|| "go-include".to_string());

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logging(cli.verbose);

    let generated = match cli.options().and_then(|o| transform_file(&cli.input, &o)) {
        Ok(generated) => generated,
        Err(e) => {
            tracing::debug!(kind = e.kind(), code = e.exit_code(), "transformation failed");
            eprintln!("{}: {}", prog, e);
            return ExitCode::from(e.exit_code());
        }
    };

    match &cli.out {
        None => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(&generated).and_then(|_| stdout.flush()) {
                eprintln!("{}: Failed to write output: {}", prog, e);
                return ExitCode::from(EXIT_WRITE);
            }
        }
        Some(path) => {
            if let Err(e) = std::fs::write(path, &generated) {
                eprintln!("{}: Failed to write {}: {}", prog, path.display(), e);
                return ExitCode::from(EXIT_WRITE);
            }
            tracing::info!(out = %path.display(), bytes = generated.len(), "wrote generated file");
        }
    }

    ExitCode::SUCCESS
}
