use clap::{Parser, ValueEnum};
use querygen::prelude::*;
use querygen_config_build::DEFAULT_FILE_NAME;
use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};
use thiserror::Error as ThisError;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit code when `--strict` is set and error diagnostics were recorded.
const EXIT_DIAGNOSTICS: u8 = 2;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(
    name = "querygen",
    version,
    about = "Generate GraphQL request definitions from an annotated schema package"
)]
struct Cli {
    /// Schema package as JSON.
    #[arg(long, env = "QUERYGEN_SCHEMA")]
    schema: PathBuf,

    /// Generator config; defaults apply when the file does not exist.
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    config: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Graphql)]
    format: Format,

    /// Write to the configured output directory instead of stdout.
    #[arg(long)]
    emit: bool,

    /// Exit non-zero when any error diagnostic was recorded.
    #[arg(long)]
    strict: bool,
}

///
/// Format
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum Format {
    Graphql,
    Json,
}

impl Format {
    const fn extension(self) -> &'static str {
        match self {
            Self::Graphql => "graphql",
            Self::Json => "json",
        }
    }
}

///
/// CliError
///

#[derive(Debug, ThisError)]
enum CliError {
    #[error(transparent)]
    Querygen(#[from] querygen::Error),

    #[error(transparent)]
    Config(#[from] querygen::config::ConfigError),

    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot write '{path}': {source}")]
    Write { path: String, source: io::Error },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("querygen=info")),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("querygen: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let config = Config::load_or_default(&cli.config)?;
    let pkg = querygen::load_schema(&cli.schema)?;
    let generation = querygen::build::generate(&pkg, &config).map_err(querygen::Error::from)?;

    let text = match cli.format {
        Format::Graphql => render_documents(&generation),
        Format::Json => serde_json::to_string_pretty(&generation)?,
    };

    if cli.emit {
        let path = output_path(&config, pkg.name(), cli.format);
        write_output(&path, &text)?;
        info!(path = %path.display(), "written");
    } else {
        println!("{text}");
    }

    if cli.strict && generation.has_errors() {
        return Ok(ExitCode::from(EXIT_DIAGNOSTICS));
    }

    Ok(ExitCode::SUCCESS)
}

// one document per operation, headed by the entity it belongs to
fn render_documents(generation: &Generation) -> String {
    generation
        .operations
        .iter()
        .map(|op| format!("# {}\n{}\n", op.entity, op.document()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn output_path(config: &Config, package: &str, format: Format) -> PathBuf {
    let mut dir = PathBuf::from(&config.output.path);
    if config.output.use_namespace {
        dir.push(package);
    }

    dir.join(format!("{package}.{}", format.extension()))
}

fn write_output(path: &Path, text: &str) -> Result<(), CliError> {
    let write_err = |source| CliError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(write_err)?;
    }
    fs::write(path, text).map_err(write_err)
}

///
/// TESTS
///
