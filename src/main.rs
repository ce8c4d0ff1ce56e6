use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tls_handshake_inspector::config::{Config, DEFAULT_LOG_FILTER};
use tls_handshake_inspector::services::errors::TlsError;
use tls_handshake_inspector::services::inspector::{InputFormat, inspect_file};
use tls_handshake_inspector::services::printer;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Decode one captured TLS 1.0 - 1.2 handshake record.
#[derive(Parser)]
#[command(name = "tls-handshake-inspector")]
#[command(version, about, long_about = None)]
struct Cli {
    /// File holding exactly one record with one handshake message.
    path: PathBuf,
    /// Print the decoded message as JSON.
    #[arg(long)]
    json: bool,
    /// The file is a hex dump rather than raw bytes.
    #[arg(long)]
    hex: bool,
    /// Refuse files larger than this many bytes.
    #[arg(long, value_name = "BYTES")]
    max_size: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR]: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    init_logging(&config.log_filter);
    debug!(?config, "configuration loaded");

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR]: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, TlsError> {
    let config = Config::from_env()?;
    match cli.max_size {
        Some(max_size) => config.with_max_file_size(max_size),
        None => Ok(config),
    }
}

fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli, config: &Config) -> Result<(), TlsError> {
    let format = if cli.hex {
        InputFormat::Hex
    } else {
        InputFormat::Binary
    };

    let decoded = inspect_file(&cli.path, format, config)?;

    if cli.json {
        println!("{}", printer::render_json(&decoded)?);
    } else {
        print!("{}", printer::render_text(&decoded));
        println!();
        println!("[OK]: Finished parsing of message!");
    }

    Ok(())
}
