use crate::config::{ServerConfig, DEFAULT_IP, DEFAULT_PORT};
use crate::runtime_config::RuntimeConfig;
use crate::server::{HttpServer, StoreService};
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Command-line interface for the doctree store server.
#[derive(Parser)]
#[command(name = "doctree")]
#[command(about = "HTTP-addressable in-memory JSON document store", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the store server
    Serve {
        /// IPv4 address to bind
        #[arg(long, default_value = DEFAULT_IP)]
        ip: String,

        /// TCP port to listen on
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// JSON file holding the initial document (must be an object)
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

/// Execute the CLI command provided by the user.
///
/// # Errors
///
/// Returns an error if the seed file cannot be read or parsed, or the
/// server fails to bind.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Serve { ip, port, seed } => serve(ip, *port, seed.as_deref()),
    }
}

fn serve(ip: &str, port: u16, seed: Option<&Path>) -> anyhow::Result<()> {
    let config = ServerConfig::new(ip, port);
    let runtime = RuntimeConfig::from_env();
    may::config().set_stack_size(runtime.stack_size);

    let document = match seed {
        Some(path) => load_seed(path)?,
        None => Value::Object(serde_json::Map::new()),
    };

    let addr = config.bind_addr();
    let handle = HttpServer(StoreService::with_seed(document))
        .start(&*addr)
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %addr, "doctree listening");
    handle
        .join()
        .map_err(|e| anyhow::anyhow!("server failed: {e:?}"))
}

/// Load the initial document from a JSON file.
///
/// Unreadable or unparseable files abort startup; a parseable non-mapping
/// value is discarded for an empty mapping, matching the store's
/// constructor contract.
fn load_seed(path: &Path) -> anyhow::Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("seed file {} is not valid JSON", path.display()))?;
    if value.is_object() {
        Ok(value)
    } else {
        warn!(path = %path.display(), "seed is not a JSON object, starting empty");
        Ok(Value::Object(serde_json::Map::new()))
    }
}
