//! Lookout CLI, the hook process Cursor spawns once per lifecycle event.
//!
//! `lookout hook` reads one JSON event from stdin, writes one JSON
//! acknowledgment to stdout, then flushes buffered telemetry to Langfuse
//! under a hard deadline and exits. The acknowledgment always comes first:
//! nothing the telemetry path does may delay or alter it.
//!
//! `lookout check` verifies the Langfuse configuration and reachability,
//! for wiring up the hook the first time.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use lookout_core::backend::config::{ENV_PUBLIC_KEY, ENV_SECRET_KEY};
use lookout_core::backend::{HttpTransport, LangfuseConfig};
use lookout_core::context::HookContext;
use lookout_core::flush::EXIT_GRACE;
use lookout_core::harness::response::HookResponse;
use lookout_core::harness::CursorHarness;

#[derive(Parser)]
#[command(
    name = "lookout",
    about = "Projects Cursor agent hook events onto Langfuse traces",
    version
)]
struct Cli {
    /// Log verbosity. Logs go to stderr; stdout is reserved for the
    /// acknowledgment.
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Process one hook event from stdin and acknowledge on stdout
    Hook,

    /// Verify Langfuse configuration and backend reachability
    Check,
}

fn initialize_tracing(log_level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_filter_directive()))
        .with_target(false)
        .with_writer(io::stderr) // Critical: logs to stderr, not stdout
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    match cli.command {
        Command::Hook => hook_command().await,
        Command::Check => check_command().await,
    }
}

async fn hook_command() -> Result<()> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read hook event from stdin")?;

    let event = match CursorHarness::parse_event(&buffer) {
        Ok(event) => event,
        Err(err) => {
            // A broken event must not break the editor: acknowledge and go
            error!("unparseable hook event: {err:#}");
            emit(&HookResponse::proceed())?;
            return Ok(());
        }
    };

    debug!(
        "processing {} event, generation {}",
        event.event_name(),
        short_id(event.generation_id())
    );

    let mut ctx = HookContext::initialize();
    let ack = ctx.handle_event(&event);

    // The acknowledgment reaches Cursor before any network work starts
    emit(&ack)?;

    let outcome = ctx.flush_and_reset().await;
    debug!("flush settled: {outcome:?}");

    // Let in-flight writes drain out of the network stack before exit
    tokio::time::sleep(EXIT_GRACE).await;
    Ok(())
}

async fn check_command() -> Result<()> {
    println!("=== Langfuse Configuration ===");

    let config = match LangfuseConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            println!("❌ {err}");
            println!("   Set {ENV_PUBLIC_KEY} and {ENV_SECRET_KEY} in the hook environment");
            std::process::exit(1);
        }
    };

    println!("✅ Credentials present (public key {})", mask(&config.public_key));
    println!("   Base URL: {}", config.base_url);

    let transport = HttpTransport::new(config)?;
    match transport.health_check().await {
        Ok(body) => println!("✅ Backend reachable: {}", body.trim()),
        Err(err) => {
            println!("❌ Backend unreachable: {err:#}");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Write the acknowledgment to stdout and force it out of the buffer
fn emit(response: &HookResponse) -> Result<()> {
    println!("{}", serde_json::to_string(response)?);
    io::stdout()
        .flush()
        .context("failed to flush acknowledgment to stdout")
}

fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

fn mask(key: &str) -> String {
    let visible: String = key.chars().take(8).collect();
    format!("{visible}…")
}
