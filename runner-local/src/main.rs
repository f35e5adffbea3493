use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use greeting_core::config::load_config;
use greeting_core::{Greeter, telemetry};
use serde_json::Value;
use tracing::info;

/// Invokes the greeting handler outside of AWS Lambda.
///
/// The event is taken from `--event`, `--event-file`, or stdin (in that
/// order) and the response document is printed on stdout.
#[derive(Parser, Debug)]
#[command(name = "greet-local", version, about)]
struct Cli {
    /// Inline event JSON, e.g. '{"name":"World"}'
    #[arg(long, conflicts_with = "event_file")]
    event: Option<String>,

    /// Path to a file containing the event JSON
    #[arg(long)]
    event_file: Option<PathBuf>,

    /// Optional YAML config file; GREETING_CONFIG is used otherwise
    #[arg(long)]
    config: Option<String>,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,
}

fn read_event(cli: &Cli, stdin: impl Read) -> Result<Value> {
    let raw = match (&cli.event, &cli.event_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            let mut stdin = stdin;
            stdin
                .read_to_string(&mut buf)
                .context("Failed to read event from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Event is not valid JSON")
}

fn run(cli: &Cli, stdin: impl Read) -> Result<String> {
    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let greeter = Greeter::new(config);

    let payload = read_event(cli, stdin)?;
    let response = greeter.handle(payload).context("Invocation failed")?;
    info!(status_code = response.status_code, "invocation completed");

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    Ok(rendered)
}

fn main() -> Result<()> {
    telemetry::init_tracing();
    let cli = Cli::parse();
    let output = run(&cli, std::io::stdin().lock())?;
    println!("{}", output);
    Ok(())
}
