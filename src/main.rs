use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use hello_relay::cli::{Cli, Command};
use hello_relay::{server, Relay, RelayConfig, ReportFormat};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = RelayConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Ask {
            input,
            output,
            format,
        } => ask(&config, &input, output.as_deref(), format.as_deref()).await,
        Command::Serve { bind, allow_origin } => {
            server::serve(config.with_overrides(bind, allow_origin)).await
        }
        Command::Config => {
            let json =
                serde_json::to_string_pretty(&config).context("failed to encode configuration")?;
            println!("{}", json);
            Ok(())
        }
    }
}

async fn ask(
    config: &RelayConfig,
    input: &str,
    output: Option<&Path>,
    format: Option<&str>,
) -> Result<()> {
    // Resolve the format before running anything
    let target = match output {
        Some(path) => Some((path, ReportFormat::from_path_and_option(path, format)?)),
        None => None,
    };

    let report = Relay::from_config(config).ask(input).await;

    match target {
        Some((path, format)) => {
            format.write_to_file(&report, path)?;
            log::info!("report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
            println!("{}", json);
        }
    }
    Ok(())
}
