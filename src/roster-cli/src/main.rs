mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use commands::update::UpdateOptions;
use config::Config;

/// Log filter when `RUST_LOG` is not set
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "roster=warn,roster_cli=warn",
        1 => "roster=info,roster_cli=info",
        _ => "roster=debug,roster_cli=debug",
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("unable to init tracing_subscriber: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = Config::load()?;
    let options = UpdateOptions::resolve(&cli, &config);

    let stdout = std::io::stdout();
    commands::update::handle(&options, &mut stdout.lock())?;

    Ok(())
}
