//! healthfirst CLI entry point.

use chrono::Local;
use clap::Parser;
use healthfirst_cli::cli::Cli;
use healthfirst_cli::commands;
use healthfirst_cli::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "healthfirst=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let outcome = commands::run(&cli, &config, Local::now())?;
    println!("{}", outcome.output);

    if !outcome.success {
        std::process::exit(1);
    }

    Ok(())
}
