use anyhow::Result;
use tracing_subscriber::EnvFilter;

use cargo_ghrelease::cli::{self, Command};
use cargo_ghrelease::publisher::ReleasePublisher;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Handle both cargo subcommand and direct invocation
    let cli = cli::try_parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit());

    if cli.verbose {
        tracing::info!("Running cargo-ghrelease with verbose output");
    }

    let command = cli.command.clone();
    let publisher = ReleasePublisher::new(cli.into())?;

    match command {
        Some(Command::Check { json }) => publisher.check(json)?,
        None => publisher.run().await?,
    }

    Ok(())
}
