//! HTLC wallet CLI binary

use clap::Parser;
use htlc_wallet::cli::{Cli, WalletApp};
use htlc_wallet::WalletConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            WalletConfig::from_file(path)?
        }
        None => WalletConfig::default(),
    };
    if let Some(core_asset) = cli.core_asset {
        config.core_asset_id = core_asset;
    }
    if cli.no_broadcast {
        config.broadcast = false;
    }

    let app = WalletApp::new(&config);
    let report = app.run(cli.command).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
