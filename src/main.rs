use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cotacoes_tui::{
    app::App,
    config::{AppConfig, QuoteArgs},
    log::{LogTarget, init_logging},
};

/// Live USD, EUR and BTC quotes in BRL, refreshed on a timer
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging (requires --log-file)
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seconds between automatic refreshes
    #[arg(long)]
    refresh_secs: Option<u64>,

    #[command(flatten)]
    quote: QuoteArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let target = match &cli.log_file {
        Some(path) => LogTarget::File(path.as_path()),
        None => LogTarget::Off,
    };
    init_logging(cli.verbose, target)?;

    let config = AppConfig::load()?
        .with_args(&cli.quote)?
        .with_refresh_secs(cli.refresh_secs)?;
    let service = config.quote_service()?;

    let mut app = App::new(service, *config.refresh_interval());
    let result = app.run().await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
