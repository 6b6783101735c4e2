use anyhow::Result;
use clap::Parser;
use cotacoes_tui::{
    config::{AppConfig, QuoteArgs},
    log::{LogTarget, init_logging},
    report::run_report,
};

/// Print the current USD, EUR and BTC quotes in BRL and exit
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    quote: QuoteArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, LogTarget::Stderr)?;

    let config = AppConfig::load()?.with_args(&cli.quote)?;
    let service = config.quote_service()?;

    let mut stdout = std::io::stdout().lock();
    run_report(&service, &mut stdout).await
}
