use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Args;
use derive_getters::Getters;
use tracing::debug;

use crate::{api::awesome::BASE_URL, app::app::REFRESH_INTERVAL, services::AwesomeQuoteService};

pub const BASE_URL_VAR: &str = "QUOTES_BASE_URL";
pub const REFRESH_SECS_VAR: &str = "QUOTES_REFRESH_SECS";
pub const TIMEOUT_SECS_VAR: &str = "QUOTES_TIMEOUT_SECS";

/// Command line flags shared by both binaries. They take precedence over the
/// environment.
#[derive(Args, Debug, Default)]
pub struct QuoteArgs {
    /// Base URL of the quotes API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Clone, Debug, Getters)]
pub struct AppConfig {
    base_url: String,
    refresh_interval: Duration,
    request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            refresh_interval: REFRESH_INTERVAL,
            request_timeout: None,
        }
    }
}

impl AppConfig {
    /// Reads settings from the process environment, after loading `.env` if
    /// one exists.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        debug!(?config, "Loaded config");
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup(REFRESH_SECS_VAR) {
            config.refresh_interval = parse_secs(&raw, REFRESH_SECS_VAR)?;
        }
        if let Some(raw) = lookup(TIMEOUT_SECS_VAR) {
            config.request_timeout = Some(parse_secs(&raw, TIMEOUT_SECS_VAR)?);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_args(mut self, args: &QuoteArgs) -> Result<Self> {
        if let Some(base_url) = &args.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(secs) = args.timeout_secs {
            self.request_timeout = Some(Duration::from_secs(secs));
        }
        self.validate()?;
        Ok(self)
    }

    pub fn with_refresh_secs(mut self, secs: Option<u64>) -> Result<Self> {
        if let Some(secs) = secs {
            self.refresh_interval = Duration::from_secs(secs);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn quote_service(&self) -> Result<AwesomeQuoteService> {
        AwesomeQuoteService::with_timeout(&self.base_url, self.request_timeout)
            .context("Failed to build HTTP client")
    }

    fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            bail!("Base URL must start with http:// or https://: {}", self.base_url);
        }
        if self.refresh_interval.is_zero() {
            bail!("Refresh interval must be at least one second");
        }
        if self.request_timeout.is_some_and(|t| t.is_zero()) {
            bail!("Request timeout must be at least one second");
        }
        Ok(())
    }
}

fn parse_secs(raw: &str, name: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {} '{}'", name, raw))?;
    Ok(Duration::from_secs(secs))
}
