use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use super::QuoteSource;
use crate::{
    api::awesome::{self, BASE_URL},
    error::Result,
    models::{CurrencyPair, QuoteSnapshot},
};

/// Fetches USD, EUR and BTC quotes in BRL from the AwesomeAPI.
#[derive(Clone, Debug)]
pub struct AwesomeQuoteService {
    client: Client,
    base_url: String,
}

impl Default for AwesomeQuoteService {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}

impl AwesomeQuoteService {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Builds a service whose requests give up after `timeout`. `None` waits
    /// indefinitely.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl QuoteSource for AwesomeQuoteService {
    #[instrument(name = "AwesomeQuoteFetch", skip(self), fields(base_url = %self.base_url))]
    async fn fetch_snapshot(&self) -> Result<QuoteSnapshot> {
        let pairs: Vec<CurrencyPair> = CurrencyPair::iter().collect();
        let quotes = awesome::get_last_quotes(&pairs, &self.client, &self.base_url).await?;

        let dollar = quotes.pair(CurrencyPair::Dollar)?;
        let euro = quotes.pair(CurrencyPair::Euro)?;
        let bitcoin = quotes.pair(CurrencyPair::Bitcoin)?;
        debug!(
            usd_at = ?dollar.create_date(),
            eur_at = ?euro.create_date(),
            btc_at = ?bitcoin.create_date(),
            "Received quotes"
        );

        Ok(QuoteSnapshot::new(
            dollar.bid_value(CurrencyPair::Dollar)?,
            euro.bid_value(CurrencyPair::Euro)?,
            bitcoin.bid_value(CurrencyPair::Bitcoin)?,
        ))
    }
}
