//! Seam between the displays and wherever quotes come from.

use async_trait::async_trait;

use crate::{error::Result, models::QuoteSnapshot};

#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetches one complete snapshot of the three rates.
    async fn fetch_snapshot(&self) -> Result<QuoteSnapshot>;
}
