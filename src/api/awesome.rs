use reqwest::Client;
use tracing::instrument;

use super::{awesome_dto::LastQuotesDto, utils::make_request};
use crate::{error::Result, models::CurrencyPair};

pub const BASE_URL: &str = "https://economia.awesomeapi.com.br";

/// Path of the latest-quotes endpoint for `pairs`, e.g.
/// `json/last/USD-BRL,EUR-BRL,BTC-BRL`.
pub fn last_quotes_endpoint(pairs: &[CurrencyPair]) -> String {
    let codes: Vec<&str> = pairs.iter().map(|p| p.code()).collect();
    format!("json/last/{}", codes.join(","))
}

#[instrument(skip(client))]
pub async fn get_last_quotes(
    pairs: &[CurrencyPair],
    client: &Client,
    base_url: &str,
) -> Result<LastQuotesDto> {
    make_request::<LastQuotesDto>(client, base_url, &last_quotes_endpoint(pairs)).await
}
