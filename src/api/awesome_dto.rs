use derive_getters::Getters;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{QuoteFetchError, Result},
    models::CurrencyPair,
};

/// Body of `GET /json/last/{pairs}`, keyed by pair.
#[derive(Debug, Deserialize, Getters)]
pub struct LastQuotesDto {
    #[serde(rename = "USDBRL")]
    usd_brl: Option<PairQuoteDto>,
    #[serde(rename = "EURBRL")]
    eur_brl: Option<PairQuoteDto>,
    #[serde(rename = "BTCBRL")]
    btc_brl: Option<PairQuoteDto>,
}

impl LastQuotesDto {
    pub fn pair(&self, pair: CurrencyPair) -> Result<&PairQuoteDto> {
        let quote = match pair {
            CurrencyPair::Dollar => self.usd_brl.as_ref(),
            CurrencyPair::Euro => self.eur_brl.as_ref(),
            CurrencyPair::Bitcoin => self.btc_brl.as_ref(),
        };
        quote.ok_or(QuoteFetchError::MissingPair(pair.response_key()))
    }
}

#[derive(Debug, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PairQuoteDto {
    code: Option<String>,
    codein: Option<String>,
    name: Option<String>,
    bid: Option<Value>,
    ask: Option<Value>,
    high: Option<Value>,
    low: Option<Value>,
    #[serde(rename = "create_date")]
    create_date: Option<String>,
}

impl PairQuoteDto {
    /// Parses `bid` for `pair`. The API sends numbers as strings; bare JSON
    /// numbers are accepted too.
    pub fn bid_value(&self, pair: CurrencyPair) -> Result<f64> {
        let key = pair.response_key();
        let raw = self.bid.as_ref().ok_or(QuoteFetchError::MissingBid(key))?;

        let parsed = match raw {
            Value::String(text) => text.trim().parse::<f64>().ok(),
            Value::Number(number) => number.as_f64(),
            _ => None,
        };

        match parsed {
            Some(value) if value.is_finite() && value >= 0.0 => Ok(value),
            _ => Err(QuoteFetchError::InvalidBid {
                pair: key,
                value: raw.to_string(),
            }),
        }
    }
}
