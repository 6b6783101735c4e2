use derive_getters::Getters;
use derive_new::new;

use super::CurrencyPair;

/// Rates in BRL per unit of foreign asset, all taken from one response.
#[derive(Clone, Copy, Debug, Getters, PartialEq, new)]
pub struct QuoteSnapshot {
    dollar_rate: f64,
    euro_rate: f64,
    bitcoin_rate: f64,
}

impl QuoteSnapshot {
    pub fn rate(&self, pair: CurrencyPair) -> f64 {
        match pair {
            CurrencyPair::Dollar => self.dollar_rate,
            CurrencyPair::Euro => self.euro_rate,
            CurrencyPair::Bitcoin => self.bitcoin_rate,
        }
    }
}
