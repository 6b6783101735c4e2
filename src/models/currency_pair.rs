use strum_macros::{Display, EnumIter};

/// Currency pairs quoted against the Brazilian Real, in display order.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
pub enum CurrencyPair {
    #[strum(serialize = "USD-BRL")]
    Dollar,
    #[strum(serialize = "EUR-BRL")]
    Euro,
    #[strum(serialize = "BTC-BRL")]
    Bitcoin,
}

impl CurrencyPair {
    /// Code used in the request path, e.g. `USD-BRL`.
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyPair::Dollar => "USD-BRL",
            CurrencyPair::Euro => "EUR-BRL",
            CurrencyPair::Bitcoin => "BTC-BRL",
        }
    }

    /// Key of the pair in the response object, e.g. `USDBRL`.
    pub fn response_key(&self) -> &'static str {
        match self {
            CurrencyPair::Dollar => "USDBRL",
            CurrencyPair::Euro => "EURBRL",
            CurrencyPair::Bitcoin => "BTCBRL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CurrencyPair::Dollar => "Dólar",
            CurrencyPair::Euro => "Euro",
            CurrencyPair::Bitcoin => "Bitcoin",
        }
    }
}
