pub mod currency_pair;
pub mod quote_snapshot;

pub use currency_pair::CurrencyPair;
pub use quote_snapshot::QuoteSnapshot;
