pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod log;
pub mod models;
pub mod report;
pub mod services;

pub use error::{FetchErrorKind, QuoteFetchError};
pub use models::{CurrencyPair, QuoteSnapshot};
pub use services::{AwesomeQuoteService, QuoteSource};
