pub mod awesome_service;
pub mod quote_source;

pub use awesome_service::AwesomeQuoteService;
pub use quote_source::QuoteSource;
