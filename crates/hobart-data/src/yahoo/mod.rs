//! Yahoo Finance data providers.

pub mod calendar;
pub mod quotes;

pub use calendar::{EarningsRecord, YahooCalendarProvider};
pub use quotes::YahooQuoteProvider;
