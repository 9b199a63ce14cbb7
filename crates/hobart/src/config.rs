//! Caller-supplied configuration: watchlists and portfolio holdings.
//!
//! Symbol lists and holdings are never baked into the binary; they arrive as
//! command-line arguments or JSON files with these shapes:
//!
//! ```json
//! { "symbols": ["ACN", "FDX", "NKE", "JPM"] }
//! ```
//!
//! ```json
//! { "holdings": [{ "symbol": "AAPL", "shares": 10, "purchase_price": 150.0 }] }
//! ```

use hobart_metrics::Holding;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error reading {path}: {source}")]
    Io {
        /// Path that failed to load.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// JSON parsing error.
    #[error("Invalid configuration in {path}: {source}")]
    Parse {
        /// Path that failed to parse.
        path: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The file parsed but contained nothing to work with.
    #[error("Configuration in {0} is empty")]
    Empty(String),
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// An ordered list of ticker symbols to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist {
    /// Symbols in fetch order.
    pub symbols: Vec<String>,
}

impl Watchlist {
    /// Create a watchlist from symbols.
    pub fn new(symbols: Vec<String>) -> Self {
        Self { symbols }
    }

    /// Load a watchlist from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let watchlist: Self = read_json(path)?;
        if watchlist.symbols.is_empty() {
            return Err(ConfigError::Empty(path.display().to_string()));
        }
        Ok(watchlist)
    }

    /// Whether the watchlist contains a symbol.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the watchlist is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// The holdings a portfolio run values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Positions to value, in presentation-input order.
    pub holdings: Vec<Holding>,
}

impl PortfolioConfig {
    /// Load holdings from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = read_json(path)?;
        if config.holdings.is_empty() {
            return Err(ConfigError::Empty(path.display().to_string()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_watchlist_roundtrip() {
        let path = write_temp(
            "hobart_watchlist_test.json",
            r#"{ "symbols": ["ACN", "FDX", "NKE", "JPM"] }"#,
        );
        let watchlist = Watchlist::from_path(&path).unwrap();

        assert_eq!(watchlist.len(), 4);
        assert!(watchlist.contains("FDX"));
        assert!(!watchlist.contains("AAPL"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_portfolio_config() {
        let path = write_temp(
            "hobart_portfolio_test.json",
            r#"{ "holdings": [
                { "symbol": "ITGR", "shares": 20, "purchase_price": 68.85 },
                { "symbol": "ZIM", "shares": 15, "purchase_price": 17.63 }
            ] }"#,
        );
        let config = PortfolioConfig::from_path(&path).unwrap();

        assert_eq!(config.holdings.len(), 2);
        assert_eq!(config.holdings[0].symbol, "ITGR");
        assert_eq!(config.holdings[1].purchase_price, 17.63);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_empty_and_invalid_files() {
        let empty = write_temp("hobart_empty_test.json", r#"{ "symbols": [] }"#);
        assert!(matches!(
            Watchlist::from_path(&empty),
            Err(ConfigError::Empty(_))
        ));
        std::fs::remove_file(empty).ok();

        let bad = write_temp("hobart_bad_test.json", "not json");
        assert!(matches!(
            Watchlist::from_path(&bad),
            Err(ConfigError::Parse { .. })
        ));
        std::fs::remove_file(bad).ok();

        let missing = std::path::Path::new("/definitely/not/here.json");
        assert!(matches!(
            PortfolioConfig::from_path(missing),
            Err(ConfigError::Io { .. })
        ));
    }
}
