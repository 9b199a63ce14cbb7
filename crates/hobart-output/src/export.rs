//! Export of portfolio reports to CSV and JSON files.

use crate::report::PortfolioReport;
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

/// Default export location: `portfolio_analysis_YYYYMMDD_HHMMSS.<ext>` in
/// the working directory.
pub fn default_export_path(format: ExportFormat) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!(
        "portfolio_analysis_{timestamp}.{}",
        format.extension()
    ))
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn opt_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}

impl Exporter for PortfolioReport {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record([
                    "Ticker",
                    "Shares",
                    "Purchase Price",
                    "Current Price",
                    "Initial Value",
                    "Current Value",
                    "Profit/Loss",
                    "Return %",
                ])?;

                for result in self.results() {
                    wtr.write_record([
                        result.holding.symbol.as_str(),
                        &format!("{:.2}", result.holding.shares),
                        &format!("{:.2}", result.holding.purchase_price),
                        &opt_cell(result.current_price),
                        &format!("{:.2}", result.initial_value),
                        &opt_cell(result.current_value),
                        &opt_cell(result.profit_loss),
                        &opt_cell(result.return_percent),
                    ])?;
                }

                let summary = self.summary();
                wtr.write_record([
                    "TOTAL",
                    "",
                    "",
                    "",
                    &format!("{:.2}", summary.total_initial),
                    &format!("{:.2}", summary.total_current),
                    &format!("{:.2}", summary.total_profit_loss),
                    &format!("{:.2}", summary.total_return_percent),
                ])?;

                let data =
                    String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?).unwrap();
                Ok(data)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobart_metrics::{Holding, evaluate};

    fn report() -> PortfolioReport {
        PortfolioReport::new(vec![
            evaluate(&Holding::new("AAPL", 10.0, 150.0), Some(180.0)),
            evaluate(&Holding::new("ZIM", 15.0, 17.63), None),
        ])
    }

    #[test]
    fn test_csv_export() {
        let csv = report().export_to_string(ExportFormat::Csv).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Ticker,Shares,Purchase Price,Current Price,Initial Value,Current Value,Profit/Loss,Return %"
        );
        assert_eq!(
            lines.next().unwrap(),
            "AAPL,10.00,150.00,180.00,1500.00,1800.00,300.00,20.00"
        );
        assert_eq!(
            lines.next().unwrap(),
            "ZIM,15.00,17.63,N/A,264.45,N/A,N/A,N/A"
        );
        assert!(lines.next().unwrap().starts_with("TOTAL,"));
    }

    #[test]
    fn test_json_export() {
        let json = report().export_to_string(ExportFormat::Json).unwrap();
        assert!(json.contains("\"AAPL\""));
        assert!(json.contains("\"total_initial\""));

        let pretty = report()
            .export_to_string(ExportFormat::PrettyJson)
            .unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!(matches!(
            "xlsx".parse::<ExportFormat>(),
            Err(ExportError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_default_path_shape() {
        let path = default_export_path(ExportFormat::Csv);
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("portfolio_analysis_"));
        assert!(name.ends_with(".csv"));
        // portfolio_analysis_ + YYYYMMDD_HHMMSS + .csv
        assert_eq!(name.len(), "portfolio_analysis_".len() + 15 + 4);
    }
}
