//! ASCII table reports for console output.
//!
//! Column order is part of the user-visible contract: the portfolio table
//! carries Ticker, Shares, Purchase Price, Current Price, Initial Value,
//! Current Value, Profit/Loss, Return % with a trailing TOTAL row, and the
//! performance grid carries Symbol, Current Price, then the windows from 1d
//! through 2y with YTD between 6m and 1y.

use chrono::{DateTime, Utc};
use hobart_data::yahoo::EarningsRecord;
use hobart_metrics::{
    CompoundingPeriod, HoldingResult, InterestSchedule, OptionStrategy, PayoffGrid,
    PerformanceRecord, PortfolioSummary, WindowChange, portfolio::sort_by_profit_loss, summarize,
};
use serde::{Deserialize, Serialize};

fn opt_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}

fn change_cell(change: WindowChange) -> String {
    match change {
        WindowChange::Value(v) => format!("{v:.2}%"),
        WindowChange::Unavailable => "N/A".to_string(),
    }
}

/// Upcoming earnings dates, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsReport {
    records: Vec<EarningsRecord>,
}

impl EarningsReport {
    /// Build a report from fetched records, sorting by earnings date
    /// ascending.
    pub fn new(mut records: Vec<EarningsRecord>) -> Self {
        records.sort_by_key(|r| r.earnings_date);
        Self { records }
    }

    /// The sorted records.
    pub fn records(&self) -> &[EarningsRecord] {
        &self.records
    }

    /// Whether any symbol yielded a date.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the calendar as a two-column table.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str("\nUpcoming Earnings\n");
        output.push_str(&"=".repeat(24));
        output.push('\n');
        output.push_str(&format!("{:<8} {:>14}\n", "Symbol", "Earnings Date"));
        output.push_str(&"-".repeat(24));
        output.push('\n');

        for record in &self.records {
            output.push_str(&format!(
                "{:<8} {:>14}\n",
                record.symbol,
                record.earnings_date.format("%d-%m-%Y")
            ));
        }

        output.push_str(&"=".repeat(24));
        output.push('\n');
        output
    }
}

/// Per-symbol performance across the standard windows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    records: Vec<PerformanceRecord>,
}

impl PerformanceReport {
    /// Build a report; rows keep the order the records were fetched in.
    pub const fn new(records: Vec<PerformanceRecord>) -> Self {
        Self { records }
    }

    /// The underlying records.
    pub fn records(&self) -> &[PerformanceRecord] {
        &self.records
    }

    /// Whether any symbol was measured.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the performance grid.
    pub fn to_ascii_table(&self) -> String {
        let Some(first) = self.records.first() else {
            return "No performance data.\n".to_string();
        };

        let width = 8 + 15 + first.changes.len() * 10 + 2;
        let mut output = String::new();

        output.push_str("\nStock Performance\n");
        output.push_str(&"=".repeat(width));
        output.push('\n');

        output.push_str(&format!("{:<8} {:>14}", "Symbol", "Current Price"));
        for (label, _) in &first.changes {
            output.push_str(&format!(" {label:>9}"));
        }
        output.push('\n');
        output.push_str(&"-".repeat(width));
        output.push('\n');

        for record in &self.records {
            output.push_str(&format!(
                "{:<8} {:>14.2}",
                record.symbol, record.current_price
            ));
            for (_, change) in &record.changes {
                output.push_str(&format!(" {:>9}", change_cell(*change)));
            }
            output.push('\n');
        }

        output.push_str(&"=".repeat(width));
        output.push('\n');
        output
    }
}

/// Valued holdings sorted by profit/loss, with aggregate totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    /// Report generation timestamp.
    pub generated_at: DateTime<Utc>,
    results: Vec<HoldingResult>,
    summary: PortfolioSummary,
}

impl PortfolioReport {
    /// Build a report: sorts results by profit/loss descending (absent
    /// values last) and computes the TOTAL row.
    pub fn new(mut results: Vec<HoldingResult>) -> Self {
        sort_by_profit_loss(&mut results);
        let summary = summarize(&results);
        Self {
            generated_at: Utc::now(),
            results,
            summary,
        }
    }

    /// The sorted holding results.
    pub fn results(&self) -> &[HoldingResult] {
        &self.results
    }

    /// The aggregate totals.
    pub const fn summary(&self) -> &PortfolioSummary {
        &self.summary
    }

    /// Render the portfolio table with its trailing TOTAL row.
    pub fn to_ascii_table(&self) -> String {
        const WIDTH: usize = 106;
        let mut output = String::new();

        output.push_str("\nPortfolio Analysis\n");
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<8} {:>10} {:>15} {:>14} {:>14} {:>14} {:>13} {:>10}\n",
            "Ticker",
            "Shares",
            "Purchase Price",
            "Current Price",
            "Initial Value",
            "Current Value",
            "Profit/Loss",
            "Return %"
        ));
        output.push_str(&"-".repeat(WIDTH));
        output.push('\n');

        for result in &self.results {
            output.push_str(&format!(
                "{:<8} {:>10.2} {:>15.2} {:>14} {:>14.2} {:>14} {:>13} {:>10}\n",
                result.holding.symbol,
                result.holding.shares,
                result.holding.purchase_price,
                opt_cell(result.current_price),
                result.initial_value,
                opt_cell(result.current_value),
                opt_cell(result.profit_loss),
                opt_cell(result.return_percent),
            ));
        }

        output.push_str(&"-".repeat(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<8} {:>10} {:>15} {:>14} {:>14.2} {:>14.2} {:>13.2} {:>10.2}\n",
            "TOTAL",
            "",
            "",
            "",
            self.summary.total_initial,
            self.summary.total_current,
            self.summary.total_profit_loss,
            self.summary.total_return_percent,
        ));
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');
        output
    }
}

/// The 4-row simple-interest schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestReport {
    schedule: InterestSchedule,
}

impl InterestReport {
    /// Wrap a computed schedule for rendering.
    pub const fn new(schedule: InterestSchedule) -> Self {
        Self { schedule }
    }

    /// The underlying schedule.
    pub const fn schedule(&self) -> &InterestSchedule {
        &self.schedule
    }

    /// Render the schedule as a table.
    pub fn to_ascii_table(&self) -> String {
        const WIDTH: usize = 66;
        let mut output = String::new();

        output.push_str(&format!(
            "\nInterest on {:.2} at {:.2}% per year\n",
            self.schedule.principal,
            self.schedule.annual_rate * 100.0
        ));
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<14} {:>16} {:>20} {:>13}\n",
            "Time Period", "Interest Earned", "Percentage Gain (%)", "Total Value"
        ));
        output.push_str(&"-".repeat(WIDTH));
        output.push('\n');

        for row in &self.schedule.rows {
            // Per-day gain prints three decimals, longer periods two.
            let pct_decimals = match row.period {
                CompoundingPeriod::Day => 3,
                _ => 2,
            };
            output.push_str(&format!(
                "{:<14} {:>16.2} {:>20.prec$} {:>13.2}\n",
                row.period.label(),
                row.interest,
                row.percent_of_principal,
                row.total_value,
                prec = pct_decimals,
            ));
        }

        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');
        output
    }
}

/// Option payoff at expiration, all four strategies over a price grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffReport {
    grid: PayoffGrid,
}

impl PayoffReport {
    /// Wrap a computed payoff grid for rendering.
    pub const fn new(grid: PayoffGrid) -> Self {
        Self { grid }
    }

    /// The underlying grid.
    pub const fn grid(&self) -> &PayoffGrid {
        &self.grid
    }

    /// Render the payoff grid, one column per strategy.
    pub fn to_ascii_table(&self) -> String {
        const WIDTH: usize = 60;
        let mut output = String::new();

        output.push_str("\nOption Payoff at Expiration\n");
        output.push_str(&format!(
            "Strike {:.2}, call premium {:.2}, put premium {:.2}\n",
            self.grid.strike, self.grid.call_premium, self.grid.put_premium
        ));
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');

        output.push_str(&format!("{:>8}", "Spot"));
        for strategy in OptionStrategy::ALL {
            output.push_str(&format!(" {:>12}", strategy.label()));
        }
        output.push('\n');
        output.push_str(&"-".repeat(WIDTH));
        output.push('\n');

        for row in &self.grid.rows {
            output.push_str(&format!("{:>8.2}", row.spot));
            for profit in row.profits {
                output.push_str(&format!(" {profit:>12.2}"));
            }
            output.push('\n');
        }

        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hobart_metrics::{
        Holding, evaluate, interest_schedule, measure_performance, payoff_grid, price_grid,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_earnings_report_sorts_ascending() {
        let report = EarningsReport::new(vec![
            EarningsRecord {
                symbol: "JPM".to_string(),
                earnings_date: date(2025, 10, 14),
            },
            EarningsRecord {
                symbol: "ACN".to_string(),
                earnings_date: date(2025, 9, 25),
            },
            EarningsRecord {
                symbol: "NKE".to_string(),
                earnings_date: date(2025, 10, 1),
            },
        ]);

        let symbols: Vec<&str> = report.records().iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["ACN", "NKE", "JPM"]);

        let table = report.to_ascii_table();
        assert!(table.contains("25-09-2025"));
        assert!(table.contains("Earnings Date"));
    }

    #[test]
    fn test_performance_table_header_order() {
        let record = measure_performance("AAPL", 100.0, &[], date(2025, 6, 15));
        let table = PerformanceReport::new(vec![record]).to_ascii_table();

        let header = table
            .lines()
            .find(|l| l.starts_with("Symbol"))
            .expect("header line");
        let sym = header.find("6m").unwrap();
        let ytd = header.find("YTD").unwrap();
        let one_year = header.find(" 1y").unwrap();
        assert!(sym < ytd && ytd < one_year);
        assert!(table.contains("N/A"));
    }

    #[test]
    fn test_portfolio_table_total_row_and_na_cells() {
        let results = vec![
            evaluate(&Holding::new("AAPL", 10.0, 150.0), Some(180.0)),
            evaluate(&Holding::new("ZIM", 15.0, 17.63), None),
        ];
        let report = PortfolioReport::new(results);
        let table = report.to_ascii_table();

        assert!(table.contains("Ticker"));
        assert!(table.contains("TOTAL"));
        assert!(table.contains("N/A"));
        assert!(table.contains("1800.00"));
        // Absent row sorts after the valued one.
        let aapl = table.find("AAPL").unwrap();
        let zim = table.find("ZIM").unwrap();
        assert!(aapl < zim);
    }

    #[test]
    fn test_interest_table_cells() {
        let report = InterestReport::new(interest_schedule(50_000.0, 0.04));
        let table = report.to_ascii_table();

        assert!(table.contains("Per Year"));
        assert!(table.contains("2000.00"));
        assert!(table.contains("166.67"));
        assert!(table.contains("5.48"));
        assert!(table.contains("52000.00"));
    }

    #[test]
    fn test_interest_percentage_precision_per_row() {
        let table = InterestReport::new(interest_schedule(50_000.0, 0.04)).to_ascii_table();
        let pct = |label: &str| {
            let line = table.lines().find(|l| l.starts_with(label)).unwrap();
            line.split_whitespace().rev().nth(1).unwrap().to_string()
        };

        // Two decimals for the longer periods, three for the per-day row.
        assert_eq!(pct("Per Year"), "4.00");
        assert_eq!(pct("Per Month"), "0.33");
        assert_eq!(pct("Per Day"), "0.011");
    }

    #[test]
    fn test_payoff_table_cells() {
        let spots = price_grid(200.0, 5);
        let report = PayoffReport::new(payoff_grid(100.0, 10.0, 8.0, &spots));
        let table = report.to_ascii_table();

        assert!(table.contains("Strike 100.00, call premium 10.00, put premium 8.00"));
        assert!(table.contains("Long Call"));
        assert!(table.contains("Short Put"));

        // At settlement 150: long call 40, short call -40, long put -8, short put 8.
        let row = table.lines().find(|l| l.starts_with("  150.00")).unwrap();
        let cells: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(cells, vec!["150.00", "40.00", "-40.00", "-8.00", "8.00"]);
    }
}
