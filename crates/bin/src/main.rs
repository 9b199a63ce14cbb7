//! hobart CLI binary.
//!
//! Provides the `earnings`, `performance`, `portfolio`, `interest`, and
//! `payoff` commands over the hobart crates.

use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use hobart::config::{PortfolioConfig, Watchlist};
use hobart_data::yahoo::{YahooCalendarProvider, YahooQuoteProvider};
use hobart_data::{RateLimiter, fetch_batch};
use hobart_metrics::{evaluate, interest_schedule, measure_performance, payoff_grid, price_grid};
use hobart_output::{
    EarningsReport, ExportFormat, Exporter, InterestReport, PayoffReport, PerformanceReport,
    PortfolioReport, default_export_path,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process;
use std::time::Duration as StdDuration;

#[derive(Parser)]
#[command(name = "hobart")]
#[command(about = "Stock watchlist utilities over Yahoo Finance", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upcoming earnings dates for a list of symbols
    Earnings {
        /// Ticker symbols (alternative to --watchlist)
        symbols: Vec<String>,

        /// JSON watchlist file with a "symbols" array
        #[arg(long)]
        watchlist: Option<PathBuf>,

        /// Minimum delay between requests, in milliseconds
        #[arg(long, default_value = "1000")]
        delay_ms: u64,
    },

    /// Price performance over the standard time windows
    Performance {
        /// Ticker symbols (alternative to --watchlist)
        symbols: Vec<String>,

        /// JSON watchlist file with a "symbols" array
        #[arg(long)]
        watchlist: Option<PathBuf>,

        /// Minimum delay between requests, in milliseconds
        #[arg(long, default_value = "1000")]
        delay_ms: u64,

        /// History lookback in years
        #[arg(long, default_value = "10")]
        years: i64,
    },

    /// Value a portfolio of holdings
    Portfolio {
        /// JSON holdings file with a "holdings" array
        #[arg(long)]
        holdings: PathBuf,

        /// Minimum delay between requests, in milliseconds
        #[arg(long, default_value = "1000")]
        delay_ms: u64,

        /// Write the report to a file as well as stdout
        #[arg(long)]
        export: bool,

        /// Export format: csv, json, or pretty-json
        #[arg(long, default_value = "csv")]
        format: String,

        /// Export path; defaults to portfolio_analysis_<timestamp>.<ext>
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Simple-interest schedule for a principal and annual rate
    Interest {
        /// Principal amount
        principal: f64,

        /// Annual rate as a fraction, e.g. 0.04 for 4%
        annual_rate: f64,
    },

    /// Option payoff at expiration for the four single-leg strategies
    Payoff {
        /// Strike price
        strike: f64,

        /// Premium on the call legs
        call_premium: f64,

        /// Premium on the put legs
        put_premium: f64,

        /// Highest settlement price in the grid; defaults to twice the strike
        #[arg(long)]
        max_spot: Option<f64>,

        /// Number of settlement prices in the grid
        #[arg(long, default_value = "21")]
        steps: usize,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Earnings {
            symbols,
            watchlist,
            delay_ms,
        } => {
            let symbols = resolve_symbols(symbols, watchlist)?;
            show_earnings(&symbols, delay_ms).await
        }
        Commands::Performance {
            symbols,
            watchlist,
            delay_ms,
            years,
        } => {
            let symbols = resolve_symbols(symbols, watchlist)?;
            show_performance(&symbols, delay_ms, years).await
        }
        Commands::Portfolio {
            holdings,
            delay_ms,
            export,
            format,
            output,
        } => {
            let config = PortfolioConfig::from_path(&holdings)?;
            show_portfolio(&config, delay_ms, export, &format, output).await
        }
        Commands::Interest {
            principal,
            annual_rate,
        } => {
            let report = InterestReport::new(interest_schedule(principal, annual_rate));
            println!("{}", report.to_ascii_table());
            Ok(())
        }
        Commands::Payoff {
            strike,
            call_premium,
            put_premium,
            max_spot,
            steps,
        } => {
            let spots = price_grid(max_spot.unwrap_or(strike * 2.0), steps);
            let report = PayoffReport::new(payoff_grid(strike, call_premium, put_premium, &spots));
            println!("{}", report.to_ascii_table());
            Ok(())
        }
    }
}

fn resolve_symbols(
    symbols: Vec<String>,
    watchlist: Option<PathBuf>,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    match watchlist {
        Some(path) => Ok(Watchlist::from_path(&path)?.symbols),
        None if symbols.is_empty() => {
            Err("No symbols given: pass tickers or --watchlist <file>".into())
        }
        None => Ok(symbols),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:<8} [{bar:40}] {pos}/{len}")
            .expect("valid progress template")
            .progress_chars("=> "),
    );
    pb
}

async fn show_earnings(
    symbols: &[String],
    delay_ms: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = YahooCalendarProvider::new();
    let limiter = RateLimiter::new(StdDuration::from_millis(delay_ms));
    let pb = progress_bar(symbols.len());

    let batch = fetch_batch(symbols, &limiter, |symbol| {
        let provider = &provider;
        let pb = &pb;
        async move {
            pb.set_message(symbol.clone());
            let result = provider.next_earnings(&symbol).await;
            pb.inc(1);
            result
        }
    })
    .await;
    pb.finish_and_clear();

    if batch.items.is_empty() {
        println!("No earnings dates found.");
        return Ok(());
    }

    let report = EarningsReport::new(batch.items);
    println!("{}", report.to_ascii_table());

    if !batch.failures.is_empty() {
        println!("{} symbol(s) skipped.", batch.failures.len());
    }
    Ok(())
}

async fn show_performance(
    symbols: &[String],
    delay_ms: u64,
    years: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = YahooQuoteProvider::new();
    let limiter = RateLimiter::new(StdDuration::from_millis(delay_ms));
    let pb = progress_bar(symbols.len());

    let end = Utc::now();
    let start = end - Duration::days(365 * years);
    let today = end.date_naive();

    let batch = fetch_batch(symbols, &limiter, |symbol| {
        let provider = &provider;
        let pb = &pb;
        async move {
            pb.set_message(symbol.clone());
            let result = async {
                let current_price = provider.latest_price(&symbol).await?;
                let history = provider.price_history(&symbol, start, end).await?;
                Ok(measure_performance(
                    symbol.as_str(),
                    current_price,
                    &history,
                    today,
                ))
            }
            .await;
            pb.inc(1);
            result
        }
    })
    .await;
    pb.finish_and_clear();

    let report = PerformanceReport::new(batch.items);
    println!("{}", report.to_ascii_table());

    if !batch.failures.is_empty() {
        println!("{} symbol(s) skipped.", batch.failures.len());
    }
    Ok(())
}

async fn show_portfolio(
    config: &PortfolioConfig,
    delay_ms: u64,
    export: bool,
    format: &str,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = YahooQuoteProvider::new();
    let limiter = RateLimiter::new(StdDuration::from_millis(delay_ms));
    let pb = progress_bar(config.holdings.len());

    println!("Analyzing {} holdings...", config.holdings.len());

    // Holdings are valued one by one, so two lots of the same ticker each
    // keep their own shares and purchase price. A failed quote still
    // produces a row: the holding is valued with an absent current price
    // rather than dropped from the table.
    let mut results = Vec::with_capacity(config.holdings.len());
    for holding in &config.holdings {
        limiter.wait().await;
        pb.set_message(holding.symbol.clone());
        let price = match provider.latest_price(&holding.symbol).await {
            Ok(price) => Some(price),
            Err(e) => {
                eprintln!("Warning: failed to fetch {}: {}", holding.symbol, e);
                None
            }
        };
        results.push(evaluate(holding, price));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let report = PortfolioReport::new(results);
    println!("{}", report.to_ascii_table());

    if export || output.is_some() {
        let format: ExportFormat = format.parse()?;
        let path = output.unwrap_or_else(|| default_export_path(format));
        report.export_to_file(&path, format)?;
        println!("✓ Portfolio analysis exported to: {}", path.display());
    }
    Ok(())
}
