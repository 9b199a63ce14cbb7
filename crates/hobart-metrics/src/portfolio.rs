//! Portfolio valuation against current market prices.

use crate::change::change_pct;
use serde::{Deserialize, Serialize};

/// A recorded position: quantity and acquisition price, supplied by the
/// caller and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol.
    pub symbol: String,
    /// Number of shares held.
    pub shares: f64,
    /// Price paid per share.
    pub purchase_price: f64,
}

impl Holding {
    /// Create a new holding.
    pub fn new(symbol: impl Into<String>, shares: f64, purchase_price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            shares,
            purchase_price,
        }
    }
}

/// Valuation of one holding.
///
/// When the provider returned no current price, every derived field except
/// `initial_value` is `None`. Absence is never encoded as a numeric zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingResult {
    /// The holding being valued.
    pub holding: Holding,
    /// Latest market price, if the provider returned one.
    pub current_price: Option<f64>,
    /// `shares * purchase_price`; computable from caller-supplied facts alone.
    pub initial_value: f64,
    /// `shares * current_price`.
    pub current_value: Option<f64>,
    /// `current_value - initial_value`.
    pub profit_loss: Option<f64>,
    /// Percentage return on the purchase price.
    pub return_percent: Option<f64>,
}

/// Aggregate totals across a set of holding results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of every holding's initial value.
    pub total_initial: f64,
    /// Sum of present current values; absent holdings contribute zero.
    pub total_current: f64,
    /// Sum of present profit/loss values; absent holdings contribute zero.
    pub total_profit_loss: f64,
    /// Overall return computed from the summed totals.
    pub total_return_percent: f64,
}

/// Value a holding at the given current price.
pub fn evaluate(holding: &Holding, current_price: Option<f64>) -> HoldingResult {
    let initial_value = holding.shares * holding.purchase_price;

    let (current_value, profit_loss, return_percent) = match current_price {
        Some(price) => (
            Some(holding.shares * price),
            Some(holding.shares * price - initial_value),
            Some(change_pct(price, holding.purchase_price)),
        ),
        None => (None, None, None),
    };

    HoldingResult {
        holding: holding.clone(),
        current_price,
        initial_value,
        current_value,
        profit_loss,
        return_percent,
    }
}

/// Sum the results into a TOTAL row.
///
/// `initial_value` is always present and always counted; absent
/// `current_value`/`profit_loss` contribute zero. The overall return is
/// derived from the summed totals, and is zero for an empty (or zero-cost)
/// portfolio.
pub fn summarize(results: &[HoldingResult]) -> PortfolioSummary {
    let total_initial: f64 = results.iter().map(|r| r.initial_value).sum();
    let total_current: f64 = results.iter().filter_map(|r| r.current_value).sum();
    let total_profit_loss: f64 = results.iter().filter_map(|r| r.profit_loss).sum();

    let total_return_percent = if total_initial > 0.0 {
        (total_current - total_initial) / total_initial * 100.0
    } else {
        0.0
    };

    PortfolioSummary {
        total_initial,
        total_current,
        total_profit_loss,
        total_return_percent,
    }
}

/// Order results by profit/loss descending, absent values strictly last.
///
/// The negative-infinity sentinel exists only for ordering; it is never
/// written into any result.
pub fn sort_by_profit_loss(results: &mut [HoldingResult]) {
    results.sort_by(|a, b| {
        let ka = a.profit_loss.unwrap_or(f64::NEG_INFINITY);
        let kb = b.profit_loss.unwrap_or(f64::NEG_INFINITY);
        kb.total_cmp(&ka)
    });
}
