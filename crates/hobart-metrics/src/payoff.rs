//! Profit or loss at expiration for the four single-leg option strategies.

use serde::{Deserialize, Serialize};

/// A single-leg option position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionStrategy {
    /// Bought call.
    LongCall,
    /// Written call.
    ShortCall,
    /// Bought put.
    LongPut,
    /// Written put.
    ShortPut,
}

impl OptionStrategy {
    /// The four strategies in display order.
    pub const ALL: [Self; 4] = [Self::LongCall, Self::ShortCall, Self::LongPut, Self::ShortPut];

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::LongCall => "Long Call",
            Self::ShortCall => "Short Call",
            Self::LongPut => "Long Put",
            Self::ShortPut => "Short Put",
        }
    }

    /// Which of the two quoted premiums this strategy pays or collects.
    pub const fn premium(self, call_premium: f64, put_premium: f64) -> f64 {
        match self {
            Self::LongCall | Self::ShortCall => call_premium,
            Self::LongPut | Self::ShortPut => put_premium,
        }
    }

    /// Profit or loss at expiration when the underlying settles at `spot`.
    ///
    /// Long call: `max(spot - strike, 0) - premium`; long put:
    /// `max(strike - spot, 0) - premium`. The short sides are the exact
    /// negatives, the premium collected instead of paid.
    pub fn profit(self, spot: f64, strike: f64, premium: f64) -> f64 {
        match self {
            Self::LongCall => (spot - strike).max(0.0) - premium,
            Self::ShortCall => -Self::LongCall.profit(spot, strike, premium),
            Self::LongPut => (strike - spot).max(0.0) - premium,
            Self::ShortPut => -Self::LongPut.profit(spot, strike, premium),
        }
    }

    /// Settlement price at which the position neither gains nor loses.
    pub fn breakeven(self, strike: f64, premium: f64) -> f64 {
        match self {
            Self::LongCall | Self::ShortCall => strike + premium,
            Self::LongPut | Self::ShortPut => strike - premium,
        }
    }
}

/// Payoff at one settlement price, all four strategies side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffRow {
    /// Settlement price of the underlying.
    pub spot: f64,
    /// Profit/loss per strategy, in [`OptionStrategy::ALL`] order.
    pub profits: [f64; 4],
}

/// Payoff rows over a settlement price grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffGrid {
    /// Common strike price.
    pub strike: f64,
    /// Premium on the call legs.
    pub call_premium: f64,
    /// Premium on the put legs.
    pub put_premium: f64,
    /// One row per settlement price, in the order the prices were given.
    pub rows: Vec<PayoffRow>,
}

/// Evenly spaced settlement prices from zero to `max_spot` inclusive.
pub fn price_grid(max_spot: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![max_spot];
    }
    let step = max_spot / (steps - 1) as f64;
    (0..steps).map(|i| i as f64 * step).collect()
}

/// Evaluate all four strategies at every settlement price.
pub fn payoff_grid(strike: f64, call_premium: f64, put_premium: f64, spots: &[f64]) -> PayoffGrid {
    let rows = spots
        .iter()
        .map(|&spot| PayoffRow {
            spot,
            profits: OptionStrategy::ALL.map(|strategy| {
                strategy.profit(spot, strike, strategy.premium(call_premium, put_premium))
            }),
        })
        .collect();

    PayoffGrid {
        strike,
        call_premium,
        put_premium,
        rows,
    }
}
