#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod change;
pub mod interest;
pub mod payoff;
pub mod performance;
pub mod portfolio;
pub mod windows;

pub use change::change_pct;
pub use interest::{CompoundingPeriod, InterestRow, InterestSchedule, interest_schedule};
pub use payoff::{OptionStrategy, PayoffGrid, PayoffRow, payoff_grid, price_grid};
pub use performance::{PerformanceRecord, WindowChange, measure_performance};
pub use portfolio::{Holding, HoldingResult, PortfolioSummary, evaluate, summarize};
pub use windows::{PricePoint, STANDARD_WINDOWS, TimeWindow};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
