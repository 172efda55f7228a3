// src/lib.rs

pub mod aggregator;
pub mod config;
pub mod error;
pub mod filter;
pub mod history;
pub mod metrics;
pub mod pipeline;
pub mod session;
pub mod ticker;
pub mod universe;

pub use aggregator::{AggregatedDataset, DividendAggregator};
pub use error::{FetchError, ScreenError};
pub use filter::{FilterCriteria, MetricsFilter};
pub use history::{DividendRecord, HistorySource, YahooDividends};
pub use metrics::{FinancialSnapshot, MetricsSource, YahooMetrics};
pub use pipeline::{RunOutcome, ScreenConfig, Screener};
pub use session::HttpSession;
pub use ticker::Ticker;
pub use universe::{BrapiUniverse, UniverseSource};
