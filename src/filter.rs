// src/filter.rs

use futures::StreamExt;

use crate::metrics::{FinancialSnapshot, MetricsSource};
use crate::ticker::Ticker;

/// Thresholds a ticker must satisfy to survive the filter.
///
/// `min_yield` is always evaluated; the two caps are evaluated only when set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterCriteria {
    pub min_yield: f64,
    pub max_pe: Option<f64>,
    pub max_payout: Option<f64>,
}

impl FilterCriteria {
    pub fn new(min_yield: f64) -> Self {
        FilterCriteria {
            min_yield,
            max_pe: None,
            max_payout: None,
        }
    }

    /// Evaluates the criteria against one snapshot, in order: yield, then PE,
    /// then payout, short-circuiting on the first failure. A metric that is
    /// absent while its criterion is active fails that criterion.
    pub fn matches(&self, snapshot: &FinancialSnapshot) -> bool {
        match snapshot.dividend_yield {
            Some(dy) if dy >= self.min_yield => {}
            _ => return false,
        }
        if let Some(max_pe) = self.max_pe {
            match snapshot.price_earnings_ratio {
                Some(pe) if pe <= max_pe => {}
                _ => return false,
            }
        }
        if let Some(max_payout) = self.max_payout {
            match snapshot.payout_ratio {
                Some(payout) if payout <= max_payout => {}
                _ => return false,
            }
        }
        true
    }
}

/// Selects the tickers whose metrics satisfy the caller's criteria.
pub struct MetricsFilter<'a, M> {
    source: &'a M,
    concurrency: usize,
}

impl<'a, M: MetricsSource> MetricsFilter<'a, M> {
    pub fn new(source: &'a M) -> Self {
        MetricsFilter {
            source,
            concurrency: 1,
        }
    }

    /// Lets up to `concurrency` metric lookups run at once. The buffered
    /// stream yields in universe order, so the selection is identical to the
    /// sequential run.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Walks the universe in order and keeps every ticker whose snapshot
    /// passes `criteria`. A failed lookup drops that one ticker; it never
    /// aborts the selection and is not retried.
    pub async fn select(&self, universe: &[Ticker], criteria: &FilterCriteria) -> Vec<Ticker> {
        let mut lookups = futures::stream::iter(universe.iter().map(|ticker| async move {
            (ticker, self.source.fetch(ticker).await)
        }))
        .buffered(self.concurrency);

        let mut selected = Vec::new();
        while let Some((ticker, result)) = lookups.next().await {
            match result {
                Ok(snapshot) => {
                    if criteria.matches(&snapshot) {
                        selected.push(ticker.clone());
                    }
                }
                Err(error) => eprintln!("failed to fetch metrics for {ticker}: {error}"),
            }
        }
        selected
    }
}
