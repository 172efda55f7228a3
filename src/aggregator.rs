// src/aggregator.rs

use futures::StreamExt;
use polars::prelude::*;

use crate::history::{DividendRecord, HistorySource};
use crate::ticker::Ticker;

/// The combined dividend history of every selected ticker.
///
/// Records are grouped by ticker in selection order; within one ticker they
/// keep the chronological order the provider returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedDataset {
    records: Vec<DividendRecord>,
}

impl AggregatedDataset {
    pub fn records(&self) -> &[DividendRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lays the records out as a `ticker, date, dividend` DataFrame, dates
    /// formatted `%Y-%m-%d`.
    pub fn to_dataframe(&self) -> Result<DataFrame, PolarsError> {
        let tickers: Vec<&str> = self.records.iter().map(|r| r.ticker.as_str()).collect();
        let dates: Vec<String> = self
            .records
            .iter()
            .map(|r| r.date.format("%Y-%m-%d").to_string())
            .collect();
        let amounts: Vec<f64> = self.records.iter().map(|r| r.amount).collect();

        DataFrame::new(vec![
            Series::new("ticker", tickers),
            Series::new("date", dates),
            Series::new("dividend", amounts),
        ])
    }
}

/// Builds the combined dataset from the filtered ticker list.
pub struct DividendAggregator<'a, H> {
    source: &'a H,
    concurrency: usize,
}

impl<'a, H: HistorySource> DividendAggregator<'a, H> {
    pub fn new(source: &'a H) -> Self {
        DividendAggregator {
            source,
            concurrency: 1,
        }
    }

    /// Lets up to `concurrency` history fetches run at once; results are
    /// still consumed in selection order.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Fetches every selected ticker's history and concatenates the
    /// per-ticker blocks in selection order. A failed fetch skips that ticker
    /// whole; no partial records are emitted for it. If every fetch fails the
    /// dataset comes back empty, which is a normal outcome.
    pub async fn build(&self, selected: &[Ticker]) -> AggregatedDataset {
        let mut fetches = futures::stream::iter(selected.iter().map(|ticker| async move {
            (ticker, self.source.fetch(ticker).await)
        }))
        .buffered(self.concurrency);

        let mut records = Vec::new();
        while let Some((ticker, result)) = fetches.next().await {
            match result {
                Ok(history) => records.extend(history),
                Err(error) => eprintln!("failed to fetch dividends for {ticker}: {error}"),
            }
        }
        AggregatedDataset { records }
    }
}
