// src/pipeline.rs

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::*;

use crate::aggregator::{AggregatedDataset, DividendAggregator};
use crate::config::DEFAULT_MIN_YIELD;
use crate::error::ScreenError;
use crate::filter::{FilterCriteria, MetricsFilter};
use crate::history::{HistorySource, YahooDividends};
use crate::metrics::{MetricsSource, YahooMetrics};
use crate::session::HttpSession;
use crate::universe::{BrapiUniverse, UniverseSource};

/// Caller-facing options for one screening run.
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    pub output_path: PathBuf,
    pub criteria: FilterCriteria,
    /// Provider requests in flight per stage; 1 is the sequential baseline.
    pub concurrency: usize,
}

impl ScreenConfig {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        ScreenConfig {
            output_path: output_path.into(),
            criteria: FilterCriteria::new(DEFAULT_MIN_YIELD),
            concurrency: 1,
        }
    }
}

/// Terminal state of a run that did not fail outright.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The dataset was non-empty and has been written out.
    Written { path: PathBuf, rows: usize },
    /// Every ticker was filtered out or failed; nothing was written.
    NothingCollected,
}

/// Drives the three pipeline stages in strict sequence: universe discovery,
/// metrics filtering, dividend aggregation.
pub struct Screener<U, M, H> {
    universe: U,
    metrics: M,
    history: H,
}

impl Screener<BrapiUniverse, YahooMetrics, YahooDividends> {
    /// Wires the screener to its live providers, all sharing `session`.
    pub fn live(session: &HttpSession) -> Self {
        Screener::new(
            BrapiUniverse::new(session.clone()),
            YahooMetrics::new(session.clone()),
            YahooDividends::new(session.clone()),
        )
    }
}

impl<U, M, H> Screener<U, M, H>
where
    U: UniverseSource,
    M: MetricsSource,
    H: HistorySource,
{
    pub fn new(universe: U, metrics: M, history: H) -> Self {
        Screener {
            universe,
            metrics,
            history,
        }
    }

    /// Runs the pipeline and writes the CSV when anything was collected.
    ///
    /// Only a failed universe fetch aborts the run; per-ticker failures in
    /// the two later stages are absorbed at their stage boundary.
    pub async fn run(&self, config: &ScreenConfig) -> Result<RunOutcome, ScreenError> {
        let universe = self.universe.fetch().await.map_err(ScreenError::Universe)?;

        let selected = MetricsFilter::new(&self.metrics)
            .with_concurrency(config.concurrency)
            .select(&universe, &config.criteria)
            .await;

        let dataset = DividendAggregator::new(&self.history)
            .with_concurrency(config.concurrency)
            .build(&selected)
            .await;

        if dataset.is_empty() {
            return Ok(RunOutcome::NothingCollected);
        }

        let rows = dataset.len();
        write_csv(&dataset, &config.output_path)?;
        Ok(RunOutcome::Written {
            path: config.output_path.clone(),
            rows,
        })
    }
}

fn write_csv(dataset: &AggregatedDataset, path: &Path) -> Result<(), ScreenError> {
    let mut df = dataset.to_dataframe()?;
    File::create(path)
        .map_err(PolarsError::from)
        .and_then(|mut file| CsvWriter::new(&mut file).finish(&mut df))
        .map_err(|source| ScreenError::Write {
            path: path.to_path_buf(),
            source,
        })
}
