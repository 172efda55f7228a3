// src/error.rs

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Failure of a single provider request.
///
/// Inside the filter and aggregator loops these are recoverable: the ticker
/// is dropped and the run continues. The universe fetch wraps one into
/// [`ScreenError::Universe`] instead, which aborts the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    Malformed(String),
}

/// Fatal errors surfaced to the caller of a screening run.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("universe discovery failed: {0}")]
    Universe(#[source] FetchError),

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("could not assemble the result table: {0}")]
    Table(#[from] PolarsError),

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: PolarsError,
    },
}
